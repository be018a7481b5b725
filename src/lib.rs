#![cfg_attr(not(feature = "std"), no_std)]

mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod input;
#[cfg(feature = "std")]
mod host_cli;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod replay;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use input::*;
#[cfg(feature = "std")]
pub use host_cli::{CliHost, SessionStats};
#[cfg(feature = "std")]
pub use logging::init_logging;
