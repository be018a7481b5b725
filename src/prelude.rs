//! Commonly used types and utilities for ease of import.

pub use crate::{Board, Cell, GameEngine, GameStatus, MoveError, MoveResult, Player};

#[cfg(feature = "std")]
pub use crate::{replay::replay, CliHost, GameConfig, StartingPlayer};
