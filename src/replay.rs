#![cfg(feature = "std")]

//! Apply a scripted list of moves and summarize what happened.

use serde::Serialize;

use crate::{
    common::{Cell, MoveError, Player},
    game::{GameEngine, GameStatus},
};

/// One scripted move and how the engine answered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    pub row: i32,
    pub col: i32,
    /// Player whose turn it was when the move was submitted.
    pub player: Player,
    pub accepted: Option<GameStatus>,
    pub rejected: Option<MoveError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub starting_player: Player,
    pub steps: Vec<ReplayStep>,
    pub status: GameStatus,
    pub winner: Option<Player>,
    pub board: Vec<Cell>,
}

/// Submit every move in order. Rejected moves are recorded and play goes on
/// with the next one.
pub fn replay(engine: &mut GameEngine, moves: &[(i32, i32)]) -> ReplayReport {
    let starting_player = engine.starting_player();
    let steps = moves
        .iter()
        .map(|&(row, col)| {
            let player = engine.current_player();
            let (accepted, rejected) = match engine.submit_move(row, col) {
                Ok(status) => (Some(status), None),
                Err(e) => (None, Some(e)),
            };
            ReplayStep {
                row,
                col,
                player,
                accepted,
                rejected,
            }
        })
        .collect();
    let status = engine.current_status();
    let winner = match status {
        GameStatus::Win(p) => Some(p),
        _ => None,
    };
    ReplayReport {
        starting_player,
        steps,
        status,
        winner,
        board: engine.board_snapshot().to_vec(),
    }
}
