#![cfg(feature = "std")]

//! Text rendering of the board and the player-facing messages.

use std::string::String;

use crate::{
    common::{Cell, MoveError, Player},
    config::{BOARD_SIZE, NUM_CELLS},
    game::GameStatus,
};

pub const ROW_PROMPT: &str = "Enter row 1, 2, or 3: ";
pub const COL_PROMPT: &str = "Enter column 1, 2, or 3: ";

/// Draw the nine cells as a framed grid.
///
/// ```text
///        |       |
///    X   |   O   |
/// _______|_______|_______
/// ```
pub fn render_board(cells: &[Cell; NUM_CELLS]) -> String {
    let mut out = String::new();
    for (r, row) in cells.chunks(BOARD_SIZE).enumerate() {
        out.push_str("       |       |\n");
        let glyphs: Vec<String> = row
            .iter()
            .map(|cell| std::format!("   {}   ", cell.glyph()))
            .collect();
        out.push_str(glyphs.join("|").trim_end());
        out.push('\n');
        if r + 1 < BOARD_SIZE {
            out.push_str("_______|_______|_______\n");
        } else {
            out.push_str("       |       |\n");
        }
    }
    out
}

pub fn turn_message(player: Player) -> String {
    std::format!("Player {}'s turn.", player)
}

/// Headline for a status; `current` is whoever is to move when play continues.
pub fn status_message(status: GameStatus, current: Player) -> String {
    match status {
        GameStatus::Continue => turn_message(current),
        GameStatus::Win(p) => std::format!("Player {} wins!", p),
        GameStatus::Draw => String::from("Draw."),
    }
}

/// Targeted re-prompt text for a rejected input.
pub fn rejection_message(err: MoveError) -> &'static str {
    match err {
        MoveError::InvalidFormat => "Invalid move: please type a number. Try again.",
        MoveError::OutOfBounds => "Invalid move: row and column must be 1, 2, or 3. Try again.",
        MoveError::CellOccupied => "Invalid move: that cell is already taken. Try again.",
        MoveError::GameOver => "The game is over.",
    }
}

pub const POST_GAME: &str = "Game over.\n\
To play again, type \"go\" and press the Enter key.\n\
To exit, type \"end\" and press the Enter key.";
