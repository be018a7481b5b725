//! Common types for tic-tac-toe: players, cell contents and move errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// One of the two sides. Exactly one is to move at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opponent.
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The cell value this player leaves on the board.
    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::MarkX,
            Player::O => Cell::MarkO,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    MarkX,
    MarkO,
}

impl Cell {
    /// Owner of the mark, `None` for an empty cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::MarkX => Some(Player::X),
            Cell::MarkO => Some(Player::O),
        }
    }

    /// Glyph drawn for this cell; empty cells are blank.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::MarkX => 'X',
            Cell::MarkO => 'O',
        }
    }
}

/// Reasons a move (or a piece of move input) is rejected.
///
/// Every variant is recoverable: the engine is left exactly as it was and the
/// host is expected to prompt again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    /// Input text is not an integer.
    InvalidFormat,
    /// Row or column is outside `1..=3`.
    OutOfBounds,
    /// The target cell already holds a mark.
    CellOccupied,
    /// The game has been won or drawn.
    GameOver,
}

impl From<BitBoardError> for MoveError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { .. } => MoveError::OutOfBounds,
            // only reachable with a misconfigured storage type
            BitBoardError::SizeTooLarge { .. } => MoveError::OutOfBounds,
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidFormat => write!(f, "Input is not a number"),
            MoveError::OutOfBounds => write!(f, "Row and column must be between 1 and 3"),
            MoveError::CellOccupied => write!(f, "Cell is already occupied"),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
