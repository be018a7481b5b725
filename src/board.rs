//! Board state: one occupancy `BitBoard` per player.
//!
//! The public API is 1-indexed (`row`, `col` in `1..=3`); storage is
//! 0-indexed. The two player bitboards never overlap.

use crate::bitboard::BitBoard;
use crate::common::{Cell, MoveError, Player};
use crate::config::{BOARD_SIZE, LINES, NUM_CELLS, NUM_LINES};
use core::fmt;

/// Occupancy bitboard for a single player.
pub type Marks = BitBoard<u16, BOARD_SIZE>;

/// Map 1-indexed external coordinates to storage coordinates.
pub(crate) fn to_index(row: i32, col: i32) -> Option<(usize, usize)> {
    let range = 1..=BOARD_SIZE as i32;
    if range.contains(&row) && range.contains(&col) {
        Some(((row - 1) as usize, (col - 1) as usize))
    } else {
        None
    }
}

fn line_masks() -> [Marks; NUM_LINES] {
    core::array::from_fn(|i| {
        let mut mask = Marks::new();
        for (r, c) in LINES[i] {
            // LINES only holds in-range coordinates
            let _ = mask.set(r, c);
        }
        mask
    })
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    x_marks: Marks,
    o_marks: Marks,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            x_marks: Marks::new(),
            o_marks: Marks::new(),
        }
    }

    /// Occupancy bitboard of `player`.
    pub fn marks(&self, player: Player) -> Marks {
        match player {
            Player::X => self.x_marks,
            Player::O => self.o_marks,
        }
    }

    fn marks_mut(&mut self, player: Player) -> &mut Marks {
        match player {
            Player::X => &mut self.x_marks,
            Player::O => &mut self.o_marks,
        }
    }

    /// Contents of the cell at 1-indexed (`row`, `col`); `None` when off the board.
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        let (r, c) = to_index(row, col)?;
        let cell = if self.x_marks.get(r, c).unwrap_or(false) {
            Cell::MarkX
        } else if self.o_marks.get(r, c).unwrap_or(false) {
            Cell::MarkO
        } else {
            Cell::Empty
        };
        Some(cell)
    }

    /// Whether (`row`, `col`) is on the board and unoccupied. Off-board
    /// coordinates are simply "not empty".
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.cell(row, col) == Some(Cell::Empty)
    }

    /// Put `player`'s mark at (`row`, `col`).
    ///
    /// The cell must be empty; callers validate through
    /// [`GameEngine::is_valid_move`](crate::GameEngine::is_valid_move) first.
    /// Off-board coordinates are reported as [`MoveError::OutOfBounds`].
    pub fn place(&mut self, row: i32, col: i32, player: Player) -> Result<(), MoveError> {
        debug_assert!(
            !self.in_range_and_occupied(row, col),
            "place on occupied cell ({}, {})",
            row,
            col
        );
        let (r, c) = to_index(row, col).ok_or(MoveError::OutOfBounds)?;
        self.marks_mut(player).set(r, c)?;
        Ok(())
    }

    fn in_range_and_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.cell(row, col), Some(Cell::MarkX | Cell::MarkO))
    }

    /// `true` if any row, column or diagonal is entirely `player`'s.
    pub fn has_three_in_a_row(&self, player: Player) -> bool {
        let marks = self.marks(player);
        line_masks().iter().any(|line| marks.covers(*line))
    }

    /// `true` when no cell is empty. Recomputed from the marks on every call.
    pub fn is_full(&self) -> bool {
        (self.x_marks | self.o_marks).is_full()
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.x_marks.count_ones() + self.o_marks.count_ones()
    }

    /// All nine cells in row-major order.
    pub fn render(&self) -> [Cell; NUM_CELLS] {
        let mut cells = [Cell::Empty; NUM_CELLS];
        for (r, c) in self.x_marks.iter_set_bits() {
            cells[r * BOARD_SIZE + c] = Cell::MarkX;
        }
        for (r, c) in self.o_marks.iter_set_bits() {
            cells[r * BOARD_SIZE + c] = Cell::MarkO;
        }
        cells
    }

    /// Remove every mark.
    pub fn clear(&mut self) {
        self.x_marks.clear_all();
        self.o_marks.clear_all();
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.render();
        write!(f, "Board[")?;
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 && i % BOARD_SIZE == 0 {
                write!(f, "/")?;
            }
            let ch = match cell {
                Cell::Empty => '.',
                other => other.glyph(),
            };
            write!(f, "{}", ch)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_index_bounds() {
        assert_eq!(to_index(1, 1), Some((0, 0)));
        assert_eq!(to_index(3, 2), Some((2, 1)));
        assert_eq!(to_index(0, 1), None);
        assert_eq!(to_index(2, 4), None);
        assert_eq!(to_index(-1, 2), None);
    }

    #[test]
    fn every_line_mask_has_three_cells() {
        for mask in line_masks() {
            assert_eq!(mask.count_ones(), BOARD_SIZE);
        }
    }

    #[test]
    fn debug_shows_rows() {
        let mut board = Board::new();
        board.place(1, 1, Player::X).unwrap();
        board.place(2, 2, Player::O).unwrap();
        assert_eq!(format!("{:?}", board), "Board[X../.O./...]");
    }
}
