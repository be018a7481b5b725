//! Parsing of raw player input into coordinates.
//!
//! Only the text shape is checked here; whether a coordinate lies on the
//! board is decided by the engine.

use crate::common::MoveError;

/// Parse a single row or column number.
pub fn parse_coordinate(input: &str) -> Result<i32, MoveError> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| MoveError::InvalidFormat)
}

/// Parse a whole move written as `row,col` or `row col`.
pub fn parse_move(input: &str) -> Result<(i32, i32), MoveError> {
    let input = input.trim();
    let (row, col) = input
        .split_once(',')
        .or_else(|| input.split_once(char::is_whitespace))
        .ok_or(MoveError::InvalidFormat)?;
    Ok((parse_coordinate(row)?, parse_coordinate(col)?))
}
