//! Validation of caller-supplied boards, player tokens and coordinates.
//!
//! Anything that arrives from outside the engine goes through here before
//! it touches a [`Board`].

use super::contracts::{InBounds, SquareIsEmpty};
use super::error::{MoveError, ValidationError};
use super::{Board, Player, Position, Square};
use serde_json::Value;
use tracing::{instrument, warn};

/// Checks that `grid` is exactly 3 rows of exactly 3 accepted cells.
///
/// The shape of the whole grid is checked before any cell value, so a
/// ragged grid is always a [`ValidationError::Shape`] regardless of what
/// its cells contain. Accepted cells are `""` or `0` for empty, `"X"` and
/// `"O"`.
#[instrument(skip(grid))]
pub fn validate_board(grid: &Value) -> Result<(), ValidationError> {
    parse_board(grid).map(|_| ())
}

/// Validates `grid` and converts it into a [`Board`] in one pass.
#[instrument(skip(grid))]
pub fn parse_board(grid: &Value) -> Result<Board, ValidationError> {
    let rows = shape(grid)?;
    let mut board = Board::new();
    for (pos, cell) in Position::ALL.into_iter().zip(rows.into_iter().flatten()) {
        let (row, col) = pos.coords();
        let square = cell_square(cell).ok_or_else(|| {
            warn!(row, col, %cell, "Rejected board cell");
            ValidationError::CellValue { row, col }
        })?;
        board.set(pos, square);
    }
    Ok(board)
}

/// Accepts exactly `"X"` or `"O"`.
#[instrument]
pub fn validate_player(value: &str) -> Result<Player, ValidationError> {
    match value {
        "X" => Ok(Player::X),
        "O" => Ok(Player::O),
        other => {
            warn!(player = other, "Rejected player token");
            Err(ValidationError::InvalidPlayer(other.to_string()))
        }
    }
}

impl std::str::FromStr for Player {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_player(s)
    }
}

/// Checks that `(row, col)` is on the board and empty.
///
/// Bounds are checked first; an out-of-range coordinate never reaches the
/// grid.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, row: usize, col: usize) -> Result<(), MoveError> {
    let position = InBounds::check(row, col)?;
    SquareIsEmpty::check(board, position)
}

fn shape(grid: &Value) -> Result<Vec<&Vec<Value>>, ValidationError> {
    let rows = grid.as_array().ok_or(ValidationError::Shape)?;
    if rows.len() != 3 {
        return Err(ValidationError::Shape);
    }
    rows.iter()
        .map(|row| match row.as_array() {
            Some(cells) if cells.len() == 3 => Ok(cells),
            _ => Err(ValidationError::Shape),
        })
        .collect()
}

fn cell_square(cell: &Value) -> Option<Square> {
    match cell {
        Value::String(token) => Square::from_token(token),
        Value::Number(n) if n.as_u64() == Some(0) => Some(Square::Empty),
        _ => None,
    }
}
