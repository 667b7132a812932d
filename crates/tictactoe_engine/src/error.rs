//! Error kinds raised by the rule engine.
//!
//! Every operation fails with a specific kind. Nothing is coerced: an
//! out-of-range coordinate is reported, never clamped.

use super::types::GameOutcome;

/// Malformed board or player input from outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ValidationError {
    /// The value is not exactly 3 rows of exactly 3 cells.
    #[display("Invalid board size. The board must be a 3x3 grid")]
    Shape,

    /// A cell holds something other than empty, `X` or `O`.
    #[display("Invalid board value at ({row}, {col}). Cells must be empty, 'X' or 'O'")]
    CellValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
    },

    /// A player token other than exactly `X` or `O`.
    #[display("Invalid player {:?}. Player must be 'X' or 'O'", _0)]
    InvalidPlayer(String),
}

impl std::error::Error for ValidationError {}

/// A move that cannot be played on the given board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside `0..3`.
    #[display("Move ({row}, {col}) out of bounds. Row and column must be between 0 and 2")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target square already holds a mark.
    #[display("Square ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The board already has a terminal outcome.
    #[display("Game is already over. Result: {}", _0)]
    GameAlreadyOver(GameOutcome),

    /// A postcondition of move application failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// The automated side was asked to move on a full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("No available moves. The board is full")]
pub struct NoLegalMoveError;

impl std::error::Error for NoLegalMoveError {}

/// Any engine failure, for callers that chain several operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum EngineError {
    /// Board or player input was malformed.
    #[display("{}", _0)]
    Validation(ValidationError),
    /// The move was illegal.
    #[display("{}", _0)]
    Move(MoveError),
    /// No empty square was left for the automated side.
    #[display("{}", _0)]
    NoLegalMove(NoLegalMoveError),
}
