//! Session-layer error types.

use derive_more::{Display, Error, From};
use tictactoe_engine::{EngineError, MoveError, NoLegalMoveError, Player, ValidationError};
use tracing::instrument;

/// Coarse status a front-end reports for a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorStatus {
    /// The session does not exist.
    NotFound,
    /// The request carried an invalid value or an illegal move.
    BadRequest,
    /// The store itself is unusable.
    Internal,
}

/// Failure of a session operation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// No session with this id.
    #[display("Game session {} not found", _0)]
    #[from(ignore)]
    NotFound(#[error(not(source))] String),

    /// The player token is valid but is not the human's mark.
    #[display("Not your turn. This session expects player {expected}, got {got}")]
    #[from(ignore)]
    NotYourTurn {
        /// Mark the human plays in this session.
        expected: Player,
        /// Mark the request supplied.
        got: Player,
    },

    /// The engine rejected the input or the move.
    #[display("{}", _0)]
    Engine(EngineError),

    /// A thread panicked while holding the store lock.
    #[display("Session store lock poisoned")]
    #[from(ignore)]
    Poisoned,
}

impl SessionError {
    /// Maps the error onto the status a front-end should report.
    #[instrument(skip(self))]
    pub fn status(&self) -> ErrorStatus {
        match self {
            SessionError::NotFound(_) => ErrorStatus::NotFound,
            SessionError::NotYourTurn { .. } | SessionError::Engine(_) => ErrorStatus::BadRequest,
            SessionError::Poisoned => ErrorStatus::Internal,
        }
    }
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        Self::Engine(err.into())
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        Self::Engine(err.into())
    }
}

impl From<NoLegalMoveError> for SessionError {
    fn from(err: NoLegalMoveError) -> Self {
        Self::Engine(err.into())
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
