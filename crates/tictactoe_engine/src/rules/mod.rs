//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board. Rules are separate from board
//! storage so the contracts and the move functions can compose them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use super::{Board, GameOutcome};
use tracing::{instrument, trace};

/// Computes the outcome of a board.
///
/// A completed line wins, scanning [`LINES`] in order. Without one, a full
/// board is a draw and anything else is still ongoing.
#[instrument(skip(board))]
pub fn check_outcome(board: &Board) -> GameOutcome {
    let outcome = if let Some(winner) = check_winner(board) {
        GameOutcome::Win(winner)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    };
    trace!(?outcome, "Evaluated board");
    outcome
}
