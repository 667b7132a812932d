//! Contract-based validation for move application.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare style: {P} action {Q}.

use super::action::Move;
use super::error::MoveError;
use super::rules::check_outcome;
use super::{Board, Position, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the coordinate lies on the board.
pub struct InBounds;

impl InBounds {
    /// Returns the position for `(row, col)`, or `OutOfBounds`.
    #[instrument]
    pub fn check(row: usize, col: usize) -> Result<Position, MoveError> {
        Position::from_coords(row, col).ok_or_else(|| {
            warn!(row, col, "Move out of bounds");
            MoveError::OutOfBounds { row, col }
        })
    }
}

/// Precondition: the board has no terminal outcome yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameAlreadyOver` once the board is won or drawn.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        let outcome = check_outcome(board);
        if outcome.is_terminal() {
            warn!(%outcome, "Move attempted after game over");
            Err(MoveError::GameAlreadyOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `CellOccupied` when the square holds a mark.
    #[instrument(skip(board))]
    pub fn check(board: &Board, position: Position) -> Result<(), MoveError> {
        if board.is_empty(position) {
            Ok(())
        } else {
            let (row, col) = position.coords();
            warn!(row, col, "Square already occupied");
            Err(MoveError::CellOccupied { row, col })
        }
    }
}

/// Composite precondition: the game is still on and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        GameNotOver::check(board)?;
        SquareIsEmpty::check(board, mov.position)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: squares are monotonic.
///
/// Exactly one square changed, from empty to the mover's mark. Every other
/// square is untouched.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Returns true when `after` is `before` plus the move's mark.
    pub fn holds(before: &Board, mov: &Move, after: &Board) -> bool {
        Position::ALL.iter().all(|&pos| {
            if pos == mov.position {
                before.get(pos) == Square::Empty && after.get(pos) == Square::Occupied(mov.player)
            } else {
                before.get(pos) == after.get(pos)
            }
        })
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game is not over
/// - Square must be empty
///
/// Postconditions:
/// - Board remains monotonic
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, action: &Move, after: &Board) -> Result<(), MoveError> {
        if MonotonicBoard::holds(before, action, after) {
            Ok(())
        } else {
            warn!(%action, "Board monotonicity violated");
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: board is not the previous board plus {}",
                action
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameOutcome, Player};

    #[test]
    fn test_precondition_empty_square() {
        let board = Board::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&board, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&board, &action),
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(pos, Square::Occupied(Player::O));
        }
        let action = Move::new(Player::X, Position::Center);
        assert_eq!(
            MoveContract::pre(&board, &action),
            Err(MoveError::GameAlreadyOver(GameOutcome::Win(Player::O)))
        );
    }

    #[test]
    fn test_in_bounds() {
        assert_eq!(InBounds::check(2, 0), Ok(Position::BottomLeft));
        assert_eq!(
            InBounds::check(0, 3),
            Err(MoveError::OutOfBounds { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Board::new();
        let action = Move::new(Player::X, Position::Center);
        let mut after = before;
        after.set(Position::Center, Square::Occupied(Player::X));
        assert!(MoveContract::post(&before, &action, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Board::new();
        let action = Move::new(Player::X, Position::Center);
        let mut after = before;
        after.set(Position::Center, Square::Occupied(Player::X));
        after.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&before, &action, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_wrong_mark() {
        let before = Board::new();
        let action = Move::new(Player::X, Position::Center);
        let mut after = before;
        after.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoard::holds(&before, &action, &after));
    }
}
