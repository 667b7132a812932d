//! Legal-move enumeration, random selection and move application.

use super::action::Move;
use super::contracts::{Contract, InBounds, MoveContract};
use super::error::{MoveError, NoLegalMoveError};
use super::{Board, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, warn};

/// Every empty square, in row-major order.
///
/// The order is fixed so a seeded random source picks reproducibly.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect()
}

/// Picks one of [`legal_moves`] uniformly with the supplied random source.
#[instrument(skip(board, rng))]
pub fn choose_random_move<R>(board: &Board, rng: &mut R) -> Result<Position, NoLegalMoveError>
where
    R: Rng + ?Sized,
{
    let moves = legal_moves(board);
    let choice = moves.choose(rng).copied().ok_or_else(|| {
        warn!("No legal move left on the board");
        NoLegalMoveError
    })?;
    debug!(position = %choice, candidates = moves.len(), "Chose random move");
    Ok(choice)
}

/// Places `player`'s mark at `(row, col)` and returns the new board.
///
/// The input board is left unchanged. Checks run in order: bounds, then
/// terminal outcome, then occupancy. The postcondition is verified in
/// debug builds.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, row: usize, col: usize, player: Player) -> Result<Board, MoveError> {
    let position = InBounds::check(row, col)?;
    let action = Move::new(player, position);
    MoveContract::pre(board, &action)?;

    let mut after = *board;
    after.set(position, Square::Occupied(player));

    #[cfg(debug_assertions)]
    MoveContract::post(board, &action, &after)?;

    debug!(%action, "Applied move");
    Ok(after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameOutcome, check_outcome};
    use rand::SeedableRng;
    use rand::rngs::mock::StepRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_legal_moves_empty_board() {
        assert_eq!(legal_moves(&Board::new()), Position::ALL.to_vec());
    }

    #[test]
    fn test_legal_moves_filters_occupied() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));
        let moves = legal_moves(&board);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves.first(), Some(&Position::TopCenter));
        assert!(!moves.contains(&Position::Center));
    }

    #[test]
    fn test_zero_rng_picks_first_legal_move() {
        let board = apply_move(&Board::new(), 0, 0, Player::X).expect("legal move");
        assert_eq!(check_outcome(&board), GameOutcome::Ongoing);
        let mut rng = StepRng::new(0, 0);
        let choice = choose_random_move(&board, &mut rng).expect("moves left");
        assert_eq!(choice, Position::TopCenter);
        let board = apply_move(&board, choice.row(), choice.col(), Player::O).expect("legal move");
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
    }

    #[test]
    fn test_full_board_has_no_random_move() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Player::X));
        }
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(choose_random_move(&board, &mut rng), Err(NoLegalMoveError));
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let before = Board::new();
        let after = apply_move(&before, 2, 1, Player::O).expect("legal move");
        assert_eq!(before, Board::new());
        assert_eq!(after.get(Position::BottomCenter), Square::Occupied(Player::O));
        assert_eq!(after.occupied(), 1);
    }

    #[test]
    fn test_apply_move_check_order() {
        let mut won = Board::new();
        for pos in [Position::MiddleLeft, Position::Center, Position::MiddleRight] {
            won.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(
            apply_move(&won, 5, 5, Player::O),
            Err(MoveError::OutOfBounds { row: 5, col: 5 })
        );
        assert_eq!(
            apply_move(&won, 1, 1, Player::O),
            Err(MoveError::GameAlreadyOver(GameOutcome::Win(Player::X)))
        );
        assert_eq!(
            apply_move(&won, 0, 0, Player::O),
            Err(MoveError::GameAlreadyOver(GameOutcome::Win(Player::X)))
        );
    }
}
