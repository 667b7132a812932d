//! Stateless board inspection and replies.
//!
//! Both entry points take a board supplied by the caller instead of a
//! stored session, so they work on any JSON grid.

use crate::error::SessionError;
use derive_getters::Getters;
use rand::Rng;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tictactoe_engine::{
    Board, GameNotOver, GameOutcome, Move, Position, apply_move, check_outcome, choose_random_move,
    legal_moves, parse_board, validate_player,
};
use tracing::{debug, info, instrument};

/// Outcome and legal moves of a caller-supplied board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct BoardReport {
    /// The parsed board.
    board: Board,
    /// Outcome of the board.
    outcome: GameOutcome,
    /// Empty squares, empty once the game is over.
    legal_moves: Vec<Position>,
}

impl fmt::Display for BoardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\nOutcome: {}", self.board.display(), self.outcome)?;
        if !self.legal_moves.is_empty() {
            let moves: Vec<String> = self
                .legal_moves
                .iter()
                .map(|pos| format!("({}, {})", pos.row(), pos.col()))
                .collect();
            write!(f, "\nLegal moves: {}", moves.join(" "))?;
        }
        Ok(())
    }
}

/// Board after the automated side answered a caller-supplied board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Reply {
    /// Board with the reply placed.
    board: Board,
    /// The move that was played.
    reply: Move,
    /// Outcome after the reply.
    outcome: GameOutcome,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n\n{}\nOutcome: {}",
            self.board.display(),
            self.reply,
            self.outcome
        )
    }
}

/// Validates `grid` and reports its outcome and legal moves.
#[instrument(skip(grid))]
pub fn inspect(grid: &Value) -> Result<BoardReport, SessionError> {
    let board = parse_board(grid)?;
    let outcome = check_outcome(&board);
    let legal_moves = if outcome.is_terminal() {
        Vec::new()
    } else {
        legal_moves(&board)
    };
    debug!(%outcome, legal = legal_moves.len(), "Inspected board");
    Ok(BoardReport {
        board,
        outcome,
        legal_moves,
    })
}

/// Places a random move for `player` on a caller-supplied board.
///
/// The board is validated first, then the player token, then the board
/// must still be undecided.
#[instrument(skip(grid, rng))]
pub fn respond<R>(grid: &Value, player: &str, rng: &mut R) -> Result<Reply, SessionError>
where
    R: Rng + ?Sized,
{
    let board = parse_board(grid)?;
    let player = validate_player(player)?;
    GameNotOver::check(&board)?;

    let position = choose_random_move(&board, rng)?;
    let board = apply_move(&board, position.row(), position.col(), player)?;
    let reply = Move::new(player, position);
    let outcome = check_outcome(&board);
    info!(%reply, %outcome, "Replied to supplied board");
    Ok(Reply {
        board,
        reply,
        outcome,
    })
}
