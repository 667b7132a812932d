//! Pure tic-tac-toe rule engine.
//!
//! Stateless functions over a 3x3 [`Board`] value:
//!
//! - **Validation**: [`validate_board`], [`validate_player`], [`validate_move`]
//! - **Rules**: [`check_outcome`] with a fixed line scan order
//! - **Moves**: [`legal_moves`], [`choose_random_move`], [`apply_move`]
//!
//! The engine holds no state between calls. Randomness is always injected,
//! so a seeded source makes every automated move reproducible.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tictactoe_engine::{Board, GameOutcome, Player, apply_move, check_outcome, choose_random_move};
//!
//! let board = apply_move(&Board::new(), 0, 0, Player::X)?;
//! assert_eq!(check_outcome(&board), GameOutcome::Ongoing);
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let reply = choose_random_move(&board, &mut rng)?;
//! let board = apply_move(&board, reply.row(), reply.col(), Player::O)?;
//! assert_eq!(board.occupied(), 2);
//! # Ok::<(), tictactoe_engine::EngineError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod moves;
mod position;
pub mod rules;
mod types;
mod validate;

pub use action::Move;
pub use contracts::{
    Contract, GameNotOver, InBounds, LegalMove, MonotonicBoard, MoveContract, SquareIsEmpty,
};
pub use error::{EngineError, MoveError, NoLegalMoveError, ValidationError};
pub use moves::{apply_move, choose_random_move, legal_moves};
pub use position::Position;
pub use rules::check_outcome;
pub use types::{Board, GameOutcome, Player, Square};
pub use validate::{parse_board, validate_board, validate_move, validate_player};
