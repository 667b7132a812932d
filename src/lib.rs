//! Tic-tac-toe sessions against a random opponent.
//!
//! The rules live in [`tictactoe_engine`]; this crate is the layer that
//! calls into them.
//!
//! # Architecture
//!
//! - **Session**: in-memory store of games, one human turn plus the
//!   automated reply per call
//! - **Play**: line-oriented terminal front-end over the store
//! - **Respond**: outcome report or automated reply for a supplied board
//! - **Config**: TOML settings with command-line overrides
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tictactoe_service::{Player, SessionStore};
//!
//! # fn example() -> Result<(), tictactoe_service::SessionError> {
//! let store = SessionStore::new();
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//! let game = store.start_game(Player::X, &mut rng)?;
//! let report = store.make_move(game.id(), 1, 1, "X", &mut rng)?;
//! assert!(report.reply().is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod error;
mod play;
mod respond;
mod session;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::PlayConfig;

// Crate-level exports - Errors
pub use error::{ConfigError, ErrorStatus, SessionError};

// Crate-level exports - Terminal play
pub use play::{PlayError, run_game};

// Crate-level exports - Stateless board checks
pub use respond::{BoardReport, Reply, inspect, respond};

// Crate-level exports - Session management
pub use session::{GameSession, GameSnapshot, SessionId, SessionStore, TurnReport};

// Crate-level exports - Game types
pub use tictactoe_engine::{Board, GameOutcome, Move, Player, Position, Square};
