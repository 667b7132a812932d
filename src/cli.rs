//! Command-line interface for tictactoe_service.

use clap::{Parser, Subcommand};
use tictactoe_engine::Player;

/// Tic-tac-toe against a random opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_service")]
#[command(about = "Tic-tac-toe sessions against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Mark you play (X or O). X moves first.
        #[arg(short, long)]
        mark: Option<Player>,

        /// Seed for the random opponent
        #[arg(short, long)]
        seed: Option<u64>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Validate a JSON board and print its outcome, or answer it
    Check {
        /// Board as JSON, e.g. '[["X","",""],["","O",""],["","",""]]'
        #[arg(long)]
        board: String,

        /// Place a random move on the board instead of listing moves
        #[arg(long)]
        reply: bool,

        /// Mark that replies
        #[arg(short, long, default_value = "O", requires = "reply")]
        mark: String,

        /// Seed for the reply
        #[arg(short, long, requires = "reply")]
        seed: Option<u64>,
    },
}
