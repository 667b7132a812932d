//! tictactoe_service binary entry point.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tictactoe_engine::Player;
use tictactoe_service::{Cli, Command, PlayConfig, SessionStore, inspect, respond, run_game};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { mark, seed, config } => run_play(mark, seed, config),
        Command::Check {
            board,
            reply,
            mark,
            seed,
        } => run_check(&board, reply.then_some((mark.as_str(), seed))),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Play a game on stdin/stdout.
fn run_play(mark: Option<Player>, seed: Option<u64>, config: Option<PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    }
    .with_overrides(mark, seed);

    init_tracing(config.log_filter());
    info!(human_mark = %config.human_mark(), seed = ?config.seed(), "Starting terminal game");

    let mut rng = match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let store = SessionStore::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_game(stdin.lock(), &mut stdout, &store, &mut rng, *config.human_mark())?;
    Ok(())
}

/// Validate a JSON board and print its outcome, or the automated reply.
fn run_check(board: &str, reply: Option<(&str, Option<u64>)>) -> Result<()> {
    init_tracing("warn");

    let grid: serde_json::Value = serde_json::from_str(board).context("Board is not valid JSON")?;
    match reply {
        Some((mark, seed)) => {
            let mut rng = match seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            println!("{}", respond(&grid, mark, &mut rng)?);
        }
        None => println!("{}", inspect(&grid)?),
    }
    Ok(())
}
