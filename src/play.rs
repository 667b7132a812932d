//! Line-oriented terminal game.
//!
//! Reads `row col` moves from any [`BufRead`] and writes the board and
//! replies to any [`Write`], so the loop runs the same against stdin or a
//! test buffer.

use crate::error::{ErrorStatus, SessionError};
use crate::session::{GameSnapshot, SessionStore};
use derive_more::{Display, Error, From};
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe_engine::{GameOutcome, Player};
use tracing::{debug, info, instrument};

/// Failure that ends a terminal game.
#[derive(Debug, Display, Error, From)]
pub enum PlayError {
    /// Reading input or writing output failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(std::io::Error),
    /// The session store failed for a reason the player cannot fix.
    #[display("{}", _0)]
    Session(SessionError),
}

/// Plays one game as `human` and returns its final state.
///
/// Illegal moves are reported and the player is asked again. The game ends
/// on a terminal outcome, on `q`, or at end of input; the session is
/// discarded either way.
#[instrument(skip(input, output, store, rng))]
pub fn run_game<I, W, R>(
    input: I,
    output: &mut W,
    store: &SessionStore,
    rng: &mut R,
    human: Player,
) -> Result<GameSnapshot, PlayError>
where
    I: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    let mut snapshot = store.start_game(human, rng)?;
    let id = snapshot.id().clone();
    writeln!(output, "Game {} - you play {}. X moves first.", id, human)?;

    let mut lines = input.lines();
    loop {
        writeln!(output, "\n{}\n", snapshot.board().display())?;
        if snapshot.outcome().is_terminal() {
            break;
        }

        write!(output, "Your move (row col, q to quit): ")?;
        output.flush()?;
        let Some(line) = lines.next() else {
            debug!(session_id = %id, "Input closed");
            break;
        };
        let line = line?;
        let line = line.trim();
        if matches!(line, "q" | "quit") {
            break;
        }

        let Some((row, col)) = parse_coords(line) else {
            writeln!(output, "Enter a row and a column between 0 and 2, e.g. `1 2`.")?;
            continue;
        };

        match store.make_move(&id, row, col, human.token(), rng) {
            Ok(report) => {
                if let Some(reply) = report.reply() {
                    writeln!(output, "Computer plays {}", reply.position())?;
                }
                snapshot = report.snapshot().clone();
            }
            Err(err) if err.status() == ErrorStatus::BadRequest => {
                writeln!(output, "{}", err)?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    let last = store.remove(&id)?;
    writeln!(output, "{}", verdict(*last.outcome(), human))?;
    info!(session_id = %id, outcome = %last.outcome(), "Game finished");
    Ok(last)
}

/// Reads `row col`, `row,col` or `row, col`.
fn parse_coords(line: &str) -> Option<(usize, usize)> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(_) => None,
        None => Some((row, col)),
    }
}

fn verdict(outcome: GameOutcome, human: Player) -> &'static str {
    match outcome {
        GameOutcome::Win(winner) if winner == human => "You win!",
        GameOutcome::Win(_) => "Computer wins.",
        GameOutcome::Draw => "It's a draw.",
        GameOutcome::Ongoing => "Game abandoned.",
    }
}
