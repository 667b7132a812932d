//! In-memory game sessions against a random opponent.
//!
//! The store maps an opaque session id to a board and the mark the human
//! plays. The automated side always holds the other mark and answers each
//! human move immediately, so a live session is always waiting on the
//! human.

use crate::error::SessionError;
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tictactoe_engine::{
    Board, GameOutcome, InBounds, Move, Player, apply_move, check_outcome, choose_random_move,
    validate_player,
};
use tracing::{debug, error, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// A single game between a human and the random opponent.
#[derive(Debug, Clone, Getters, new)]
pub struct GameSession {
    /// Session ID.
    id: SessionId,
    /// Which mark the human plays.
    human: Player,
    /// The board.
    #[new(default)]
    board: Board,
}

impl GameSession {
    /// Mark played by the random opponent.
    pub fn automated(&self) -> Player {
        self.human.opponent()
    }

    /// Outcome of the current board.
    pub fn outcome(&self) -> GameOutcome {
        check_outcome(&self.board)
    }

    /// Read-only copy for callers outside the store.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self.id.clone(), self.board, self.human, self.outcome())
    }

    /// Lets the automated side move, if the game is still on.
    fn automated_reply<R>(&self, board: &Board, rng: &mut R) -> Result<Option<(Board, Move)>, SessionError>
    where
        R: Rng + ?Sized,
    {
        if check_outcome(board).is_terminal() {
            return Ok(None);
        }
        let mark = self.automated();
        let position = choose_random_move(board, rng)?;
        let next = apply_move(board, position.row(), position.col(), mark)?;
        Ok(Some((next, Move::new(mark, position))))
    }
}

/// State of a session at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
pub struct GameSnapshot {
    /// Session ID.
    id: SessionId,
    /// The board.
    board: Board,
    /// Which mark the human plays.
    human: Player,
    /// Outcome of the board.
    outcome: GameOutcome,
}

/// Result of one human turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct TurnReport {
    /// Session state after the turn.
    snapshot: GameSnapshot,
    /// The human's move.
    human_move: Move,
    /// The automated reply, absent when the human's move ended the game.
    reply: Option<Move>,
}

#[derive(Debug, Default)]
struct StoreInner {
    sessions: HashMap<SessionId, GameSession>,
    next_id: u64,
}

/// Manages all game sessions.
///
/// Cloning is cheap and every clone shares the same sessions. Each
/// operation holds the lock for its whole duration, so concurrent turns on
/// one session are applied one after the other.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl SessionStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session store");
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, SessionError> {
        self.inner.lock().map_err(|_| {
            error!("Session store lock poisoned");
            SessionError::Poisoned
        })
    }

    /// Starts a game on an empty board with the next sequential id.
    ///
    /// X always opens, so when the human plays O the random opponent has
    /// already made its first move in the returned snapshot.
    #[instrument(skip(self, rng))]
    pub fn start_game<R>(&self, human: Player, rng: &mut R) -> Result<GameSnapshot, SessionError>
    where
        R: Rng + ?Sized,
    {
        let mut inner = self.lock()?;
        inner.next_id += 1;
        let id = inner.next_id.to_string();

        let mut session = GameSession::new(id.clone(), human);
        if human == Player::O {
            let board = *session.board();
            if let Some((next, opening)) = session.automated_reply(&board, rng)? {
                debug!(session_id = %id, %opening, "Random opponent opened");
                session.board = next;
            }
        }

        let snapshot = session.snapshot();
        inner.sessions.insert(id.clone(), session);
        info!(session_id = %id, %human, "Started game");
        Ok(snapshot)
    }

    /// Gets the current state of a session.
    #[instrument(skip(self))]
    pub fn status(&self, id: &str) -> Result<GameSnapshot, SessionError> {
        let inner = self.lock()?;
        inner.sessions.get(id).map(GameSession::snapshot).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::NotFound(id.to_string())
        })
    }

    /// Plays one human turn and the automated reply.
    ///
    /// `player` is the raw token from the request. An unknown id is reported
    /// before anything about the move itself. The stored board only changes
    /// when the whole turn succeeds.
    #[instrument(skip(self, rng))]
    pub fn make_move<R>(
        &self,
        id: &str,
        row: usize,
        col: usize,
        player: &str,
        rng: &mut R,
    ) -> Result<TurnReport, SessionError>
    where
        R: Rng + ?Sized,
    {
        let mut inner = self.lock()?;
        let session = inner.sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::NotFound(id.to_string())
        })?;

        let player = validate_player(player)?;
        let position = InBounds::check(row, col)?;

        if player != session.human {
            warn!(session_id = id, expected = %session.human, got = %player, "Player moved out of turn");
            return Err(SessionError::NotYourTurn {
                expected: session.human,
                got: player,
            });
        }

        let after_human = apply_move(&session.board, row, col, player)?;
        let human_move = Move::new(player, position);

        let (board, reply) = match session.automated_reply(&after_human, rng)? {
            Some((board, reply)) => (board, Some(reply)),
            None => (after_human, None),
        };
        session.board = board;

        let snapshot = session.snapshot();
        info!(
            session_id = id,
            %human_move,
            reply = ?reply,
            outcome = %snapshot.outcome,
            "Turn completed"
        );
        Ok(TurnReport {
            snapshot,
            human_move,
            reply,
        })
    }

    /// Drops a session, returning its final state.
    #[instrument(skip(self))]
    pub fn remove(&self, id: &str) -> Result<GameSnapshot, SessionError> {
        let mut inner = self.lock()?;
        let session = inner
            .sessions
            .remove(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        info!(session_id = id, "Removed session");
        Ok(session.snapshot())
    }

    /// Lists all session ids in creation order.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<SessionId>, SessionError> {
        let inner = self.lock()?;
        let mut ids: Vec<_> = inner.sessions.keys().cloned().collect();
        ids.sort_by_key(|id| id.parse::<u64>().unwrap_or(u64::MAX));
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }
}
