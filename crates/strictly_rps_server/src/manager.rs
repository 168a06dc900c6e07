//! Session management for the HTTP service.

use crate::{SessionError, SessionErrorKind, SessionId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use strictly_rps::{GameSession, Move, RoundRecord};
use tracing::{debug, info, instrument, warn};

/// Everything a front end needs to render one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session ID.
    pub session_id: SessionId,
    /// Rounds won by the player.
    pub player_score: u64,
    /// Rounds won by the computer.
    pub computer_score: u64,
    /// Rounds tied.
    pub tie_count: u64,
    /// Rounds played since the last reset.
    pub total_games: usize,
    /// Player win rate as a percentage.
    pub win_rate: f64,
    /// The most recent round.
    pub last_round: Option<RoundRecord>,
    /// Most recent rounds, newest first.
    pub recent_history: Vec<RoundRecord>,
}

impl SessionSnapshot {
    /// Captures the current state of `session`.
    pub fn capture(session_id: &str, session: &GameSession, window: usize) -> Self {
        Self {
            session_id: session_id.to_string(),
            player_score: session.player_score(),
            computer_score: session.computer_score(),
            tie_count: session.tie_count(),
            total_games: session.total_games(),
            win_rate: session.win_rate_percent(),
            last_round: session.last_round().cloned(),
            recent_history: session.recent_history(window),
        }
    }
}

#[derive(Debug, Default)]
struct Sessions {
    games: HashMap<SessionId, GameSession>,
    created: u64,
}

/// Owns every running session.
///
/// Sessions never share state; the lock only guards the map, and each
/// operation on a session runs to completion while it is held.
#[derive(Debug, Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<Sessions>>,
    history_window: usize,
    seed: Option<u64>,
}

impl SessionManager {
    /// Creates a session manager.
    ///
    /// With a `seed`, the n-th session created gets seed `seed + n`.
    #[instrument]
    pub fn new(history_window: usize, seed: Option<u64>) -> Self {
        info!("Creating session manager");
        Self {
            sessions: Arc::new(Mutex::new(Sessions::default())),
            history_window,
            seed,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sessions> {
        // Sessions are consistent between operations, so a poisoned lock is still usable.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> T,
    ) -> Result<T, SessionError> {
        let mut sessions = self.lock();
        match sessions.games.get_mut(id) {
            Some(session) => Ok(f(session)),
            None => {
                debug!(session_id = id, "Session not found");
                Err(SessionError::new(SessionErrorKind::NotFound(id.to_string())))
            }
        }
    }

    /// Starts a new session.
    ///
    /// Ids must be non-empty and free of `/` so they fit in a single
    /// path segment.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId) -> Result<SessionSnapshot, SessionError> {
        if id.is_empty() || id.contains('/') {
            warn!(session_id = %id, "Rejected unaddressable session id");
            return Err(SessionError::new(SessionErrorKind::InvalidId(id)));
        }

        let mut sessions = self.lock();

        if sessions.games.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::new(SessionErrorKind::AlreadyExists(id)));
        }

        let session = match self.seed {
            Some(seed) => GameSession::seeded(seed.wrapping_add(sessions.created)),
            None => GameSession::new(),
        };
        sessions.created += 1;

        let snapshot = SessionSnapshot::capture(&id, &session, self.history_window);
        sessions.games.insert(id.clone(), session);

        info!(session_id = %id, "Created new session");
        Ok(snapshot)
    }

    /// Returns the current state of a session.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Result<SessionSnapshot, SessionError> {
        let window = self.history_window;
        self.with_session(id, |session| SessionSnapshot::capture(id, session, window))
    }

    /// Plays one round in a session.
    #[instrument(skip(self))]
    pub fn play(
        &self,
        id: &str,
        player_move: Move,
    ) -> Result<(RoundRecord, SessionSnapshot), SessionError> {
        let window = self.history_window;
        self.with_session(id, |session| {
            let record = session.play(player_move);
            (record, SessionSnapshot::capture(id, session, window))
        })
    }

    /// Clears a session's scores and history.
    #[instrument(skip(self))]
    pub fn reset(&self, id: &str) -> Result<SessionSnapshot, SessionError> {
        let window = self.history_window;
        self.with_session(id, |session| {
            session.reset();
            SessionSnapshot::capture(id, session, window)
        })
    }

    /// Ends a session, discarding its state.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<(), SessionError> {
        let mut sessions = self.lock();
        match sessions.games.remove(id) {
            Some(_) => {
                info!(session_id = id, "Removed session");
                Ok(())
            }
            None => {
                debug!(session_id = id, "Session not found");
                Err(SessionError::new(SessionErrorKind::NotFound(id.to_string())))
            }
        }
    }

    /// Lists all active session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let sessions = self.lock();
        let mut ids: Vec<_> = sessions.games.keys().cloned().collect();
        ids.sort();
        info!(count = ids.len(), "Listed sessions");
        ids
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(strictly_rps::DEFAULT_HISTORY_WINDOW, None)
    }
}
