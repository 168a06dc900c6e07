//! Session-scoped score and history.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::{Move, MoveSource, Outcome, RandomMoves, RoundRecord, RoundResolver};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Number of rounds shown in the recent-history view.
pub const DEFAULT_HISTORY_WINDOW: usize = 5;

/// Score and history of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub(crate) player_score: u64,
    pub(crate) computer_score: u64,
    pub(crate) tie_count: u64,
    /// Rounds in play order.
    pub(crate) history: Vec<RoundRecord>,
    pub(crate) last_round: Option<RoundRecord>,
}

impl SessionState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by the player.
    pub fn player_score(&self) -> u64 {
        self.player_score
    }

    /// Rounds won by the computer.
    pub fn computer_score(&self) -> u64 {
        self.computer_score
    }

    /// Rounds tied.
    pub fn tie_count(&self) -> u64 {
        self.tie_count
    }

    /// All rounds, oldest first.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// The most recent round, if any.
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.last_round.as_ref()
    }

    fn record(&mut self, record: RoundRecord) {
        match record.outcome() {
            Outcome::PlayerWin => self.player_score += 1,
            Outcome::ComputerWin => self.computer_score += 1,
            Outcome::Tie => self.tie_count += 1,
        }
        self.history.push(record.clone());
        self.last_round = Some(record);
    }
}

/// A single player's game against the computer.
///
/// The session owns its state outright; callers re-read the accessors
/// after each `play` or `reset` to render.
#[derive(Debug, Clone)]
pub struct GameSession<S = RandomMoves> {
    state: SessionState,
    resolver: RoundResolver<S>,
}

impl GameSession<RandomMoves> {
    /// Creates a session against a uniformly random opponent.
    #[instrument]
    pub fn new() -> Self {
        Self::with_source(RandomMoves::new())
    }

    /// Creates a session against a reproducible random opponent.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RandomMoves::seeded(seed))
    }
}

impl Default for GameSession<RandomMoves> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSource> GameSession<S> {
    /// Creates a session whose computer moves come from `source`.
    pub fn with_source(source: S) -> Self {
        Self {
            state: SessionState::new(),
            resolver: RoundResolver::with_source(source),
        }
    }

    /// Plays one round and records it.
    #[instrument(skip(self))]
    pub fn play(&mut self, player_move: Move) -> RoundRecord {
        let record = self.resolver.resolve(player_move);
        self.state.record(record.clone());
        debug_assert!(SessionInvariants::check_all(&self.state).is_ok());

        info!(
            outcome = ?record.outcome(),
            player_score = self.state.player_score,
            computer_score = self.state.computer_score,
            ties = self.state.tie_count,
            "Round played"
        );
        record
    }

    /// Clears all scores and history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = SessionState::new();
        debug_assert!(SessionInvariants::check_all(&self.state).is_ok());
        info!("Session reset");
    }

    /// Fraction of rounds won by the player, in `0.0..=1.0`.
    ///
    /// Ties and losses both count as played rounds. Returns `0.0` before
    /// any round has been played.
    pub fn win_rate(&self) -> f64 {
        match self.total_games() {
            0 => 0.0,
            total => self.state.player_score as f64 / total as f64,
        }
    }

    /// [`win_rate`](Self::win_rate) scaled to a percentage.
    pub fn win_rate_percent(&self) -> f64 {
        self.win_rate() * 100.0
    }

    /// The last `n` rounds, most recent first.
    #[instrument(skip(self))]
    pub fn recent_history(&self, n: usize) -> Vec<RoundRecord> {
        let recent: Vec<_> = self.state.history.iter().rev().take(n).cloned().collect();
        debug!(requested = n, returned = recent.len(), "Collected recent history");
        recent
    }

    /// Rounds won by the player.
    pub fn player_score(&self) -> u64 {
        self.state.player_score
    }

    /// Rounds won by the computer.
    pub fn computer_score(&self) -> u64 {
        self.state.computer_score
    }

    /// Rounds tied.
    pub fn tie_count(&self) -> u64 {
        self.state.tie_count
    }

    /// Number of rounds played since the last reset.
    pub fn total_games(&self) -> usize {
        self.state.history.len()
    }

    /// All rounds since the last reset, oldest first.
    pub fn history(&self) -> &[RoundRecord] {
        self.state.history()
    }

    /// The most recent round, if any.
    pub fn last_round(&self) -> Option<&RoundRecord> {
        self.state.last_round()
    }

    /// The full session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
