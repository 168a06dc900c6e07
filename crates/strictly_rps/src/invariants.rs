//! First-class invariants for session state.
//!
//! Invariants are logical properties that must hold between any two
//! session operations. They are testable on their own and are checked
//! after every `play` and `reset` in debug builds.

use crate::{Outcome, SessionState};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the three counters add up to the number of rounds played.
pub struct ScoresMatchHistory;

impl Invariant<SessionState> for ScoresMatchHistory {
    fn holds(state: &SessionState) -> bool {
        let counted =
            state.player_score() as usize + state.computer_score() as usize + state.tie_count() as usize;
        counted == state.history().len()
    }

    fn description() -> &'static str {
        "Player score, computer score and ties sum to history length"
    }
}

/// Invariant: each counter equals the number of rounds with that outcome.
pub struct CountersMatchOutcomes;

impl Invariant<SessionState> for CountersMatchOutcomes {
    fn holds(state: &SessionState) -> bool {
        let count = |outcome: Outcome| {
            state
                .history()
                .iter()
                .filter(|r| *r.outcome() == outcome)
                .count()
        };
        count(Outcome::PlayerWin) == state.player_score() as usize
            && count(Outcome::ComputerWin) == state.computer_score() as usize
            && count(Outcome::Tie) == state.tie_count() as usize
    }

    fn description() -> &'static str {
        "Each counter equals the number of rounds with its outcome"
    }
}

/// Invariant: the last round is the newest history entry, absent when empty.
pub struct LastRoundIsNewest;

impl Invariant<SessionState> for LastRoundIsNewest {
    fn holds(state: &SessionState) -> bool {
        state.last_round() == state.history().last()
    }

    fn description() -> &'static str {
        "Last round is the newest history entry"
    }
}

/// All session invariants.
pub type SessionInvariants = (ScoresMatchHistory, CountersMatchOutcomes, LastRoundIsNewest);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedMove, GameSession, Move};

    #[test]
    fn test_fresh_state_holds() {
        let state = SessionState::new();
        assert!(SessionInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_played_state_holds() {
        let mut session = GameSession::with_source(FixedMove(Move::Rock));
        for m in Move::ALL {
            session.play(m);
        }
        assert!(SessionInvariants::check_all(session.state()).is_ok());
    }

    #[test]
    fn test_corrupted_counter_violates() {
        let mut session = GameSession::with_source(FixedMove(Move::Rock));
        session.play(Move::Paper);
        let mut state = session.state().clone();
        state.player_score += 1;

        let violations = SessionInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(!ScoresMatchHistory::holds(&state));
        assert!(!CountersMatchOutcomes::holds(&state));
        assert!(LastRoundIsNewest::holds(&state));
    }

    #[test]
    fn test_stale_last_round_violates() {
        let mut session = GameSession::with_source(FixedMove(Move::Rock));
        session.play(Move::Paper);
        let mut state = session.state().clone();
        state.last_round = None;
        assert!(!LastRoundIsNewest::holds(&state));
    }
}
