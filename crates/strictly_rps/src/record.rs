//! Immutable record of one played round.

use crate::{Move, Outcome};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One round as it was played.
///
/// Records are appended to a session's history and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct RoundRecord {
    /// When the round was resolved.
    timestamp: DateTime<Utc>,
    /// What the player threw.
    player_move: Move,
    /// What the computer threw.
    computer_move: Move,
    /// Result from the player's point of view.
    outcome: Outcome,
}

impl RoundRecord {
    /// Human-readable result sentence for this round.
    pub fn message(&self) -> String {
        match self.outcome {
            Outcome::Tie => format!("It's a tie! Both chose {}", self.player_move.emoji()),
            Outcome::PlayerWin => format!(
                "You win! {} beats {}",
                self.player_move.emoji(),
                self.computer_move.emoji()
            ),
            Outcome::ComputerWin => format!(
                "Computer wins! {} beats {}",
                self.computer_move.emoji(),
                self.player_move.emoji()
            ),
        }
    }

    /// One-line summary, e.g. `🟢 Rock vs Scissors - Player`.
    pub fn summary(&self) -> String {
        format!(
            "{} {} vs {} - {}",
            self.outcome.marker(),
            self.player_move,
            self.computer_move,
            self.outcome.label()
        )
    }
}
