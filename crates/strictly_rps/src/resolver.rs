//! Round resolution: draw the computer's move and score the round.

use crate::{Move, MoveSource, Outcome, RandomMoves, RoundRecord};
use chrono::Utc;
use tracing::{debug, instrument};

/// Classifies a round from the player's point of view.
///
/// Rock beats scissors, scissors beats paper, paper beats rock.
/// Identical moves tie.
pub fn classify(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats(computer) {
        Outcome::PlayerWin
    } else {
        Outcome::ComputerWin
    }
}

/// Plays the computer's side of each round.
#[derive(Debug, Clone)]
pub struct RoundResolver<S = RandomMoves> {
    source: S,
}

impl RoundResolver<RandomMoves> {
    /// Creates a resolver with a uniformly random opponent.
    #[instrument]
    pub fn new() -> Self {
        Self::with_source(RandomMoves::new())
    }
}

impl Default for RoundResolver<RandomMoves> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MoveSource> RoundResolver<S> {
    /// Creates a resolver that draws computer moves from `source`.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Resolves one round against the player's move.
    #[instrument(skip(self))]
    pub fn resolve(&mut self, player_move: Move) -> RoundRecord {
        let computer_move = self.source.next_move();
        let outcome = classify(player_move, computer_move);
        debug!(?player_move, ?computer_move, ?outcome, "Round resolved");
        RoundRecord::new(Utc::now(), player_move, computer_move, outcome)
    }
}
