//! Rock-paper-scissors against a random opponent.
//!
//! # Architecture
//!
//! - **RoundResolver**: draws the computer's move from a [`MoveSource`] and
//!   classifies the round
//! - **GameSession**: owns one player's score and history, and is the only
//!   thing a front end talks to
//!
//! # Example
//!
//! ```
//! use strictly_rps::{FixedMove, GameSession, Move, Outcome};
//!
//! let mut session = GameSession::with_source(FixedMove(Move::Scissors));
//! let round = session.play(Move::Rock);
//! assert_eq!(*round.outcome(), Outcome::PlayerWin);
//! assert_eq!(session.player_score(), 1);
//! assert_eq!(session.win_rate(), 1.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod invariants;
mod record;
mod resolver;
mod session;
mod source;
mod types;

pub use invariants::{
    CountersMatchOutcomes, Invariant, InvariantSet, InvariantViolation, LastRoundIsNewest,
    ScoresMatchHistory, SessionInvariants,
};
pub use record::RoundRecord;
pub use resolver::{RoundResolver, classify};
pub use session::{DEFAULT_HISTORY_WINDOW, GameSession, SessionState};
pub use source::{FixedMove, MoveSource, RandomMoves};
pub use types::{Move, Outcome};

/// How to play, as shown by front ends.
pub const RULES: &str = "\
Rock Paper Scissors is a simple hand game usually played between two people.

Rules:
  🪨 Rock crushes ✂️ Scissors
  📄 Paper covers 🪨 Rock
  ✂️ Scissors cuts 📄 Paper

How to play:
  1. Pick your move (rock, paper or scissors)
  2. The computer makes its choice
  3. See who wins and track your score!";
