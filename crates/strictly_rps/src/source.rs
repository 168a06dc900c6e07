//! Sources of computer moves.

use crate::Move;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Supplies the computer's move for each round.
pub trait MoveSource {
    /// Draws the next computer move.
    fn next_move(&mut self) -> Move;
}

impl<F> MoveSource for F
where
    F: FnMut() -> Move,
{
    fn next_move(&mut self) -> Move {
        self()
    }
}

/// Uniform random opponent.
///
/// Each of the three moves is drawn with probability 1/3, independently
/// of every previous draw.
#[derive(Debug, Clone)]
pub struct RandomMoves {
    rng: StdRng,
}

impl RandomMoves {
    /// Creates a source seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible source.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        debug!(seed, "Seeding computer move source");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoves {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomMoves {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }
}

/// Opponent that always throws the same move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMove(
    /// The move thrown every round.
    pub Move,
);

impl MoveSource for FixedMove {
    fn next_move(&mut self) -> Move {
        self.0
    }
}
