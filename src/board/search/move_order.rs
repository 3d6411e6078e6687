//! Move ordering for search.
//!
//! Candidate moves are shuffled at every node so that equally scored moves
//! are chosen with some variety. The backed-up value does not depend on the
//! order; which of several tied moves wins does.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::super::Move;

/// Reorders the candidate moves of a node before they are searched.
pub trait MoveOrdering {
    fn order(&mut self, moves: &mut [Move]);
}

/// Unbiased Fisher-Yates shuffle driven by an injected random source.
#[derive(Clone, Debug)]
pub struct Shuffled<R = StdRng> {
    rng: R,
}

impl<R: Rng> Shuffled<R> {
    pub fn new(rng: R) -> Self {
        Shuffled { rng }
    }
}

impl Shuffled<StdRng> {
    /// Reproducible ordering for a given seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Shuffled::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Shuffled::new(StdRng::from_entropy())
    }

    /// Seeded if `seed` is given, otherwise from entropy.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> MoveOrdering for Shuffled<R> {
    #[inline]
    fn order(&mut self, moves: &mut [Move]) {
        moves.shuffle(&mut self.rng);
    }
}

/// Keeps moves in generation order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl MoveOrdering for Natural {
    #[inline]
    fn order(&mut self, _moves: &mut [Move]) {}
}
