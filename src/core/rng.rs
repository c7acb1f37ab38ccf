//! Deterministic random number generation for move selection.
//!
//! When several moves are equally optimal, the engines pick one at random
//! rather than always playing the same line. The randomness source is an
//! explicit dependency of each engine (never an ambient global), so tests
//! substitute a fixed seed and replay exact games.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG for tie-breaking among equally optimal moves.
///
/// Uses ChaCha8 for speed while keeping a deterministic, portable stream:
/// the same seed produces the same move sequence on every platform.
#[derive(Clone, Debug)]
pub struct MoveRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MoveRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the OS entropy source.
    ///
    /// The drawn seed stays observable via [`MoveRng::seed`] so a surprising
    /// game can still be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random index in the given range.
    pub fn gen_index(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
