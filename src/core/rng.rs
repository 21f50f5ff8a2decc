//! Deterministic random number generation for deck shuffling.
//!
//! The shuffle is the only source of randomness in the game, and it is
//! seeded: the same seed lays out the same board, which is what makes
//! seeded games replayable and board-layout tests exact. Callers who want
//! a fresh board every run seed from wall-clock entropy instead.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG behind the deck shuffle.
///
/// Backed by ChaCha8, so swap indices are uniform and the Fisher-Yates
/// pass stays unbiased; reseeding on every game start is cheap.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. A restart
    /// forks the round's RNG so the reshuffle is reproducible without
    /// repeating the original permutation.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
