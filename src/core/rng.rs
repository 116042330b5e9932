//! Deterministic random number generation.
//!
//! The engine's only random decision is the strategist's fallback move,
//! and it always draws from a `MatchRng` owned by the match machine.
//! Same seed, same move sequence - tests pin a seed and assert exact
//! fallback selections.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG, seeded once per match session.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
///
/// ```
/// use ttt_engine::MatchRng;
///
/// let mut a = MatchRng::new(42);
/// let mut b = MatchRng::new(42);
/// assert_eq!(a.gen_range_usize(0..9), b.gen_range_usize(0..9));
/// ```
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
