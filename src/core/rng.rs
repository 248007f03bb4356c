//! Deterministic random number generation.
//!
//! A seeded match replays identically: the only randomness in the core is
//! deck shuffling, and it is driven by this ChaCha8-backed RNG. Context
//! streams keep independent randomness domains (e.g. the two players'
//! shuffles) from perturbing each other.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG for match setup.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same
    /// seed, so adding a consumer in one domain never shifts another.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self::new(context_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_range_usize(0..i + 1);
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        for _ in 0..16 {
            assert_eq!(a.gen_range_usize(0..1000), b.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);

        let seq_a: Vec<_> = (0..8).map(|_| a.gen_range_usize(0..1_000_000)).collect();
        let seq_b: Vec<_> = (0..8).map(|_| b.gen_range_usize(0..1_000_000)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn test_context_streams_independent() {
        let rng = GameRng::new(42);
        let mut deck1 = rng.for_context("deck-first");
        let mut deck2 = rng.for_context("deck-second");
        let mut deck1_again = rng.for_context("deck-first");

        let a = deck1.gen_range_usize(0..1_000_000);
        assert_eq!(a, deck1_again.gen_range_usize(0..1_000_000));
        // Streams for different contexts come from different seeds.
        assert_ne!(deck1.seed(), deck2.seed());
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);

        let mut items_a: Vec<u32> = (0..20).collect();
        let mut items_b: Vec<u32> = (0..20).collect();
        a.shuffle(&mut items_a);
        b.shuffle(&mut items_b);

        assert_eq!(items_a, items_b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(3);
        let mut items: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
