//! Deterministic random number generation for round generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical questions and rounds
//! - **Forkable**: The view controller hands each new game its own stream
//! - **Injectable**: Engines take a `GameRng` instead of reaching for ambient randomness
//!
//! ## Usage
//!
//! ```
//! use alif_arena::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork a stream for a new game
//! let mut game_rng = rng.fork();
//!
//! // Forks are deterministic - same seed and fork counter = same sequence
//! let mut rng2 = GameRng::new(42);
//! let mut game_rng2 = rng2.fork();
//! assert_eq!(game_rng.gen_range_usize(0..100), game_rng2.gen_range_usize(0..100));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing every shuffle and pick in the arena.
///
/// Uses ChaCha8 for speed while keeping sequences reproducible across
/// platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    ///
    /// Hosts use this for real play; tests should always use `new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Sample `amount` distinct elements without replacement.
    ///
    /// Returns fewer than `amount` elements if the slice is shorter.
    /// Order of the result is random.
    pub fn sample<'a, T>(&mut self, slice: &'a [T], amount: usize) -> Vec<&'a T> {
        slice.choose_multiple(&mut self.inner, amount).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();
        assert_eq!(forked1.seed(), forked2.seed());

        // Second fork differs from the first
        assert_ne!(rng1.fork().seed(), forked1.seed());
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_sample_is_distinct() {
        let mut rng = GameRng::new(7);
        let items: Vec<u32> = (0..28).collect();

        for _ in 0..50 {
            let mut picked: Vec<u32> = rng.sample(&items, 3).into_iter().copied().collect();
            assert_eq!(picked.len(), 3);
            picked.sort_unstable();
            picked.dedup();
            assert_eq!(picked.len(), 3);
        }
    }

    #[test]
    fn test_sample_short_slice() {
        let mut rng = GameRng::new(7);
        let items = [1, 2];
        assert_eq!(rng.sample(&items, 3).len(), 2);
    }
}
