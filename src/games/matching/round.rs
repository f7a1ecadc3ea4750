//! Round generation for Glyph Galaxy.

use serde::Serialize;

use crate::alphabet::{AlphabetTable, SimilarityGroup};
use crate::core::GameRng;

/// How many times the chosen group is repeated in the pool.
const GROUP_REPEATS: usize = 3;

/// Target glyph and the shuffled option pool for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchingRound {
    pub target: &'static str,
    pub pool: Vec<&'static str>,
}

impl MatchingRound {
    /// Draw a round.
    ///
    /// The pool is the group repeated three times, padded with random table
    /// glyphs up to `pool_size`, then shuffled. A group that already fills
    /// the pool is cut down to `pool_size` with the target kept.
    pub fn generate(
        groups: &[SimilarityGroup],
        table: &AlphabetTable,
        pool_size: usize,
        rng: &mut GameRng,
    ) -> Self {
        assert!(pool_size > 0, "Pool size must be at least 1");

        let group = rng.choose(groups).expect("Need at least 1 similarity group");
        let target = *rng.choose(group.glyphs()).expect("Similarity groups are never empty");

        let mut pool: Vec<&'static str> = Vec::with_capacity(pool_size.max(group.len() * GROUP_REPEATS));
        for _ in 0..GROUP_REPEATS {
            pool.extend_from_slice(group.glyphs());
        }

        let letters = table.letters();
        while pool.len() < pool_size {
            pool.push(letters[rng.gen_range_usize(0..letters.len())].glyph);
        }

        if pool.len() > pool_size {
            pool.truncate(pool_size);
            if !pool.contains(&target) {
                pool[0] = target;
            }
        }

        rng.shuffle(&mut pool);
        Self { target, pool }
    }

    #[must_use]
    pub fn is_target(&self, glyph: &str) -> bool {
        self.target == glyph
    }

    /// How many pool entries show the target.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.pool.iter().filter(|g| **g == self.target).count()
    }
}
