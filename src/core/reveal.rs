//! Reveal mapping
//!
//! Converts guess progress into a randomized-but-stable sequence of grid
//! blocks to uncover. The permutation is drawn once per round; which prefix
//! of it is revealed is a pure function of guess progress.

use rand::Rng;

/// Produce a uniformly random permutation of the input
///
/// Durstenfeld variant of Fisher–Yates, operating on a copy. The input is
/// never mutated.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut copy = items.to_vec();
    for i in (1..copy.len()).rev() {
        let j = rng.random_range(0..=i);
        copy.swap(i, j);
    }
    copy
}

/// Number of blocks revealed for a given guess progress
///
/// `floor(correct / total * blocks)`, so partial progress never rounds up to
/// a full reveal. A word with no distinct letters reveals nothing; this is
/// unreachable in practice since secret words are non-empty.
#[must_use]
pub fn reveal_count(correct_unique: usize, total_unique: usize, total_blocks: usize) -> usize {
    if total_unique == 0 {
        return 0;
    }
    let fraction = correct_unique as f64 / total_unique as f64;
    (fraction * total_blocks as f64).floor() as usize
}

/// The per-round reveal order over grid blocks
///
/// A fixed permutation of `0..total_blocks`, built when the round starts and
/// stable until reset. Blocks at permutation positions below the current
/// reveal count are transparent; the rest stay opaque. Indexing into the
/// permutation (rather than the grid) is what scatters the reveal instead of
/// sweeping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOrder {
    order: Vec<usize>,
}

impl RevealOrder {
    /// Shuffle a fresh permutation of `0..total_blocks`
    pub fn new(total_blocks: usize, rng: &mut impl Rng) -> Self {
        let indices: Vec<usize> = (0..total_blocks).collect();
        Self {
            order: shuffle(&indices, rng),
        }
    }

    /// Total number of blocks in the grid
    #[inline]
    #[must_use]
    pub fn total_blocks(&self) -> usize {
        self.order.len()
    }

    /// The permutation itself, first-revealed block first
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Per-block reveal flags, indexed by grid block index
    ///
    /// Exactly `reveal_count` entries are true (all of them if the count
    /// exceeds the block total).
    #[must_use]
    pub fn mask(&self, reveal_count: usize) -> Vec<bool> {
        let mut mask = vec![false; self.order.len()];
        for &block in self.order.iter().take(reveal_count) {
            mask[block] = true;
        }
        mask
    }
}
