//! Candidate word lists
//!
//! The round's secret word is drawn uniformly from a candidate list: either
//! the embedded default or a file supplied on the command line.

mod embedded;
pub mod loader;

use crate::core::SecretWord;
use rand::Rng;
use rand::prelude::IndexedRandom;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};

/// Draw one word uniformly at random from the candidate list
///
/// Returns `None` on an empty list; callers treat that as a configuration
/// fault at startup, not a runtime condition.
pub fn draw<'a>(words: &'a [SecretWord], rng: &mut impl Rng) -> Option<&'a SecretWord> {
    words.choose(rng)
}
