//! Word data sources
//!
//! Two read-only collections populated once at startup: the validity
//! dictionary (membership testing of submitted guesses) and the target word
//! pool (uniform random draw per game). Embedded lists are compiled in by
//! the build script; custom lists can be loaded from files.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, WORD_POOL, WORD_POOL_COUNT};

use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Immutable set of valid guess words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from loaded words
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            words: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }

    /// Build the dictionary from the embedded list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(&loader::words_from_slice(DICTIONARY))
    }

    /// Membership test for a submitted guess
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Immutable ordered collection of candidate target words
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Build a pool from loaded words
    ///
    /// Entry length is already guaranteed by `Word`; an empty pool is a
    /// caller error surfaced at startup, not here.
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Build the pool from the embedded list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORD_POOL))
    }

    /// Draw a target word uniformly at random
    ///
    /// # Panics
    /// Panics if the pool is empty.
    #[must_use]
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Word {
        let index = rng.random_range(0..self.words.len());
        self.words[index].clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
