//! Word list loading utilities
//!
//! Sources are whitespace-delimited text blobs. Entries that are not valid
//! five-letter words are skipped rather than rejected wholesale.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a whitespace-delimited file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use lingo::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .split_whitespace()
        .filter_map(|token| Word::new(token).ok())
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use lingo::wordlists::loader::words_from_slice;
/// use lingo::wordlists::WORD_POOL;
///
/// let words = words_from_slice(WORD_POOL);
/// assert_eq!(words.len(), WORD_POOL.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
