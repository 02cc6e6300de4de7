//! Word list loading utilities
//!
//! Provides functions to load candidate words from files or from the
//! embedded default list.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;

/// Load candidate words from a file, one per line
///
/// Blank lines and entries that fail word validation are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use forca::wordlists::loader::load_from_file;
///
/// let words = load_from_file("palavras.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                SecretWord::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a string slice to validated words
///
/// # Examples
/// ```
/// use forca::wordlists::loader::words_from_slice;
/// use forca::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice.iter().filter_map(|&s| SecretWord::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["gato", "peixe", "arara"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "gato");
        assert_eq!(words[1].text(), "peixe");
        assert_eq!(words[2].text(), "arara");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["gato", "g4to", "", "peixe"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "gato");
        assert_eq!(words[1].text(), "peixe");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        let words = words_from_slice(input);
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn embedded_default_parses() {
        use crate::wordlists::DEFAULT_WORDS;

        let words = words_from_slice(DEFAULT_WORDS);
        assert_eq!(words.len(), DEFAULT_WORDS.len());
    }
}
