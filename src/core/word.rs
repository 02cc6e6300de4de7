//! Secret word representation
//!
//! A `SecretWord` stores the word for the current round along with its set of
//! distinct characters, which drives both the win condition and the reveal
//! fraction.

use rustc_hash::FxHashSet;
use std::fmt;

/// The secret word for one round
///
/// Characters are atomic guessable units: lowercase letters (including
/// accented ones) and spaces. The distinct-character set is precomputed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<char>,
    distinct: FxHashSet<char>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Secret word must not be empty"),
            Self::InvalidCharacter(c) => {
                write!(f, "Secret word contains invalid character {c:?}")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new `SecretWord` from a string
    ///
    /// Input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - It contains anything other than lowercase letters and spaces
    ///
    /// # Examples
    /// ```
    /// use forca::core::SecretWord;
    ///
    /// let word = SecretWord::new("gato").unwrap();
    /// assert_eq!(word.text(), "gato");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("g4to").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        for c in text.chars() {
            let valid = c == ' ' || (c.is_alphabetic() && c.is_lowercase());
            if !valid {
                return Err(WordError::InvalidCharacter(c));
            }
        }

        let letters: Vec<char> = text.chars().collect();
        let distinct: FxHashSet<char> = letters.iter().copied().collect();

        Ok(Self {
            text,
            letters,
            distinct,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character sequence
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the word has no characters (never true after validation)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific character
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.distinct.contains(&letter)
    }

    /// The set of distinct characters composing the word
    ///
    /// Used as the denominator for the reveal fraction and as the target set
    /// for the win condition.
    #[inline]
    #[must_use]
    pub fn distinct_letters(&self) -> &FxHashSet<char> {
        &self.distinct
    }

    /// Number of distinct characters in the word
    #[inline]
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.distinct.len()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = SecretWord::new("gato").unwrap();
        assert_eq!(word.text(), "gato");
        assert_eq!(word.letters(), &['g', 'a', 't', 'o']);
        assert_eq!(word.len(), 4);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = SecretWord::new("GaTo").unwrap();
        assert_eq!(word.text(), "gato");
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(SecretWord::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            SecretWord::new("g4to"),
            Err(WordError::InvalidCharacter('4'))
        ));
        assert!(SecretWord::new("gato!").is_err());
        assert!(SecretWord::new("ga_to").is_err());
    }

    #[test]
    fn word_allows_spaces_and_accents() {
        let word = SecretWord::new("ovo de páscoa").unwrap();
        assert!(word.contains(' '));
        assert!(word.contains('á'));
        assert!(word.contains('o'));
    }

    #[test]
    fn word_contains() {
        let word = SecretWord::new("gato").unwrap();
        assert!(word.contains('g'));
        assert!(word.contains('o'));
        assert!(!word.contains('z'));
    }

    #[test]
    fn word_distinct_letters() {
        let word = SecretWord::new("arara").unwrap();
        assert_eq!(word.distinct_count(), 2);
        assert!(word.distinct_letters().contains(&'a'));
        assert!(word.distinct_letters().contains(&'r'));
    }

    #[test]
    fn word_distinct_counts_spaces() {
        // Spaces and accents are atomic guessable units like any other
        let word = SecretWord::new("ovo de páscoa").unwrap();
        // o v ' ' d e p á s c a
        assert_eq!(word.distinct_count(), 10);
    }

    #[test]
    fn word_display() {
        let word = SecretWord::new("gato").unwrap();
        assert_eq!(format!("{word}"), "gato");
    }
}
