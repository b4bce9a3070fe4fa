//! Alphametic word representation
//!
//! A Word stores an uppercase letter sequence along with a bit mask of the letters it uses.

use std::fmt;
use thiserror::Error;

/// Longest word the solver accepts
pub const MAX_LEN: usize = 16;

/// A validated puzzle word: 1 to `MAX_LEN` uppercase ASCII letters
///
/// The letter mask has bit `n` set when the word contains the `n`th letter of the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letter_mask: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Words must contain at least one letter")]
    Empty,
    #[error("Words can't be longer than {MAX_LEN} characters. {word} is too long.")]
    TooLong { word: String, len: usize },
    #[error("Words must contain only letters. Problem with: {word}")]
    InvalidCharacter { word: String, ch: char },
    #[error("Words must not contain whitespace. Problem with: {word}")]
    EmbeddedWhitespace { word: String },
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding spaces and tabs are ignored and letters are upper-cased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - Whitespace appears between letters
    /// - A character is not an ASCII letter
    /// - More than `MAX_LEN` letters remain
    ///
    /// # Examples
    /// ```
    /// use alphametics::core::Word;
    ///
    /// let word = Word::new(" money ").unwrap();
    /// assert_eq!(word.text(), "MONEY");
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("m0ney").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref();
        let trimmed = raw.trim_matches(|c| c == ' ' || c == '\t');

        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        if trimmed.chars().any(char::is_whitespace) {
            return Err(WordError::EmbeddedWhitespace {
                word: raw.to_string(),
            });
        }

        if let Some(ch) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter {
                word: raw.to_string(),
                ch,
            });
        }

        if trimmed.len() > MAX_LEN {
            return Err(WordError::TooLong {
                word: raw.to_string(),
                len: trimmed.len(),
            });
        }

        let text = trimmed.to_ascii_uppercase();
        let letter_mask = text
            .bytes()
            .fold(0u32, |mask, b| mask | (1 << (b - b'A')));

        Ok(Self { text, letter_mask })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes (`b'A'..=b'Z'`)
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a validated word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The most significant letter, which may never map to zero
    #[inline]
    #[must_use]
    pub fn leading(&self) -> u8 {
        self.as_bytes()[0]
    }

    /// Bit mask of the distinct letters used
    #[inline]
    #[must_use]
    pub const fn letter_mask(&self) -> u32 {
        self.letter_mask
    }

    /// Number of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn distinct_letters(&self) -> u32 {
        self.letter_mask.count_ones()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
