//! Finder configuration

use crate::core::{MAX_BASE, MAX_WORDS, MIN_BASE, PuzzleError};
use thiserror::Error;

/// Which solution counts make a candidate worth reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcceptPolicy {
    /// Exactly one solution
    #[default]
    ExactlyOne,
    /// One or more solutions
    AtLeastOne,
}

impl AcceptPolicy {
    /// Whether a candidate with `solutions` solutions is accepted
    #[inline]
    #[must_use]
    pub const fn accepts(self, solutions: usize) -> bool {
        match self {
            Self::ExactlyOne => solutions == 1,
            Self::AtLeastOne => solutions > 0,
        }
    }
}

/// Which words may serve as the sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SumPolicy {
    /// Every word in the list, in order
    #[default]
    Every,
    /// Only the first word
    FirstOnly,
}

/// Error type for finder settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindConfigError {
    #[error("Base must be between {MIN_BASE} and {MAX_BASE}, got {0}")]
    InvalidBase(u8),
    #[error("The minimum number of summands must be at least 1")]
    ZeroSummands,
    #[error("Minimum summands ({min}) is greater than maximum ({max})")]
    EmptyRange { min: usize, max: usize },
    #[error("Too many summands: {0} (limit is {MAX_WORDS})")]
    TooManySummands(usize),
    #[error("No words to search")]
    NoWords,
    #[error("Too many words: {0} (limit is {MAX_WORDS})")]
    TooManyWords(usize),
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
}

/// Settings for one finder run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindConfig {
    pub base: u8,
    pub min_summands: usize,
    pub max_summands: usize,
    pub policy: AcceptPolicy,
    /// Let one word appear more than once among the summands
    pub allow_repeats: bool,
    pub sums: SumPolicy,
    /// Spread (summand count, sum) work units over the rayon pool
    pub parallel: bool,
    /// Skip candidates with more distinct letters than the base before solving
    pub letter_filter: bool,
}

impl Default for FindConfig {
    fn default() -> Self {
        Self {
            base: 10,
            min_summands: 2,
            max_summands: 2,
            policy: AcceptPolicy::ExactlyOne,
            allow_repeats: true,
            sums: SumPolicy::Every,
            parallel: true,
            letter_filter: true,
        }
    }
}

impl FindConfig {
    /// Check the settings against a word list of `word_count` words
    ///
    /// # Errors
    /// Returns `FindConfigError` for a bad base, a zero or inverted summand range, a range
    /// above `MAX_WORDS`, or a word list that is empty or longer than `MAX_WORDS`.
    pub const fn validate(&self, word_count: usize) -> Result<(), FindConfigError> {
        if self.base < MIN_BASE || self.base > MAX_BASE {
            return Err(FindConfigError::InvalidBase(self.base));
        }
        if self.min_summands == 0 {
            return Err(FindConfigError::ZeroSummands);
        }
        if self.min_summands > self.max_summands {
            return Err(FindConfigError::EmptyRange {
                min: self.min_summands,
                max: self.max_summands,
            });
        }
        if self.max_summands > MAX_WORDS {
            return Err(FindConfigError::TooManySummands(self.max_summands));
        }
        if word_count == 0 {
            return Err(FindConfigError::NoWords);
        }
        if word_count > MAX_WORDS {
            return Err(FindConfigError::TooManyWords(word_count));
        }
        Ok(())
    }
}
