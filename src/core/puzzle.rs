//! Addition puzzle over words
//!
//! A Puzzle pairs an ordered list of summand words with a sum word in a given base.

use super::word::{Word, WordError};
use std::fmt;
use thiserror::Error;

/// Smallest supported base
pub const MIN_BASE: u8 = 2;
/// Largest supported base; a digit must fit one symbol
pub const MAX_BASE: u8 = 16;
/// Upper limit on summands in one puzzle and on words in a finder list
pub const MAX_WORDS: usize = 2000;

/// Error type for puzzles that can't be built at all
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("Base must be between {MIN_BASE} and {MAX_BASE}, got {0}")]
    InvalidBase(u8),
    #[error("A puzzle needs at least one summand")]
    NoSummands,
    #[error("Too many summands: {0} (limit is {MAX_WORDS})")]
    TooManySummands(usize),
    #[error("Expected an equation like 'SEND + MORE = MONEY', got '{0}'")]
    Malformed(String),
    #[error(transparent)]
    Word(#[from] WordError),
}

/// Reason a well-formed puzzle can't have any solution
///
/// These are not errors: the solver reports zero solutions without searching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Infeasibility {
    #[error("summand {summand} is longer than the sum ({sum_len} letters)")]
    SummandTooLong { summand: String, sum_len: usize },
    #[error("{letters} distinct letters can't map to {base} digits")]
    TooManyLetters { letters: u32, base: u8 },
}

/// An alphametic addition puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    summands: Vec<Word>,
    sum: Word,
    base: u8,
}

impl Puzzle {
    /// Create a puzzle from validated words
    ///
    /// # Errors
    /// Returns `PuzzleError` if the base is outside `MIN_BASE..=MAX_BASE` or the summand count
    /// is zero or above `MAX_WORDS`.
    pub fn new(summands: Vec<Word>, sum: Word, base: u8) -> Result<Self, PuzzleError> {
        validate_base(base)?;

        if summands.is_empty() {
            return Err(PuzzleError::NoSummands);
        }
        if summands.len() > MAX_WORDS {
            return Err(PuzzleError::TooManySummands(summands.len()));
        }

        Ok(Self {
            summands,
            sum,
            base,
        })
    }

    /// Build a puzzle from raw tokens where the last token is the sum
    ///
    /// # Errors
    /// Returns `PuzzleError` if any token is not a valid word, fewer than two tokens are given,
    /// or the base is invalid.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], base: u8) -> Result<Self, PuzzleError> {
        let Some((sum, summands)) = tokens.split_last() else {
            return Err(PuzzleError::NoSummands);
        };

        let summands = summands
            .iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        let sum = Word::new(sum)?;

        Self::new(summands, sum, base)
    }

    /// Parse an equation such as `"SEND + MORE = MONEY"`
    ///
    /// # Errors
    /// Returns `PuzzleError::Malformed` unless there is exactly one `=` with words on both
    /// sides, or a word error for bad tokens.
    ///
    /// # Examples
    /// ```
    /// use alphametics::core::Puzzle;
    ///
    /// let puzzle = Puzzle::parse("send+more = money", 10).unwrap();
    /// assert_eq!(puzzle.to_string(), "SEND + MORE = MONEY");
    /// ```
    pub fn parse(equation: &str, base: u8) -> Result<Self, PuzzleError> {
        let malformed = || PuzzleError::Malformed(equation.trim().to_string());

        let (left, right) = equation.split_once('=').ok_or_else(malformed)?;
        if right.contains('=') || left.trim().is_empty() || right.trim().is_empty() {
            return Err(malformed());
        }

        let summands = left
            .split('+')
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        let sum = Word::new(right)?;

        Self::new(summands, sum, base)
    }

    /// The words being added, in input order
    #[inline]
    #[must_use]
    pub fn summands(&self) -> &[Word] {
        &self.summands
    }

    /// The word representing the total
    #[inline]
    #[must_use]
    pub const fn sum(&self) -> &Word {
        &self.sum
    }

    /// Numeric base the puzzle is solved in
    #[inline]
    #[must_use]
    pub const fn base(&self) -> u8 {
        self.base
    }

    /// Length of the longest summand
    #[must_use]
    pub fn longest_summand(&self) -> usize {
        self.summands.iter().map(Word::len).max().unwrap_or(0)
    }

    /// Bit mask of every letter appearing in the puzzle
    #[must_use]
    pub fn letter_mask(&self) -> u32 {
        self.summands
            .iter()
            .fold(self.sum.letter_mask(), |mask, w| mask | w.letter_mask())
    }

    /// Number of distinct letters in the puzzle
    #[must_use]
    pub fn distinct_letters(&self) -> u32 {
        self.letter_mask().count_ones()
    }

    /// Check the structural conditions every solvable puzzle meets
    ///
    /// # Errors
    /// Returns the first `Infeasibility` found: a summand longer than the sum, or more
    /// distinct letters than digits.
    pub fn feasibility(&self) -> Result<(), Infeasibility> {
        if let Some(long) = self.summands.iter().find(|w| w.len() > self.sum.len()) {
            return Err(Infeasibility::SummandTooLong {
                summand: long.text().to_string(),
                sum_len: self.sum.len(),
            });
        }

        let letters = self.distinct_letters();
        if letters > u32::from(self.base) {
            return Err(Infeasibility::TooManyLetters {
                letters,
                base: self.base,
            });
        }

        Ok(())
    }
}

/// Check that a base is in the supported range
///
/// # Errors
/// Returns `PuzzleError::InvalidBase` outside `MIN_BASE..=MAX_BASE`.
pub const fn validate_base(base: u8) -> Result<(), PuzzleError> {
    if base < MIN_BASE || base > MAX_BASE {
        return Err(PuzzleError::InvalidBase(base));
    }
    Ok(())
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, summand) in self.summands.iter().enumerate() {
            if i != 0 {
                write!(f, " + ")?;
            }
            write!(f, "{summand}")?;
        }
        write!(f, " = {}", self.sum)
    }
}
