//! Difficulty rating derived from search effort
//!
//! The rating is a five-step classification of how many times the assignment search had to
//! back up. It depends on the exact slot order of the search, so it is only comparable between
//! runs of this solver.

use std::fmt;

/// Five-level difficulty rating (1 = trivial, 5 = very hard)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    /// Lowest rating
    pub const EASIEST: Self = Self(1);
    /// Highest rating
    pub const HARDEST: Self = Self(5);

    /// Upper backtrack bound (inclusive) for levels 1 to 4
    const THRESHOLDS: [u64; 4] = [100, 600, 4000, 20000];

    /// Classify a backtrack count
    ///
    /// # Examples
    /// ```
    /// use alphametics::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::from_backtracks(100).level(), 1);
    /// assert_eq!(Difficulty::from_backtracks(101).level(), 2);
    /// assert_eq!(Difficulty::from_backtracks(1_000_000).level(), 5);
    /// ```
    #[must_use]
    pub fn from_backtracks(backtracks: u64) -> Self {
        let below = Self::THRESHOLDS
            .iter()
            .take_while(|&&limit| backtracks > limit)
            .count();
        Self(below as u8 + 1)
    }

    /// Numeric level, 1 to 5
    #[inline]
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Short human label for the level
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "trivial",
            2 => "easy",
            3 => "moderate",
            4 => "hard",
            _ => "fiendish",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
