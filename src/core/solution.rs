//! A complete letter-to-digit assignment

use super::puzzle::Puzzle;
use super::word::Word;
use std::fmt;

/// Letter-to-digit mapping for one solution, sorted by letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    assignments: Vec<(u8, u8)>,
}

impl Solution {
    /// Build a solution from `(letter, digit)` pairs in any order
    #[must_use]
    pub fn new(mut assignments: Vec<(u8, u8)>) -> Self {
        assignments.sort_unstable_by_key(|&(letter, _)| letter);
        Self { assignments }
    }

    /// `(letter, digit)` pairs in ascending letter order
    #[inline]
    #[must_use]
    pub fn assignments(&self) -> &[(u8, u8)] {
        &self.assignments
    }

    /// Digit assigned to a letter, if the letter appears in the puzzle
    #[must_use]
    pub fn digit_of(&self, letter: u8) -> Option<u8> {
        self.assignments
            .binary_search_by_key(&letter, |&(l, _)| l)
            .ok()
            .map(|i| self.assignments[i].1)
    }

    /// Digits of a word under this mapping, most significant first
    ///
    /// Returns `None` if a letter of the word is unmapped.
    #[must_use]
    pub fn digits_of(&self, word: &Word) -> Option<Vec<u8>> {
        word.as_bytes().iter().map(|&b| self.digit_of(b)).collect()
    }

    /// Check that this mapping really solves the puzzle
    ///
    /// Verifies that every letter is mapped, no two letters share a digit, digits are below
    /// the base, no leading letter is zero, and column-wise addition with carries reproduces
    /// the sum exactly.
    #[must_use]
    pub fn satisfies(&self, puzzle: &Puzzle) -> bool {
        let base = u32::from(puzzle.base());

        let mut seen = 0u32;
        for &(_, digit) in &self.assignments {
            if u32::from(digit) >= base || seen & (1 << digit) != 0 {
                return false;
            }
            seen |= 1 << digit;
        }

        let leading_zero = puzzle
            .summands()
            .iter()
            .chain(std::iter::once(puzzle.sum()))
            .any(|w| self.digit_of(w.leading()) == Some(0));
        if leading_zero {
            return false;
        }

        let Some(sum_digits) = self.digits_of(puzzle.sum()) else {
            return false;
        };
        let Some(summand_digits) = puzzle
            .summands()
            .iter()
            .map(|w| self.digits_of(w))
            .collect::<Option<Vec<_>>>()
        else {
            return false;
        };

        let mut carry = 0u32;
        for offset in 0..sum_digits.len() {
            let column_total: u32 = summand_digits
                .iter()
                .filter_map(|digits| digits.len().checked_sub(offset + 1).map(|i| digits[i]))
                .map(u32::from)
                .sum::<u32>()
                + carry;
            let expected = sum_digits[sum_digits.len() - offset - 1];
            if column_total % base != u32::from(expected) {
                return false;
            }
            carry = column_total / base;
        }

        carry == 0 && summand_digits.iter().all(|d| d.len() <= sum_digits.len())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &(letter, digit)) in self.assignments.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={digit}", letter as char)?;
        }
        Ok(())
    }
}
