//! Column layout of a puzzle
//!
//! Summands are right-justified under the sum and packed into the top rows of each column:
//!
//! ```text
//!     I S        E N I S
//!     I T          A I T
//!   N O T   =>       O T
//! E A S Y            S Y
//!     T O            T O
//! ```
//!
//! Letters are interned to dense ids in alphabetical order, so iterating ids yields letters in
//! the order solutions are printed.

use crate::core::{Infeasibility, Puzzle};
use rustc_hash::FxHashMap;

/// Dense letter index, `0..Layout::letter_count()`
pub type LetterId = usize;

/// Jagged (column, row) grid of letter ids for one feasible puzzle
#[derive(Debug, Clone)]
pub struct Layout {
    base: u8,
    letters: Vec<u8>,
    leading: Vec<bool>,
    sum: Vec<LetterId>,
    columns: Vec<Vec<LetterId>>,
}

impl Layout {
    /// Lay out a puzzle column by column
    ///
    /// # Errors
    /// Returns the puzzle's `Infeasibility` if a summand is longer than the sum or there are
    /// more distinct letters than digits; no layout is built in that case.
    pub fn new(puzzle: &Puzzle) -> Result<Self, Infeasibility> {
        puzzle.feasibility()?;

        let mask = puzzle.letter_mask();
        let letters: Vec<u8> = (0..26u8)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| b'A' + i)
            .collect();
        let ids: FxHashMap<u8, LetterId> = letters
            .iter()
            .enumerate()
            .map(|(id, &l)| (l, id))
            .collect();

        let mut leading = vec![false; letters.len()];
        let sum_word = puzzle.sum();
        leading[ids[&sum_word.leading()]] = true;

        let width = sum_word.len();
        let sum = sum_word.as_bytes().iter().map(|b| ids[b]).collect();
        let mut columns: Vec<Vec<LetterId>> = vec![Vec::new(); width];

        for summand in puzzle.summands() {
            leading[ids[&summand.leading()]] = true;
            let offset = width - summand.len();
            for (j, b) in summand.as_bytes().iter().enumerate() {
                columns[offset + j].push(ids[b]);
            }
        }

        Ok(Self {
            base: puzzle.base(),
            letters,
            leading,
            sum,
            columns,
        })
    }

    /// Numeric base
    #[inline]
    #[must_use]
    pub const fn base(&self) -> u8 {
        self.base
    }

    /// Number of columns (the sum's length)
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.sum.len()
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.letters.len()
    }

    /// The letter behind an id
    #[inline]
    #[must_use]
    pub fn letter(&self, id: LetterId) -> u8 {
        self.letters[id]
    }

    /// Whether the letter starts some word and so can't be zero
    #[inline]
    #[must_use]
    pub fn is_leading(&self, id: LetterId) -> bool {
        self.leading[id]
    }

    /// The sum's letter in a column
    #[inline]
    #[must_use]
    pub fn sum_letter(&self, column: usize) -> LetterId {
        self.sum[column]
    }

    /// Summand letters landing in a column, row 0 first
    #[inline]
    #[must_use]
    pub fn contributors(&self, column: usize) -> &[LetterId] {
        &self.columns[column]
    }

    /// Summand letter at (column, row)
    #[inline]
    #[must_use]
    pub fn contributor(&self, column: usize, row: usize) -> LetterId {
        self.columns[column][row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters_of(layout: &Layout, ids: &[LetterId]) -> String {
        ids.iter().map(|&id| layout.letter(id) as char).collect()
    }

    #[test]
    fn columns_right_justified_and_packed() {
        let tokens = ["IS", "IT", "NOT", "EASY", "TO", "ENIS"];
        let puzzle = Puzzle::from_tokens(&tokens, 10).unwrap();
        let layout = Layout::new(&puzzle).unwrap();

        assert_eq!(layout.width(), 4);
        assert_eq!(letters_of(&layout, layout.contributors(0)), "E");
        assert_eq!(letters_of(&layout, layout.contributors(1)), "NA");
        assert_eq!(letters_of(&layout, layout.contributors(2)), "IIOST");
        assert_eq!(letters_of(&layout, layout.contributors(3)), "STTYO");
    }

    #[test]
    fn letters_interned_alphabetically() {
        let puzzle = Puzzle::parse("SEND + MORE = MONEY", 10).unwrap();
        let layout = Layout::new(&puzzle).unwrap();

        let letters: String = (0..layout.letter_count())
            .map(|id| layout.letter(id) as char)
            .collect();
        assert_eq!(letters, "DEMNORSY");
    }

    #[test]
    fn leading_letters_marked() {
        let puzzle = Puzzle::parse("SEND + MORE = MONEY", 10).unwrap();
        let layout = Layout::new(&puzzle).unwrap();

        let leading: String = (0..layout.letter_count())
            .filter(|&id| layout.is_leading(id))
            .map(|id| layout.letter(id) as char)
            .collect();
        assert_eq!(leading, "MS");
    }

    #[test]
    fn sum_letters_by_column() {
        let puzzle = Puzzle::parse("I + BB = ILL", 10).unwrap();
        let layout = Layout::new(&puzzle).unwrap();

        let sum: String = (0..layout.width())
            .map(|c| layout.letter(layout.sum_letter(c)) as char)
            .collect();
        assert_eq!(sum, "ILL");
        assert!(layout.contributors(0).is_empty());
        assert_eq!(layout.letter(layout.contributor(2, 0)), b'I');
        assert_eq!(layout.letter(layout.contributor(2, 1)), b'B');
    }

    #[test]
    fn infeasible_puzzles_have_no_layout() {
        let puzzle = Puzzle::from_tokens(&["AB", "C", "D"], 10).unwrap();
        assert!(matches!(
            Layout::new(&puzzle),
            Err(Infeasibility::SummandTooLong { .. })
        ));
    }
}
