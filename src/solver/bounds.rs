//! Pruning bounds for the assignment search
//!
//! `max_carry[c]` is the largest carry column `c` can pass to the column on its left. It is
//! built once per puzzle, right to left, and drives both the column rejection test and the
//! per-letter digit ranges.

use super::layout::Layout;

/// How carry limits are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarryPruning {
    /// `floor(((base-1)·contributors + max_carry[c+1]) / base)` per column
    #[default]
    Tight,
    /// Summand count for every column; valid but much weaker
    Loose,
}

/// Per-column carry limits, `width + 1` entries with the last fixed at zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarryBounds {
    max_carry: Vec<i32>,
}

impl CarryBounds {
    /// Build the carry table for a layout
    #[must_use]
    pub fn new(layout: &Layout, pruning: CarryPruning) -> Self {
        let width = layout.width();
        let mut max_carry = vec![0; width + 1];

        match pruning {
            CarryPruning::Tight => {
                let base = i32::from(layout.base());
                let max_digit = base - 1;
                for c in (0..width).rev() {
                    let rows = layout.contributors(c).len() as i32;
                    max_carry[c] = (max_digit * rows + max_carry[c + 1]) / base;
                }
            }
            CarryPruning::Loose => {
                // Carry out of any column is at most the number of summands.
                let summands = layout.contributors(width - 1).len() as i32;
                max_carry[..width].fill(summands);
            }
        }

        Self { max_carry }
    }

    /// Largest carry column `column` can produce (`column == width` gives zero)
    #[inline]
    #[must_use]
    pub fn max_carry(&self, column: usize) -> i32 {
        self.max_carry[column]
    }
}

/// Inclusive digit range for a letter's first occurrence; empty when `min > max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRange {
    pub min: i32,
    pub max: i32,
}

impl DigitRange {
    /// Range for a sum letter at the head of a column
    ///
    /// The digit plus `base·needed_carry` can't exceed what the contributors and the carry
    /// from the right can add up to.
    #[must_use]
    pub fn for_sum(
        leading: bool,
        base: i32,
        contributors: usize,
        needed_carry: i32,
        carry_in_max: i32,
    ) -> Self {
        let max_digit = base - 1;
        let max_possible = carry_in_max + max_digit * contributors as i32 - needed_carry * base;
        Self {
            min: i32::from(leading),
            max: max_digit.min(max_possible),
        }
    }

    /// Range for a summand letter with `rows_below` contributors still to place
    ///
    /// The digit must leave a remainder the rows below and the incoming carry can cover, and
    /// can't exceed the remaining target itself.
    #[must_use]
    pub fn for_summand(
        leading: bool,
        base: i32,
        rows_below: usize,
        needed_sum: i32,
        carry_in_max: i32,
    ) -> Self {
        let max_digit = base - 1;
        let min_possible = needed_sum - max_digit * rows_below as i32 - carry_in_max;
        Self {
            min: min_possible.max(i32::from(leading)),
            max: max_digit.min(needed_sum),
        }
    }

    /// Whether the range admits no digit at all
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.min > self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Puzzle;

    fn layout(equation: &str, base: u8) -> Layout {
        Layout::new(&Puzzle::parse(equation, base).unwrap()).unwrap()
    }

    #[test]
    fn tight_carry_table_for_ill() {
        let bounds = CarryBounds::new(&layout("I + BB = ILL", 10), CarryPruning::Tight);
        assert_eq!(bounds.max_carry(3), 0);
        assert_eq!(bounds.max_carry(2), 1);
        assert_eq!(bounds.max_carry(1), 1);
        assert_eq!(bounds.max_carry(0), 0);
    }

    #[test]
    fn tight_carry_grows_with_summands() {
        let bounds = CarryBounds::new(
            &layout("AB + CD + EF + GH + IJ + AK = ABC", 16),
            CarryPruning::Tight,
        );
        // (15·6 + 0) / 16 = 5, then (15·6 + 5) / 16 = 5, then (0 + 5) / 16 = 0
        assert_eq!(bounds.max_carry(2), 5);
        assert_eq!(bounds.max_carry(1), 5);
        assert_eq!(bounds.max_carry(0), 0);
    }

    #[test]
    fn loose_bounds_dominate_tight() {
        let layout = layout("SEND + MORE = MONEY", 10);
        let tight = CarryBounds::new(&layout, CarryPruning::Tight);
        let loose = CarryBounds::new(&layout, CarryPruning::Loose);
        for c in 0..=layout.width() {
            assert!(loose.max_carry(c) >= tight.max_carry(c));
        }
        assert_eq!(loose.max_carry(layout.width()), 0);
    }

    #[test]
    fn sum_range_respects_leading_and_carry() {
        let range = DigitRange::for_sum(true, 10, 0, 0, 1);
        assert_eq!(range, DigitRange { min: 1, max: 1 });

        let range = DigitRange::for_sum(false, 10, 1, 1, 1);
        assert_eq!(range, DigitRange { min: 0, max: 0 });
    }

    #[test]
    fn summand_range_pigeonhole() {
        // Needs 10 from this digit alone with at most 1 carried in.
        let range = DigitRange::for_summand(true, 10, 0, 10, 1);
        assert_eq!(range, DigitRange { min: 9, max: 9 });

        let range = DigitRange::for_summand(false, 10, 2, 3, 1);
        assert_eq!(range, DigitRange { min: 0, max: 3 });
    }

    #[test]
    fn empty_range_detected() {
        let range = DigitRange::for_summand(true, 10, 0, 0, 0);
        assert!(range.is_empty());
    }
}
