//! Reference-counted letter slots
//!
//! Each letter holds an optional digit and the number of occurrences currently relying on it.
//! A digit is chosen at the letter's first occurrence and can only be moved while that first
//! occurrence is the sole reference (count == 1). Every digit has at most one owner.

use super::bounds::DigitRange;
use super::layout::LetterId;

#[derive(Debug, Clone, Copy, Default)]
struct LetterSlot {
    digit: Option<u8>,
    refs: u32,
    /// Upper end of the range the digit was drawn from
    range_max: i32,
}

/// Result of stepping back over one occurrence of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// First occurrence moved to the next free digit in its range
    Advanced { from: u8, to: u8 },
    /// First occurrence ran out of digits; the letter is unassigned again
    Exhausted { from: u8 },
    /// A later occurrence released its reference; the digit stays put
    Shared { digit: u8 },
}

/// Partial injective letter → digit mapping with occurrence counts
#[derive(Debug, Clone)]
pub struct LetterTable {
    slots: Vec<LetterSlot>,
    owners: Vec<Option<LetterId>>,
}

impl LetterTable {
    /// Empty table for `letters` letters and digits `0..base`
    #[must_use]
    pub fn new(letters: usize, base: u8) -> Self {
        Self {
            slots: vec![LetterSlot::default(); letters],
            owners: vec![None; usize::from(base)],
        }
    }

    /// Current digit of a letter
    #[inline]
    #[must_use]
    pub fn digit(&self, id: LetterId) -> Option<u8> {
        self.slots[id].digit
    }

    /// Number of occurrences relying on the letter's digit
    #[inline]
    #[must_use]
    pub fn refs(&self, id: LetterId) -> u32 {
        self.slots[id].refs
    }

    /// Letter owning a digit, if any
    #[inline]
    #[must_use]
    pub fn owner(&self, digit: u8) -> Option<LetterId> {
        self.owners[usize::from(digit)]
    }

    /// Give an unassigned letter the lowest free digit in `range`
    ///
    /// Returns `None` (leaving the letter unassigned) if every digit in range is taken.
    pub fn claim(&mut self, id: LetterId, range: DigitRange) -> Option<u8> {
        debug_assert!(self.slots[id].digit.is_none());

        let digit = self.first_free(range.min.max(0), range.max)?;
        self.take(id, digit);
        self.slots[id] = LetterSlot {
            digit: Some(digit),
            refs: 1,
            range_max: range.max,
        };
        Some(digit)
    }

    /// Add a reference from a later occurrence of an assigned letter
    pub fn reuse(&mut self, id: LetterId) -> Option<u8> {
        let slot = &mut self.slots[id];
        let digit = slot.digit?;
        slot.refs += 1;
        Some(digit)
    }

    /// Undo the most recent occurrence of an assigned letter
    ///
    /// Only the first occurrence (count == 1) may move the digit; it resumes scanning just
    /// above the released value. A later occurrence only drops its reference.
    ///
    /// # Panics
    /// Panics if the letter is unassigned.
    pub fn step_back(&mut self, id: LetterId) -> Retreat {
        let slot = self.slots[id];
        let from = slot.digit.expect("step_back on an unassigned letter");

        if slot.refs > 1 {
            self.slots[id].refs -= 1;
            return Retreat::Shared { digit: from };
        }

        self.owners[usize::from(from)] = None;
        if let Some(to) = self.first_free(i32::from(from) + 1, slot.range_max) {
            self.take(id, to);
            self.slots[id].digit = Some(to);
            Retreat::Advanced { from, to }
        } else {
            self.slots[id] = LetterSlot::default();
            Retreat::Exhausted { from }
        }
    }

    /// `(letter id, digit)` for every assigned letter, in id order
    pub fn assignments(&self) -> impl Iterator<Item = (LetterId, u8)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.digit.map(|d| (id, d)))
    }

    fn first_free(&self, min: i32, max: i32) -> Option<u8> {
        let max = max.min(self.owners.len() as i32 - 1);
        (min..=max)
            .map(|d| d as u8)
            .find(|&d| self.owners[usize::from(d)].is_none())
    }

    fn take(&mut self, id: LetterId, digit: u8) {
        debug_assert!(self.owners[usize::from(digit)].is_none());
        self.owners[usize::from(digit)] = Some(id);
    }
}
