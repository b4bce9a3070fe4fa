//! Column-wise backtracking assignment search
//!
//! The search walks a fixed order of slots: for each column from most to least significant,
//! the sum letter and then the summand letters from the bottom row up to row 0. It never
//! recurses; a `Search` value holds the whole state and `step` advances it by one slot, so
//! stack use does not grow with search effort.

use super::bounds::{CarryBounds, CarryPruning, DigitRange};
use super::layout::{Layout, LetterId};
use super::letters::{LetterTable, Retreat};
use crate::core::{Difficulty, Infeasibility, Puzzle, Solution};
use tracing::{debug, trace};

/// When the search stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    /// Enumerate every solution
    #[default]
    All,
    /// Stop at the first solution
    First,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub mode: SearchMode,
    pub pruning: CarryPruning,
}

impl SearchOptions {
    /// Options for the given mode with tight carry pruning
    #[must_use]
    pub const fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            pruning: CarryPruning::Tight,
        }
    }
}

/// Summary of one engine invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Solutions found (at most one in `SearchMode::First`)
    pub solutions: usize,
    /// Failed attempts counted during the search
    pub backtracks: u64,
    /// Rating derived from `backtracks`; `None` when the puzzle was rejected before searching
    pub difficulty: Option<Difficulty>,
    /// Why the search never started, if it didn't
    pub infeasible: Option<Infeasibility>,
}

impl SolveOutcome {
    fn rejected(reason: Infeasibility) -> Self {
        Self {
            solutions: 0,
            backtracks: 0,
            difficulty: None,
            infeasible: Some(reason),
        }
    }

    /// Whether exactly one solution exists (only meaningful for `SearchMode::All`)
    #[inline]
    #[must_use]
    pub const fn is_unique(&self) -> bool {
        self.solutions == 1
    }
}

/// Assignment search over one puzzle
///
/// # Examples
/// ```
/// use alphametics::core::Puzzle;
/// use alphametics::solver::Solver;
///
/// let puzzle = Puzzle::parse("I + BB = ILL", 10).unwrap();
/// let (outcome, solutions) = Solver::new(&puzzle).solutions();
///
/// assert_eq!(outcome.solutions, 1);
/// assert_eq!(solutions[0].to_string(), "B=9 I=1 L=0");
/// ```
pub struct Solver<'p> {
    puzzle: &'p Puzzle,
    options: SearchOptions,
}

impl<'p> Solver<'p> {
    /// Solver enumerating all solutions with tight pruning
    #[must_use]
    pub fn new(puzzle: &'p Puzzle) -> Self {
        Self::with_options(puzzle, SearchOptions::default())
    }

    /// Solver with explicit options
    #[must_use]
    pub const fn with_options(puzzle: &'p Puzzle, options: SearchOptions) -> Self {
        Self { puzzle, options }
    }

    /// Count solutions without materializing them
    #[must_use]
    pub fn count(&self) -> SolveOutcome {
        self.search(None)
    }

    /// Collect every solution found
    #[must_use]
    pub fn solutions(&self) -> (SolveOutcome, Vec<Solution>) {
        let mut found = Vec::new();
        let outcome = self.run(|s| found.push(s.clone()));
        (outcome, found)
    }

    /// Run the search, handing each solution to `on_solution` as it is found
    pub fn run<F: FnMut(&Solution)>(&self, mut on_solution: F) -> SolveOutcome {
        self.search(Some(&mut on_solution))
    }

    fn search(&self, mut on_solution: Option<&mut dyn FnMut(&Solution)>) -> SolveOutcome {
        let layout = match Layout::new(self.puzzle) {
            Ok(layout) => layout,
            Err(reason) => {
                debug!(puzzle = %self.puzzle, %reason, "rejected before search");
                return SolveOutcome::rejected(reason);
            }
        };

        let mut search = Search::new(&layout, self.options.pruning);
        let mut solutions = 0;

        loop {
            match search.step() {
                Step::Advanced => {}
                Step::Solution => {
                    solutions += 1;
                    if let Some(emit) = on_solution.as_mut() {
                        let solution = search.solution();
                        trace!(puzzle = %self.puzzle, %solution, "solution");
                        emit(&solution);
                    }
                    if self.options.mode == SearchMode::First {
                        break;
                    }
                }
                Step::Exhausted => break,
            }
        }

        debug!(
            puzzle = %self.puzzle,
            solutions,
            backtracks = search.backtracks,
            "search finished"
        );

        SolveOutcome {
            solutions,
            backtracks: search.backtracks,
            difficulty: Some(Difficulty::from_backtracks(search.backtracks)),
            infeasible: None,
        }
    }
}

/// Position in the slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Sum(usize),
    Summand { column: usize, row: usize },
    /// Past the least significant column
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// What one call to `Search::step` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Advanced,
    /// A full assignment satisfying the puzzle is in place
    Solution,
    /// Backed out past the first slot
    Exhausted,
}

/// Mutable search state for one puzzle
struct Search<'a> {
    layout: &'a Layout,
    bounds: CarryBounds,
    letters: LetterTable,
    base: i32,
    /// Carry each column must send left; `needed_carry[0]` stays 0
    needed_carry: Vec<i32>,
    /// Remaining target for the summand rows of the current column
    needed_sum: i32,
    slot: Slot,
    direction: Direction,
    backtracks: u64,
}

impl<'a> Search<'a> {
    fn new(layout: &'a Layout, pruning: CarryPruning) -> Self {
        Self {
            layout,
            bounds: CarryBounds::new(layout, pruning),
            letters: LetterTable::new(layout.letter_count(), layout.base()),
            base: i32::from(layout.base()),
            needed_carry: vec![0; layout.width() + 1],
            needed_sum: 0,
            slot: Slot::Sum(0),
            direction: Direction::Forward,
            backtracks: 0,
        }
    }

    fn step(&mut self) -> Step {
        match self.slot {
            Slot::Complete => self.step_complete(),
            Slot::Sum(column) => self.step_sum(column),
            Slot::Summand { column, row } => self.step_summand(column, row),
        }
    }

    fn solution(&self) -> Solution {
        Solution::new(
            self.letters
                .assignments()
                .map(|(id, digit)| (self.layout.letter(id), digit))
                .collect(),
        )
    }

    fn step_complete(&mut self) -> Step {
        let width = self.layout.width();
        let found = self.needed_carry[width] == 0;

        self.needed_sum = self.needed_carry[width];
        self.direction = Direction::Backward;
        self.slot = self.column_end(width - 1);

        if found {
            Step::Solution
        } else {
            Step::Advanced
        }
    }

    fn step_sum(&mut self, column: usize) -> Step {
        let letter = self.layout.sum_letter(column);
        let next = match self.direction {
            Direction::Forward => self.enter_sum(column, letter),
            Direction::Backward => match self.letters.step_back(letter) {
                Retreat::Advanced { to, .. } => Some(to),
                Retreat::Exhausted { .. } | Retreat::Shared { .. } => {
                    self.backtracks += 1;
                    None
                }
            },
        };

        let Some(digit) = next else {
            self.direction = Direction::Backward;
            self.needed_sum = self.needed_carry[column];
            if column == 0 {
                return Step::Exhausted;
            }
            self.slot = self.column_end(column - 1);
            return Step::Advanced;
        };

        self.direction = Direction::Forward;
        self.needed_sum = i32::from(digit) + self.base * self.needed_carry[column];

        let rows = self.layout.contributors(column).len();
        if rows == 0 {
            self.needed_carry[column + 1] = self.needed_sum;
            self.slot = self.column_start(column + 1);
        } else {
            self.slot = Slot::Summand {
                column,
                row: rows - 1,
            };
        }
        Step::Advanced
    }

    fn enter_sum(&mut self, column: usize, letter: LetterId) -> Option<u8> {
        if self.needed_carry[column] > self.bounds.max_carry(column) {
            self.backtracks += 1;
            return None;
        }

        if self.letters.digit(letter).is_some() {
            return self.letters.reuse(letter);
        }

        let range = DigitRange::for_sum(
            self.layout.is_leading(letter),
            self.base,
            self.layout.contributors(column).len(),
            self.needed_carry[column],
            self.bounds.max_carry(column + 1),
        );
        let claimed = self.letters.claim(letter, range);
        if claimed.is_none() {
            self.backtracks += 1;
        }
        claimed
    }

    fn step_summand(&mut self, column: usize, row: usize) -> Step {
        let letter = self.layout.contributor(column, row);
        let next = match self.direction {
            Direction::Forward => self.enter_summand(column, row, letter),
            Direction::Backward => match self.letters.step_back(letter) {
                Retreat::Advanced { from, to } => {
                    self.needed_sum += i32::from(from);
                    Some(to)
                }
                Retreat::Exhausted { from } => {
                    self.needed_sum += i32::from(from);
                    self.backtracks += 1;
                    None
                }
                Retreat::Shared { digit } => {
                    self.needed_sum += i32::from(digit);
                    None
                }
            },
        };

        if let Some(digit) = next {
            self.direction = Direction::Forward;
            self.needed_sum -= i32::from(digit);
            if row == 0 {
                self.needed_carry[column + 1] = self.needed_sum;
                self.slot = self.column_start(column + 1);
            } else {
                self.slot = Slot::Summand {
                    column,
                    row: row - 1,
                };
            }
        } else {
            self.direction = Direction::Backward;
            self.slot = if row + 1 == self.layout.contributors(column).len() {
                Slot::Sum(column)
            } else {
                Slot::Summand {
                    column,
                    row: row + 1,
                }
            };
        }
        Step::Advanced
    }

    fn enter_summand(&mut self, column: usize, row: usize, letter: LetterId) -> Option<u8> {
        if let Some(digit) = self.letters.digit(letter) {
            if i32::from(digit) > self.needed_sum {
                self.backtracks += 1;
                return None;
            }
            return self.letters.reuse(letter);
        }

        let range = DigitRange::for_summand(
            self.layout.is_leading(letter),
            self.base,
            row,
            self.needed_sum,
            self.bounds.max_carry(column + 1),
        );
        let claimed = self.letters.claim(letter, range);
        if claimed.is_none() {
            self.backtracks += 1;
        }
        claimed
    }

    /// First slot of a column, or `Complete` past the last one
    fn column_start(&self, column: usize) -> Slot {
        if column == self.layout.width() {
            Slot::Complete
        } else {
            Slot::Sum(column)
        }
    }

    /// Last slot of a column in forward order
    fn column_end(&self, column: usize) -> Slot {
        if self.layout.contributors(column).is_empty() {
            Slot::Sum(column)
        } else {
            Slot::Summand { column, row: 0 }
        }
    }
}
