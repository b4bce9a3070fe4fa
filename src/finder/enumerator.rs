//! Combination enumerator
//!
//! For each summand count and each sum word, a depth-first walk over slots of word indices.
//! Summand indices never decrease from one slot to the next, so each multiset of summands is
//! tried once. Every complete candidate is solved in enumerate-all mode and kept if the
//! acceptance policy allows its solution count.

use super::config::{FindConfig, FindConfigError, SumPolicy};
use super::letter_count::letter_count;
use crate::core::{Difficulty, Puzzle, Word};
use crate::solver::Solver;
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, info};

/// A candidate that passed the acceptance policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundPuzzle {
    pub puzzle: Puzzle,
    pub solutions: usize,
    pub difficulty: Difficulty,
}

impl fmt::Display for FoundPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.puzzle)
    }
}

/// Outcome of a finder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindReport {
    /// Accepted puzzles in search order
    pub accepted: Vec<FoundPuzzle>,
    /// Candidates handed to the solver
    pub tried: u64,
}

/// Progress after one (summand count, sum) unit finishes
#[derive(Debug, Clone, Copy)]
pub struct UnitProgress<'w> {
    pub summands: usize,
    pub sum: &'w Word,
    pub accepted: usize,
    pub tried: u64,
}

#[derive(Debug, Clone, Copy)]
struct WorkUnit {
    summands: usize,
    sum: usize,
}

/// Search a word list for puzzles
///
/// # Errors
/// Returns `FindConfigError` if the configuration is invalid for this word list.
///
/// # Examples
/// ```
/// use alphametics::core::Word;
/// use alphametics::finder::{FindConfig, find_puzzles};
///
/// let words: Vec<Word> = ["SEND", "MORE", "MONEY"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let report = find_puzzles(&words, &FindConfig::default()).unwrap();
///
/// assert!(report.accepted.iter().any(|p| p.to_string() == "SEND + MORE = MONEY"));
/// ```
pub fn find_puzzles(words: &[Word], config: &FindConfig) -> Result<FindReport, FindConfigError> {
    find_puzzles_with(words, config, |_| {})
}

/// Number of (summand count, sum) units a run will search
#[must_use]
pub fn unit_count(word_count: usize, config: &FindConfig) -> usize {
    let sums = match config.sums {
        SumPolicy::Every => word_count,
        SumPolicy::FirstOnly => word_count.min(1),
    };
    (config.min_summands..=config.max_summands).count() * sums
}

/// Search a word list, reporting each finished unit to `on_unit`
///
/// Units may finish in any order when running in parallel; the report is always in the
/// sequential search order.
///
/// # Errors
/// Returns `FindConfigError` if the configuration is invalid for this word list.
pub fn find_puzzles_with<F>(
    words: &[Word],
    config: &FindConfig,
    on_unit: F,
) -> Result<FindReport, FindConfigError>
where
    F: Fn(UnitProgress<'_>) + Sync,
{
    config.validate(words.len())?;

    let masks: Vec<u32> = words.iter().map(Word::letter_mask).collect();
    let sum_limit = match config.sums {
        SumPolicy::Every => words.len(),
        SumPolicy::FirstOnly => 1,
    };
    let units: Vec<WorkUnit> = (config.min_summands..=config.max_summands)
        .flat_map(|summands| (0..sum_limit).map(move |sum| WorkUnit { summands, sum }))
        .collect();

    let run = |unit: &WorkUnit| {
        let report = search_unit(words, &masks, *unit, config)?;
        on_unit(UnitProgress {
            summands: unit.summands,
            sum: &words[unit.sum],
            accepted: report.accepted.len(),
            tried: report.tried,
        });
        Ok::<_, FindConfigError>(report)
    };

    let reports: Vec<FindReport> = if config.parallel {
        units.par_iter().map(run).collect::<Result<_, _>>()?
    } else {
        units.iter().map(run).collect::<Result<_, _>>()?
    };

    let mut total = FindReport::default();
    for report in reports {
        total.accepted.extend(report.accepted);
        total.tried += report.tried;
    }

    info!(
        accepted = total.accepted.len(),
        tried = total.tried,
        units = units.len(),
        "finder finished"
    );
    Ok(total)
}

/// Depth-first walk over summand slots for one summand count and one sum
fn search_unit(
    words: &[Word],
    masks: &[u32],
    unit: WorkUnit,
    config: &FindConfig,
) -> Result<FindReport, FindConfigError> {
    let count = words.len();
    let k = unit.summands;
    let sum = &words[unit.sum];
    let base = u32::from(config.base);
    let repeat_step = usize::from(!config.allow_repeats);

    let mut report = FindReport::default();
    let mut chosen: Vec<usize> = Vec::with_capacity(k);
    // Union letter mask of the sum and chosen[..=i]
    let mut chosen_masks: Vec<u32> = Vec::with_capacity(k);
    let mut next = 0;

    loop {
        if chosen.len() == k {
            evaluate(words, &chosen, sum, config, &mut report)?;
            // k >= 1, so a full slot set always has a last entry
            if let Some(last) = chosen.pop() {
                chosen_masks.pop();
                next = last + 1;
            }
            continue;
        }

        let slot = chosen.len();
        let limit = if config.allow_repeats {
            count
        } else {
            count.saturating_sub(k - slot - 1)
        };
        let mask_so_far = chosen_masks.last().copied().unwrap_or(masks[unit.sum]);

        let candidate = (next..limit).find_map(|i| {
            if i == unit.sum || words[i].len() > sum.len() {
                return None;
            }
            let mask = mask_so_far | masks[i];
            if config.letter_filter && letter_count(mask) > base {
                return None;
            }
            Some((i, mask))
        });

        if let Some((i, mask)) = candidate {
            chosen.push(i);
            chosen_masks.push(mask);
            next = i + repeat_step;
        } else if let Some(last) = chosen.pop() {
            chosen_masks.pop();
            next = last + 1;
        } else {
            break;
        }
    }

    Ok(report)
}

fn evaluate(
    words: &[Word],
    chosen: &[usize],
    sum: &Word,
    config: &FindConfig,
    report: &mut FindReport,
) -> Result<(), FindConfigError> {
    let summands = chosen.iter().map(|&i| words[i].clone()).collect();
    let puzzle = Puzzle::new(summands, sum.clone(), config.base)?;
    let outcome = Solver::new(&puzzle).count();
    report.tried += 1;

    debug!(
        candidate = %puzzle,
        solutions = outcome.solutions,
        backtracks = outcome.backtracks,
        "candidate tried"
    );

    if let (true, Some(difficulty)) = (
        config.policy.accepts(outcome.solutions),
        outcome.difficulty,
    ) {
        report.accepted.push(FoundPuzzle {
            puzzle,
            solutions: outcome.solutions,
            difficulty,
        });
    }
    Ok(())
}
