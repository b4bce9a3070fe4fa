//! Formatting utilities for terminal output

use crate::commands::FindResult;
use crate::core::{Difficulty, Puzzle, Solution, Word};
use crate::finder::{AcceptPolicy, FoundPuzzle};

/// One accepted puzzle as the finder reports it
///
/// Under `AtLeastOne` the line starts with the solution count in parentheses.
#[must_use]
pub fn format_found(found: &FoundPuzzle, policy: AcceptPolicy) -> String {
    let prefix = match policy {
        AcceptPolicy::ExactlyOne => String::new(),
        AcceptPolicy::AtLeastOne => format!("({}) ", found.solutions),
    };
    format!("{prefix}{}  difficulty: {}", found.puzzle, found.difficulty)
}

/// Closing lines of a finder run
#[must_use]
pub fn find_summary(result: &FindResult) -> [String; 2] {
    [
        format!("Elapsed time was {} seconds.", result.elapsed.as_secs()),
        format!(
            "Found {} good puzzles after searching {}",
            result.report.accepted.len(),
            result.report.tried
        ),
    ]
}

/// Summands stacked over the sum, right-justified, with a rule above the sum
///
/// ```text
///     SEND
///  +  MORE
///    -----
///    MONEY
/// ```
#[must_use]
pub fn column_layout(puzzle: &Puzzle) -> Vec<String> {
    let width = puzzle.sum().len().max(puzzle.longest_summand());
    let last = puzzle.summands().len() - 1;

    let mut lines: Vec<String> = puzzle
        .summands()
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let sign = if i == last { '+' } else { ' ' };
            format!(" {sign} {:>width$}", word.text())
        })
        .collect();
    lines.push(format!("   {}", "-".repeat(width)));
    lines.push(format!("   {:>width$}", puzzle.sum().text()));
    lines
}

/// A word with each letter replaced by its digit (`A`-`F` above nine)
#[must_use]
pub fn substitute(word: &Word, solution: &Solution) -> String {
    word.as_bytes()
        .iter()
        .map(|&letter| {
            solution
                .digit_of(letter)
                .and_then(|d| char::from_digit(u32::from(d), 16))
                .map_or('?', |c| c.to_ascii_uppercase())
        })
        .collect()
}

/// The whole equation with digits substituted
#[must_use]
pub fn substituted_equation(puzzle: &Puzzle, solution: &Solution) -> String {
    let summands: Vec<String> = puzzle
        .summands()
        .iter()
        .map(|w| substitute(w, solution))
        .collect();
    format!("{} = {}", summands.join(" + "), substitute(puzzle.sum(), solution))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Difficulty as a bar of `width` cells
#[must_use]
pub fn difficulty_bar(difficulty: Difficulty, width: usize) -> String {
    create_progress_bar(
        f64::from(difficulty.level()),
        f64::from(Difficulty::HARDEST.level()),
        width,
    )
}
