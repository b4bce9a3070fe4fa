//! Puzzle solving command
//!
//! Parses a puzzle from command-line arguments and collects every solution.

use crate::core::{Puzzle, PuzzleError, Solution};
use crate::solver::{SearchMode, SearchOptions, SolveOutcome, Solver};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    /// Summands then sum, or a single equation
    pub args: Vec<String>,
    pub base: u8,
    pub mode: SearchMode,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(args: Vec<String>, base: u8) -> Self {
        Self {
            args,
            base,
            mode: SearchMode::All,
        }
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub puzzle: Puzzle,
    pub outcome: SolveOutcome,
    pub solutions: Vec<Solution>,
}

/// Build a puzzle from arguments
///
/// A single argument containing `=` is parsed as an equation (`SEND+MORE=MONEY`); otherwise
/// the last argument is the sum and the rest are summands.
///
/// # Errors
///
/// Returns `PuzzleError` if any word is invalid, there are no summands, or the base is out of
/// range.
pub fn parse_puzzle_args<S: AsRef<str>>(args: &[S], base: u8) -> Result<Puzzle, PuzzleError> {
    match args {
        [equation] if equation.as_ref().contains('=') => Puzzle::parse(equation.as_ref(), base),
        _ => Puzzle::from_tokens(args, base),
    }
}

/// Parse the configured puzzle and solve it
///
/// # Errors
///
/// Returns `PuzzleError` if the arguments don't form a valid puzzle.
pub fn solve_puzzle(config: &SolveConfig) -> Result<SolveResult, PuzzleError> {
    let puzzle = parse_puzzle_args(&config.args, config.base)?;
    Ok(solve_parsed(puzzle, config.mode))
}

/// Solve an already-built puzzle
#[must_use]
pub fn solve_parsed(puzzle: Puzzle, mode: SearchMode) -> SolveResult {
    let solver = Solver::with_options(&puzzle, SearchOptions::new(mode));
    let (outcome, solutions) = solver.solutions();

    SolveResult {
        puzzle,
        outcome,
        solutions,
    }
}
