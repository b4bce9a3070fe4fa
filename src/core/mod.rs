//! Core domain types for alphametic puzzles
//!
//! Words, puzzles, solutions and the difficulty scale. Everything here is a plain value type;
//! the search itself lives in `solver`.

mod difficulty;
mod puzzle;
mod solution;
mod word;

pub use difficulty::Difficulty;
pub use puzzle::{
    Infeasibility, MAX_BASE, MAX_WORDS, MIN_BASE, Puzzle, PuzzleError, validate_base,
};
pub use solution::Solution;
pub use word::{MAX_LEN, Word, WordError};
