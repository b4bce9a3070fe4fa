//! Puzzle finder
//!
//! Tries every (sum, summand multiset) combination drawn from a word list and keeps those
//! whose solution count the acceptance policy allows.

mod config;
mod enumerator;
mod letter_count;

pub use config::{AcceptPolicy, FindConfig, FindConfigError, SumPolicy};
pub use enumerator::{
    FindReport, FoundPuzzle, UnitProgress, find_puzzles, find_puzzles_with, unit_count,
};
pub use letter_count::letter_count;
