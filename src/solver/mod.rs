//! Alphametic assignment search
//!
//! `Solver` runs the column-wise backtracking search over one puzzle. The supporting modules
//! lay the puzzle out in columns, bound the carries, and track letter ownership.

mod bounds;
mod engine;
pub mod generator;
mod layout;
mod letters;

pub use bounds::CarryPruning;
pub use engine::{SearchMode, SearchOptions, SolveOutcome, Solver};
pub use generator::{GeneratedPuzzle, PuzzleShape, random_puzzle};
pub use layout::{Layout, LetterId};
