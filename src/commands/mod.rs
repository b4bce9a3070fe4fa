//! Command implementations

pub mod benchmark;
pub mod find;
pub mod prompt;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use find::{FindResult, run_find};
pub use prompt::{PromptMode, run_prompt};
pub use solve::{SolveConfig, SolveResult, parse_puzzle_args, solve_parsed, solve_puzzle};
