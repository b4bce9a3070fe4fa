//! Alphametics
//!
//! Solves alphametic addition puzzles (`SEND + MORE = MONEY`) in bases 2 to 16 with a
//! column-wise backtracking search, and searches word lists for new puzzles with a chosen
//! number of solutions.
//!
//! # Quick Start
//!
//! ```rust
//! use alphametics::core::Puzzle;
//! use alphametics::solver::Solver;
//!
//! let puzzle = Puzzle::parse("SEND + MORE = MONEY", 10).unwrap();
//! let (outcome, solutions) = Solver::new(&puzzle).solutions();
//!
//! assert_eq!(outcome.solutions, 1);
//! println!("{} (difficulty {:?})", solutions[0], outcome.difficulty);
//! ```

// Core domain types
pub mod core;

// Assignment search
pub mod solver;

// Puzzle search over word lists
pub mod finder;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
