//! Benchmark command
//!
//! Tests solver performance across seeded random puzzles.

use crate::core::{Difficulty, PuzzleError};
use crate::solver::{PuzzleShape, Solver, random_puzzle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Benchmark settings
pub struct BenchmarkConfig {
    pub count: usize,
    pub seed: u64,
    pub shape: PuzzleShape,
}

impl BenchmarkConfig {
    #[must_use]
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            shape: PuzzleShape::default(),
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub unique: usize,
    /// Puzzles whose planted assignment was among the solutions found
    pub planted_found: usize,
    pub total_solutions: usize,
    pub total_backtracks: u64,
    pub max_backtracks: u64,
    /// Puzzles per solution count
    pub solution_counts: BTreeMap<usize, usize>,
    /// Puzzles per difficulty level, index 0 is level 1
    pub difficulty: [usize; 5],
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Generate and solve `config.count` random puzzles
///
/// # Errors
///
/// Returns `PuzzleError` if the configured shape can't produce valid puzzles.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkResult, PuzzleError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let puzzles = (0..config.count)
        .map(|_| random_puzzle(&mut rng, &config.shape))
        .collect::<Result<Vec<_>, _>>()?;

    let start = Instant::now();
    let mut unique = 0;
    let mut planted_found = 0;
    let mut total_solutions = 0;
    let mut total_backtracks = 0;
    let mut max_backtracks = 0;
    let mut solution_counts: BTreeMap<usize, usize> = BTreeMap::new();
    let mut difficulty = [0; 5];

    for generated in &puzzles {
        let mut found_planted = false;
        let outcome = Solver::new(&generated.puzzle).run(|solution| {
            found_planted |= *solution == generated.planted;
        });

        if found_planted {
            planted_found += 1;
        } else {
            warn!(puzzle = %generated.puzzle, "planted solution not found");
        }
        if outcome.is_unique() {
            unique += 1;
        }
        total_solutions += outcome.solutions;
        total_backtracks += outcome.backtracks;
        max_backtracks = max_backtracks.max(outcome.backtracks);
        *solution_counts.entry(outcome.solutions).or_insert(0) += 1;

        let level = outcome.difficulty.unwrap_or(Difficulty::EASIEST).level();
        difficulty[usize::from(level) - 1] += 1;
    }

    let duration = start.elapsed();
    let total_puzzles = puzzles.len();

    Ok(BenchmarkResult {
        total_puzzles,
        unique,
        planted_found,
        total_solutions,
        total_backtracks,
        max_backtracks,
        solution_counts,
        difficulty,
        duration,
        puzzles_per_second: total_puzzles as f64 / duration.as_secs_f64(),
    })
}
