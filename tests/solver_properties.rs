//! Property tests for the assignment search
//!
//! Generated puzzles carry a planted solution; small random puzzles are checked against an
//! exhaustive search over every injective letter-to-digit mapping.

use alphametics::core::{Puzzle, Solution, Word};
use alphametics::solver::{
    CarryPruning, GeneratedPuzzle, PuzzleShape, SearchMode, SearchOptions, Solver, random_puzzle,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn generated_puzzle() -> impl Strategy<Value = GeneratedPuzzle> {
    (2u8..=10, any::<u64>()).prop_map(|(base, seed)| {
        let shape = PuzzleShape {
            base,
            summands: 1..=2,
            summand_len: 1..=3,
        };
        random_puzzle(&mut StdRng::seed_from_u64(seed), &shape).expect("shape is valid")
    })
}

fn small_puzzle() -> impl Strategy<Value = Puzzle> {
    (
        prop::collection::vec("[A-D]{1,3}", 1..=3),
        "[A-D]{1,4}",
        2u8..=6,
    )
        .prop_map(|(summands, sum, base)| {
            let summands = summands
                .iter()
                .map(|w| Word::new(w).expect("letters only"))
                .collect();
            Puzzle::new(summands, Word::new(sum).expect("letters only"), base)
                .expect("base and summand count in range")
        })
}

fn all_solutions(puzzle: &Puzzle, pruning: CarryPruning) -> Vec<Solution> {
    let options = SearchOptions {
        mode: SearchMode::All,
        pruning,
    };
    Solver::with_options(puzzle, options).solutions().1
}

/// Every injective mapping of the puzzle's letters that solves it
fn brute_force(puzzle: &Puzzle) -> HashSet<Solution> {
    let mask = puzzle.letter_mask();
    let letters: Vec<u8> = (b'A'..=b'Z')
        .filter(|l| mask & (1 << (l - b'A')) != 0)
        .collect();

    let mut found = HashSet::new();
    assign(puzzle, &letters, &mut Vec::new(), &mut found);
    found
}

fn assign(puzzle: &Puzzle, letters: &[u8], digits: &mut Vec<u8>, found: &mut HashSet<Solution>) {
    if digits.len() == letters.len() {
        let candidate = Solution::new(
            letters
                .iter()
                .copied()
                .zip(digits.iter().copied())
                .collect(),
        );
        if candidate.satisfies(puzzle) {
            found.insert(candidate);
        }
        return;
    }
    for digit in 0..puzzle.base() {
        if !digits.contains(&digit) {
            digits.push(digit);
            assign(puzzle, letters, digits, found);
            digits.pop();
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn planted_solution_is_found(generated in generated_puzzle()) {
        let solutions = all_solutions(&generated.puzzle, CarryPruning::Tight);
        prop_assert!(solutions.contains(&generated.planted));
    }

    #[test]
    fn every_solution_satisfies_puzzle(generated in generated_puzzle()) {
        let solutions = all_solutions(&generated.puzzle, CarryPruning::Tight);
        let distinct: HashSet<&Solution> = solutions.iter().collect();

        prop_assert_eq!(distinct.len(), solutions.len());
        for solution in &solutions {
            prop_assert!(solution.satisfies(&generated.puzzle), "{}", solution);
        }
    }

    #[test]
    fn loose_pruning_finds_same_solutions(generated in generated_puzzle()) {
        let tight: HashSet<Solution> =
            all_solutions(&generated.puzzle, CarryPruning::Tight).into_iter().collect();
        let loose: HashSet<Solution> =
            all_solutions(&generated.puzzle, CarryPruning::Loose).into_iter().collect();
        prop_assert_eq!(tight, loose);
    }

    #[test]
    fn repeated_runs_agree(generated in generated_puzzle()) {
        let solver = Solver::new(&generated.puzzle);
        prop_assert_eq!(solver.count(), solver.count());
    }

    #[test]
    fn first_mode_finds_one_of_all(generated in generated_puzzle()) {
        let all = all_solutions(&generated.puzzle, CarryPruning::Tight);
        let options = SearchOptions::new(SearchMode::First);
        let (outcome, first) = Solver::with_options(&generated.puzzle, options).solutions();

        prop_assert_eq!(outcome.solutions, 1);
        prop_assert_eq!(first.len(), 1);
        prop_assert!(all.contains(&first[0]));
    }

    #[test]
    fn matches_exhaustive_search(puzzle in small_puzzle()) {
        let expected = brute_force(&puzzle);
        let (outcome, solutions) = Solver::new(&puzzle).solutions();
        let found: HashSet<Solution> = solutions.into_iter().collect();

        prop_assert_eq!(outcome.solutions, expected.len());
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn infeasible_puzzles_skip_search(puzzle in small_puzzle()) {
        let outcome = Solver::new(&puzzle).count();
        if puzzle.feasibility().is_err() {
            prop_assert_eq!(outcome.solutions, 0);
            prop_assert_eq!(outcome.backtracks, 0);
            prop_assert!(outcome.infeasible.is_some());
            prop_assert_eq!(outcome.difficulty, None);
        } else {
            prop_assert!(outcome.infeasible.is_none());
            prop_assert!(outcome.difficulty.is_some());
        }
    }
}
