//! End-to-end scenarios through the command layer

use alphametics::commands::{PromptMode, SolveConfig, run_find, run_prompt, solve_puzzle};
use alphametics::core::{Difficulty, Infeasibility};
use alphametics::finder::{FindConfig, SumPolicy};
use alphametics::wordlists::CLASSIC;
use alphametics::wordlists::loader::words_from_slice;
use std::io::Cursor;

fn solve(args: &[&str]) -> alphametics::commands::SolveResult {
    let args = args.iter().map(ToString::to_string).collect();
    solve_puzzle(&SolveConfig::new(args, 10)).unwrap()
}

#[test]
fn i_bb_ill_is_easy_and_unique() {
    let result = solve(&["I", "BB", "ILL"]);

    assert!(result.outcome.is_unique());
    assert_eq!(result.solutions[0].to_string(), "B=9 I=1 L=0");
    assert_eq!(result.outcome.difficulty, Some(Difficulty::EASIEST));
}

#[test]
fn send_more_money_from_equation() {
    let result = solve(&["SEND+MORE=MONEY"]);

    assert_eq!(result.outcome.solutions, 1);
    assert_eq!(
        result.solutions[0].to_string(),
        "D=7 E=5 M=1 N=6 O=0 R=8 S=9 Y=2"
    );
}

/// Backtrack counts and difficulty levels for known puzzles.
/// Format: (equation, backtracks, level)
const KNOWN_EFFORT: &[(&str, u64, u8)] = &[
    ("I + BB = ILL", 4, 1),
    ("SEND + MORE = MONEY", 74, 1),
    ("TO + GO = OUT", 101, 2),
    ("SEVEN + SEVEN + SIX = TWENTY", 366, 2),
    ("CROSS + ROADS = DANGER", 2164, 3),
    ("DONALD + GERALD = ROBERT", 5193, 4),
];

#[test]
fn backtracks_match_known_counts() {
    for &(equation, backtracks, level) in KNOWN_EFFORT {
        let result = solve(&[equation]);

        assert_eq!(result.outcome.backtracks, backtracks, "{equation}");
        assert_eq!(
            result.outcome.difficulty.map(Difficulty::level),
            Some(level),
            "{equation}"
        );
    }
}

#[test]
fn short_sum_rejected_without_search() {
    let result = solve(&["AB", "C", "D"]);

    assert_eq!(result.outcome.solutions, 0);
    assert_eq!(result.outcome.backtracks, 0);
    assert!(matches!(
        result.outcome.infeasible,
        Some(Infeasibility::SummandTooLong { .. })
    ));
}

#[test]
fn eleven_letters_in_base_ten_rejected_without_search() {
    let result = solve(&["ABCDEF", "GHIJK", "ABCDEK"]);

    assert_eq!(result.outcome.solutions, 0);
    assert_eq!(
        result.outcome.infeasible,
        Some(Infeasibility::TooManyLetters {
            letters: 11,
            base: 10
        })
    );
}

#[test]
fn finder_over_five_words() {
    let list = ["SEND", "MORE", "MONEY", "MOST", "EARNS"];
    let words = words_from_slice(&list).unwrap();
    let config = FindConfig {
        min_summands: 2,
        max_summands: 2,
        ..FindConfig::default()
    };
    let result = run_find(&words, config, false).unwrap();

    assert_eq!(result.word_count, 5);
    assert!(
        result
            .report
            .accepted
            .iter()
            .any(|found| found.to_string() == "SEND + MORE = MONEY")
    );
}

#[test]
fn classic_list_with_first_sum() {
    let words = words_from_slice(CLASSIC).unwrap();
    let config = FindConfig {
        sums: SumPolicy::FirstOnly,
        ..FindConfig::default()
    };
    let result = run_find(&words, config, false).unwrap();

    assert!(result.report.tried > 0);
    for found in &result.report.accepted {
        assert_eq!(found.puzzle.sum(), &words[0]);
        assert_eq!(found.solutions, 1);
    }
}

#[test]
fn prompt_find_prints_counts() {
    let script = "10\n2\n2\nN\nY\nN\nSEND\nMORE\nMONEY\n\n";
    let mut output = Vec::new();
    run_prompt(PromptMode::Find, &mut Cursor::new(script), &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("SEND + MORE = MONEY  difficulty: "));
    assert!(text.contains("Elapsed time was "));
    assert!(text.contains("good puzzles after searching"));
}
