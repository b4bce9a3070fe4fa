//! Property tests for the puzzle finder

use alphametics::core::Word;
use alphametics::finder::{AcceptPolicy, FindConfig, FindReport, find_puzzles};
use alphametics::solver::Solver;
use proptest::prelude::*;

fn word_list() -> impl Strategy<Value = Vec<Word>> {
    prop::collection::vec("[A-F]{1,3}", 2..=4).prop_map(|words| {
        words
            .iter()
            .map(|w| Word::new(w).expect("letters only"))
            .collect()
    })
}

fn config() -> impl Strategy<Value = FindConfig> {
    (1usize..=2, any::<bool>(), 4u8..=10).prop_map(|(min_summands, allow_repeats, base)| {
        FindConfig {
            base,
            min_summands,
            max_summands: 2,
            allow_repeats,
            parallel: false,
            ..FindConfig::default()
        }
    })
}

fn run(words: &[Word], config: &FindConfig) -> FindReport {
    find_puzzles(words, config).expect("configuration is valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn letter_filter_only_saves_work(words in word_list(), config in config()) {
        let filtered = run(&words, &config);
        let unfiltered = run(&words, &FindConfig { letter_filter: false, ..config });

        prop_assert_eq!(&filtered.accepted, &unfiltered.accepted);
        prop_assert!(filtered.tried <= unfiltered.tried);
    }

    #[test]
    fn parallel_matches_sequential(words in word_list(), config in config()) {
        let sequential = run(&words, &config);
        let parallel = run(&words, &FindConfig { parallel: true, ..config });
        prop_assert_eq!(sequential, parallel);
    }

    #[test]
    fn exactly_one_within_at_least_one(words in word_list(), config in config()) {
        let exact = run(&words, &FindConfig { policy: AcceptPolicy::ExactlyOne, ..config.clone() });
        let any = run(&words, &FindConfig { policy: AcceptPolicy::AtLeastOne, ..config });

        prop_assert_eq!(exact.tried, any.tried);
        for found in &exact.accepted {
            prop_assert_eq!(found.solutions, 1);
            prop_assert!(any.accepted.contains(found), "{}", found);
        }
    }

    #[test]
    fn reported_counts_match_solver(words in word_list(), config in config()) {
        let report = run(&words, &FindConfig { policy: AcceptPolicy::AtLeastOne, ..config });

        for found in &report.accepted {
            let outcome = Solver::new(&found.puzzle).count();
            prop_assert!(found.solutions > 0);
            prop_assert_eq!(found.solutions, outcome.solutions);
            prop_assert_eq!(Some(found.difficulty), outcome.difficulty);
        }
    }
}
