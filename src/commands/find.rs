//! Puzzle search command
//!
//! Runs the finder over a word list with a progress bar and times the run.

use crate::core::Word;
use crate::finder::{FindConfig, FindConfigError, FindReport, find_puzzles_with, unit_count};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Result of a finder run
pub struct FindResult {
    pub report: FindReport,
    pub config: FindConfig,
    pub word_count: usize,
    pub elapsed: Duration,
}

/// Search `words` for puzzles, optionally drawing a progress bar on stderr
///
/// # Errors
///
/// Returns `FindConfigError` if the configuration is invalid for this word list.
pub fn run_find(
    words: &[Word],
    config: FindConfig,
    show_progress: bool,
) -> Result<FindResult, FindConfigError> {
    config.validate(words.len())?;

    let pb = if show_progress {
        let pb = ProgressBar::new(unit_count(words.len(), &config) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let report = find_puzzles_with(words, &config, |unit| {
        pb.set_message(format!("{} summands = {}", unit.summands, unit.sum));
        pb.inc(1);
    })?;
    let elapsed = start.elapsed();

    pb.finish_and_clear();

    Ok(FindResult {
        report,
        config,
        word_count: words.len(),
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::AcceptPolicy;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn find_returns_report() {
        let list = ["SEND", "MORE", "MONEY", "MOST", "EARNS"];
        let words = words_from_slice(&list).unwrap();
        let result = run_find(&words, FindConfig::default(), false).unwrap();

        assert_eq!(result.word_count, 5);
        assert!(result.report.tried > 0);
        assert!(
            result
                .report
                .accepted
                .iter()
                .any(|p| p.to_string() == "SEND + MORE = MONEY")
        );
    }

    #[test]
    fn find_keeps_config() {
        let words = words_from_slice(&["I", "BB", "ILL"]).unwrap();
        let config = FindConfig {
            policy: AcceptPolicy::AtLeastOne,
            ..FindConfig::default()
        };
        let result = run_find(&words, config.clone(), false).unwrap();
        assert_eq!(result.config, config);
    }

    #[test]
    fn find_rejects_invalid_config() {
        let words = words_from_slice(&["I", "BB", "ILL"]).unwrap();
        let config = FindConfig {
            min_summands: 3,
            max_summands: 2,
            ..FindConfig::default()
        };
        assert!(run_find(&words, config, false).is_err());
    }
}
