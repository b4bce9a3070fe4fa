//! Prompted line mode
//!
//! Asks for the base, the words and the search options one line at a time, then prints plain
//! results. Reads from any `BufRead` and writes to any `Write` so it can be driven by tests.

use super::find::run_find;
use super::solve::solve_parsed;
use crate::core::{Difficulty, MAX_BASE, MIN_BASE, Puzzle, Word};
use crate::finder::{AcceptPolicy, FindConfig, SumPolicy};
use crate::output::formatters::{find_summary, format_found};
use crate::solver::SearchMode;
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

/// What the prompts lead to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Solve,
    Find,
}

/// Run the prompt flow for `mode`
///
/// # Errors
///
/// Returns an error on I/O failure, input ending early, a non-numeric summand count, an
/// invalid word, or settings the finder rejects.
pub fn run_prompt<R: BufRead, W: Write>(
    mode: PromptMode,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    match mode {
        PromptMode::Solve => prompt_solve(input, output),
        PromptMode::Find => prompt_find(input, output),
    }
}

fn prompt_solve<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let base = prompt_base(input, output)?;

    writeln!(output, "Input summands one per line.  Press return when done.")?;
    let summands = read_words(input)?;

    writeln!(output, "\nInput the sum.")?;
    let line = read_line(input)?.context("input ended before the sum was given")?;
    let sum = Word::new(&line)?;

    let puzzle = Puzzle::new(summands, sum, base)?;
    let result = solve_parsed(puzzle, SearchMode::All);

    for solution in &result.solutions {
        writeln!(output, "{solution}")?;
    }
    // A puzzle rejected before searching is rated 0
    let difficulty = result.outcome.difficulty.map_or(0, Difficulty::level);
    writeln!(output, "Difficulty: {difficulty}")?;
    Ok(())
}

fn prompt_find<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let base = prompt_base(input, output)?;

    writeln!(output, "Input the minimum number of summands.")?;
    let min_summands = read_count(input)?;
    writeln!(output, "Input the maximum number of summands.")?;
    let max_summands = read_count(input)?;

    writeln!(output, "Disallow repetition of summands (Y or N)?")?;
    let disallow_repeats = read_yes(input)?;
    writeln!(output, "Only puzzles with one solution(Y or N)?")?;
    let exactly_one = read_yes(input)?;
    writeln!(output, "Use only the first word for the sum(Y or N)?")?;
    let first_sum_only = read_yes(input)?;

    writeln!(output, "Input words one per line.  Press return when done.")?;
    let words = read_words(input)?;

    let config = FindConfig {
        base,
        min_summands,
        max_summands,
        policy: if exactly_one {
            AcceptPolicy::ExactlyOne
        } else {
            AcceptPolicy::AtLeastOne
        },
        allow_repeats: !disallow_repeats,
        sums: if first_sum_only {
            SumPolicy::FirstOnly
        } else {
            SumPolicy::Every
        },
        ..FindConfig::default()
    };
    let result = run_find(&words, config, false)?;

    for found in &result.report.accepted {
        writeln!(output, "{}", format_found(found, result.config.policy))?;
    }
    for line in find_summary(&result) {
        writeln!(output, "{line}")?;
    }
    Ok(())
}

/// Ask for a base until one in range is given
fn prompt_base<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u8> {
    loop {
        writeln!(
            output,
            "Input the base to solve the puzzle in ({MIN_BASE} to {MAX_BASE})."
        )?;
        output.flush()?;

        let line = read_line(input)?.context("input ended before a base was given")?;
        if let Ok(base) = line.trim().parse::<u8>() {
            if (MIN_BASE..=MAX_BASE).contains(&base) {
                return Ok(base);
            }
        }
    }
}

/// Words one per line until a blank line or end of input
fn read_words<R: BufRead>(input: &mut R) -> Result<Vec<Word>> {
    let mut words = Vec::new();
    while let Some(line) = read_line(input)? {
        if line.trim().is_empty() {
            break;
        }
        words.push(Word::new(&line)?);
    }
    Ok(words)
}

fn read_count<R: BufRead>(input: &mut R) -> Result<usize> {
    let line = read_line(input)?.context("input ended before a summand count was given")?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        bail!("expected a number of summands");
    }
    trimmed
        .parse()
        .with_context(|| format!("'{trimmed}' is not a number of summands"))
}

fn read_yes<R: BufRead>(input: &mut R) -> Result<bool> {
    let line = read_line(input)?.context("input ended before a Y or N answer")?;
    Ok(line.trim_start().starts_with(['y', 'Y']))
}

/// One line without its terminator, or `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(mode: PromptMode, script: &str) -> Result<String> {
        let mut input = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        run_prompt(mode, &mut input, &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn solve_prints_solution_and_difficulty() {
        let out = run(PromptMode::Solve, "10\nI\nBB\n\nILL\n").unwrap();
        assert!(out.contains("B=9 I=1 L=0\n"));
        assert!(out.contains("Difficulty: 1\n"));
    }

    #[test]
    fn infeasible_puzzle_rated_zero() {
        let out = run(PromptMode::Solve, "10\nAB\nC\n\nD\n").unwrap();
        assert!(out.ends_with("\nInput the sum.\nDifficulty: 0\n"));
    }

    #[test]
    fn base_asked_until_valid() {
        let script = "1\nseventeen\n20\n10\nI\nBB\n\nILL\n";
        let out = run(PromptMode::Solve, script).unwrap();
        assert_eq!(out.matches("Input the base").count(), 4);
        assert!(out.contains("B=9 I=1 L=0"));
    }

    #[test]
    fn solve_rejects_bad_word() {
        let err = run(PromptMode::Solve, "10\nS3ND\n").unwrap_err();
        assert!(err.to_string().contains("S3ND"));
    }

    #[test]
    fn solve_without_summands_is_error() {
        assert!(run(PromptMode::Solve, "10\n\nILL\n").is_err());
    }

    #[test]
    fn input_ending_early_is_error() {
        assert!(run(PromptMode::Solve, "10\nI\nBB\n\n").is_err());
        assert!(run(PromptMode::Find, "").is_err());
    }

    #[test]
    fn find_follows_question_order() {
        let script = "10\n2\n2\nN\nY\nN\nSEND\nMORE\nMONEY\n\n";
        let out = run(PromptMode::Find, script).unwrap();

        let repeat = out.find("Disallow repetition").unwrap();
        let one = out.find("Only puzzles with one solution").unwrap();
        let first = out.find("Use only the first word").unwrap();
        assert!(repeat < one && one < first);

        assert!(out.contains("SEND + MORE = MONEY  difficulty: "));
        assert!(out.contains("Elapsed time was "));
        assert!(out.contains("Found "));
        assert!(out.contains(" good puzzles after searching "));
    }

    #[test]
    fn find_any_solution_prefixes_count() {
        let script = "10\n2\n2\ny\nn\ny\nC\nA\nB\n\n";
        let out = run(PromptMode::Find, script).unwrap();
        // Only A + B = C is tried, and it has many solutions.
        assert!(out.contains(") A + B = C  difficulty: "));
        assert!(out.contains("Found 1 good puzzles after searching 1\n"));
    }

    #[test]
    fn find_rejects_non_numeric_count() {
        assert!(run(PromptMode::Find, "10\ntwo\n").is_err());
    }
}
