//! Display functions for command results

use super::formatters::{
    column_layout, create_progress_bar, difficulty_bar, find_summary, format_found,
    substituted_equation,
};
use crate::commands::{BenchmarkResult, FindResult, SolveResult};
use crate::finder::{AcceptPolicy, SumPolicy};
use colored::Colorize;

/// Print the result of solving a puzzle
///
/// Solutions go one per line as `LETTER=digit` pairs, followed by `Difficulty: n`.
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  {}",
        result.puzzle.to_string().bright_yellow().bold(),
        format!("(base {})", result.puzzle.base()).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!();
        for line in column_layout(&result.puzzle) {
            println!("{line}");
        }
        println!();
    }

    if let Some(reason) = &result.outcome.infeasible {
        println!("{}", format!("No solutions: {reason}").red().bold());
        return;
    }

    for solution in &result.solutions {
        println!("{solution}");
        if verbose {
            println!(
                "  {}",
                substituted_equation(&result.puzzle, solution).bright_black()
            );
        }
    }

    if let Some(difficulty) = result.outcome.difficulty {
        println!("Difficulty: {difficulty}");
        if verbose {
            println!(
                "  [{}] {} ({} backtracks)",
                difficulty_bar(difficulty, 10).green(),
                difficulty.label(),
                result.outcome.backtracks
            );
        }
    }

    println!();
    match result.outcome.solutions {
        0 => println!("{}", "No solutions".red().bold()),
        1 => println!("{}", "Exactly one solution".green().bold()),
        n => println!("{}", format!("{n} solutions").yellow().bold()),
    }
}

/// Print the result of a puzzle search
pub fn print_find_result(result: &FindResult, verbose: bool) {
    let config = &result.config;

    if verbose {
        println!("\n{}", "═".repeat(60).cyan());
        println!(" {} ", "PUZZLE SEARCH".bright_cyan().bold());
        println!("{}", "═".repeat(60).cyan());
        println!("   Words:           {}", result.word_count);
        println!("   Base:            {}", config.base);
        println!(
            "   Summands:        {} to {}",
            config.min_summands, config.max_summands
        );
        println!(
            "   Solutions:       {}",
            match config.policy {
                AcceptPolicy::ExactlyOne => "exactly one",
                AcceptPolicy::AtLeastOne => "at least one",
            }
        );
        println!(
            "   Repeated words:  {}",
            if config.allow_repeats { "allowed" } else { "no" }
        );
        println!(
            "   Sums:            {}",
            match config.sums {
                SumPolicy::Every => "every word",
                SumPolicy::FirstOnly => "first word only",
            }
        );
        println!();
    }

    for found in &result.report.accepted {
        let line = format_found(found, config.policy);
        if found.solutions == 1 {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }

    let [elapsed, totals] = find_summary(result);
    println!("{elapsed}");
    println!("{}", totals.bright_cyan().bold());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles solved:   {}", result.total_puzzles);
    println!(
        "   Unique:           {}",
        format!("{}", result.unique).green()
    );
    println!(
        "   Planted found:    {}",
        if result.planted_found == result.total_puzzles {
            format!("{}", result.planted_found).green()
        } else {
            format!("{}", result.planted_found).red().bold()
        }
    );
    println!("   Total solutions:  {}", result.total_solutions);
    println!(
        "   Backtracks:       {} total, {} max",
        result.total_backtracks,
        format!("{}", result.max_backtracks).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.total_puzzles == 0 {
        return;
    }
    let total = result.total_puzzles as f64;

    println!("\n📈 {}", "Difficulty:".bright_cyan().bold());
    for (i, &count) in result.difficulty.iter().enumerate() {
        let pct = count as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {}: {} {count:4} ({pct:5.1}%)", i + 1, bar.green());
    }

    println!("\n📈 {}", "Solutions per puzzle:".bright_cyan().bold());
    for (&solutions, &count) in &result.solution_counts {
        let pct = count as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {solutions:>4}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
