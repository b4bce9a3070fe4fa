//! Alphametics - CLI
//!
//! Solves alphametic addition puzzles and searches word lists for new ones, with TUI and CLI
//! modes.

use alphametics::{
    commands::{
        BenchmarkConfig, PromptMode, SolveConfig, run_benchmark, run_find, run_prompt,
        solve_puzzle,
    },
    core::{MAX_BASE, MIN_BASE, Word},
    finder::{AcceptPolicy, FindConfig, SumPolicy},
    output::{print_benchmark_result, print_find_result, print_solve_result},
    solver::SearchMode,
    wordlists::{
        CLASSIC,
        loader::{load_from_file, words_from_slice},
    },
};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "alphametics",
    about = "Solve alphametic addition puzzles and search word lists for new ones",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Numeric base to work in (2 to 16)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 10,
        value_parser = clap::value_parser!(u8).range(i64::from(MIN_BASE)..=i64::from(MAX_BASE))
    )]
    base: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Solve a puzzle: summand words followed by the sum, or one equation like SEND+MORE=MONEY
    Solve {
        /// Summands then sum
        #[arg(required = true)]
        words: Vec<String>,

        /// Stop at the first solution
        #[arg(short, long)]
        first: bool,

        /// Show the column layout, digit substitutions and backtrack count
        #[arg(short, long)]
        verbose: bool,
    },

    /// Search a list of words for puzzles
    Find {
        /// Words to combine (ignored when --wordlist is given)
        words: Vec<String>,

        /// Word list: 'classic' for the built-in list, or a path to a file with one word per line
        #[arg(short = 'w', long)]
        wordlist: Option<String>,

        /// Minimum number of summands
        #[arg(long, default_value_t = 2)]
        min: usize,

        /// Maximum number of summands (default: number of words - 1)
        #[arg(long)]
        max: Option<usize>,

        /// Report puzzles with any number of solutions, not just exactly one
        #[arg(long)]
        any: bool,

        /// Don't use the same word twice among the summands
        #[arg(long)]
        no_repeats: bool,

        /// Only try the first word as the sum
        #[arg(long)]
        first_sum: bool,

        /// Search on one thread
        #[arg(long)]
        sequential: bool,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,

        /// Show the search settings
        #[arg(short, long)]
        verbose: bool,
    },

    /// Answer prompts line by line instead of passing arguments
    Prompt {
        #[arg(value_enum)]
        mode: PromptKind,
    },

    /// Benchmark the solver on random solvable puzzles
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value_t = 200)]
        count: usize,

        /// Random seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PromptKind {
    Solve,
    Find,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.base),
        Commands::Solve {
            words,
            first,
            verbose,
        } => run_solve_command(words, cli.base, first, verbose),
        Commands::Find {
            words,
            wordlist,
            min,
            max,
            any,
            no_repeats,
            first_sum,
            sequential,
            quiet,
            verbose,
        } => {
            let words = load_words(&words, wordlist.as_deref())?;
            let config = FindConfig {
                base: cli.base,
                min_summands: min,
                max_summands: max.unwrap_or_else(|| words.len().saturating_sub(1).max(min)),
                policy: if any {
                    AcceptPolicy::AtLeastOne
                } else {
                    AcceptPolicy::ExactlyOne
                },
                allow_repeats: !no_repeats,
                sums: if first_sum {
                    SumPolicy::FirstOnly
                } else {
                    SumPolicy::Every
                },
                parallel: !sequential,
                ..FindConfig::default()
            };
            run_find_command(&words, config, quiet, verbose)
        }
        Commands::Prompt { mode } => {
            let mode = match mode {
                PromptKind::Solve => PromptMode::Solve,
                PromptKind::Find => PromptMode::Find,
            };
            run_prompt(mode, &mut io::stdin().lock(), &mut io::stdout().lock())
        }
        Commands::Benchmark { count, seed } => run_benchmark_command(count, seed, cli.base),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default)
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Words for the finder from `--wordlist` or the command line
fn load_words(args: &[String], wordlist: Option<&str>) -> Result<Vec<Word>> {
    let words = match wordlist {
        Some("classic") => words_from_slice(CLASSIC)?,
        Some(path) => load_from_file(path)?,
        None => words_from_slice(args).context("Invalid word on the command line")?,
    };

    if words.len() < 2 {
        bail!("Give at least two words to search (or --wordlist classic)");
    }
    info!(words = words.len(), "word list loaded");
    Ok(words)
}

fn run_solve_command(words: Vec<String>, base: u8, first: bool, verbose: bool) -> Result<()> {
    let config = SolveConfig {
        mode: if first {
            SearchMode::First
        } else {
            SearchMode::All
        },
        ..SolveConfig::new(words, base)
    };
    let result = solve_puzzle(&config)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_find_command(words: &[Word], config: FindConfig, quiet: bool, verbose: bool) -> Result<()> {
    let result = run_find(words, config, !quiet)?;
    print_find_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(count: usize, seed: u64, base: u8) -> Result<()> {
    println!("Running benchmark on {count} random puzzles in base {base} (seed {seed})...");

    let mut config = BenchmarkConfig::new(count, seed);
    config.shape.base = base;
    let result = run_benchmark(&config)?;

    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(base: u8) -> Result<()> {
    use alphametics::interactive::{App, run_tui};

    run_tui(App::new(base))
}
