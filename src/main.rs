//! Sedecordle Solver - CLI
//!
//! Recommends guesses for sixteen simultaneous Wordle boards by maximizing the
//! information summed over all unsolved boards.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sedecordle_solver::{
    commands::{
        DEFAULT_MAX_ROUNDS, PLAY_ROUNDS, analyze_word, pick_targets, run_play, run_simulation,
    },
    core::Word,
    output::{print_analysis_result, print_simulation_result},
    solver::{
        EngineConfig, Session,
        config::{DEFAULT_PUZZLES, DEFAULT_TABLE_CELLS},
    },
    wordlists::{Corpus, loader::load_from_file},
};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "sedecordle_solver",
    about = "Sedecordle solver: one guess stream, sixteen boards, maximum aggregate entropy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list, one word per line
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Allowed guesses, one word per line (default: the answer list)
    #[arg(short, long, global = true)]
    guesses: Option<PathBuf>,

    /// Number of simultaneous puzzles
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_PUZZLES,
        value_parser = parse_puzzle_count
    )]
    puzzles: usize,

    /// Only search the first N guesses while candidate sets are large
    #[arg(long, global = true)]
    guess_limit: Option<usize>,

    /// Apply --guess-limit while the largest candidate set exceeds this
    #[arg(long, global = true, default_value_t = 0)]
    limit_above: usize,

    /// Cell budget of the precomputed pattern table
    #[arg(long, global = true, default_value_t = DEFAULT_TABLE_CELLS)]
    table_cells: usize,

    /// Worker threads for scoring (default: all cores)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant for a live game (default)
    Play,

    /// Play a whole game against random hidden answers
    Simulate {
        /// Seed for picking the hidden answers
        #[arg(short, long)]
        seed: Option<u64>,

        /// Stop after this many rounds
        #[arg(short, long, default_value_t = DEFAULT_MAX_ROUNDS)]
        max_rounds: usize,
    },

    /// Analyze a specific guess against a fresh game
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn parse_puzzle_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("at least one puzzle is needed".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_puzzle_count(self.puzzles)
            .with_guess_limit(self.guess_limit)
            .with_limit_above(self.limit_above)
            .with_table_cells(self.table_cells)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_list(path: &Path, what: &str) -> Result<Vec<Word>> {
    load_from_file(path).with_context(|| format!("reading {what} from {}", path.display()))
}

/// Load the corpus from the --answers and --guesses files
fn load_corpus(cli: &Cli) -> Result<Corpus> {
    let answers_path = cli
        .answers
        .as_deref()
        .context("an answer list is required (--answers <FILE>)")?;
    let answers = load_list(answers_path, "answers")?;

    let corpus = match &cli.guesses {
        Some(path) => Corpus::new(answers, load_list(path, "guesses")?),
        None => Corpus::answers_only(answers),
    };
    Ok(corpus?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring the thread pool")?;
    }

    let corpus = load_corpus(&cli)?;
    log::info!(
        "loaded {} answers and {} guesses",
        corpus.answers().len(),
        corpus.guesses().len()
    );
    let mut session = Session::new(&corpus, cli.engine_config());

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            run_play(&mut session, &mut io::stdin().lock(), PLAY_ROUNDS)?;
        }
        Commands::Simulate { seed, max_rounds } => {
            let targets = pick_targets(&corpus, cli.puzzles, seed);
            println!(
                "Simulating {} puzzles against random answers{}...",
                targets.len(),
                seed.map_or_else(String::new, |s| format!(" (seed {s})"))
            );
            let result = run_simulation(&mut session, &targets, max_rounds)?;
            print_simulation_result(&result);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &session)?;
            print_analysis_result(&result);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzle_count_must_be_positive() {
        assert!(Cli::try_parse_from(["sedecordle_solver", "--puzzles", "0", "play"]).is_err());
        assert!(Cli::try_parse_from(["sedecordle_solver", "--puzzles", "x"]).is_err());

        let cli = Cli::try_parse_from(["sedecordle_solver", "-p", "4", "analyze", "crane"])
            .unwrap();
        assert_eq!(cli.engine_config().puzzle_count, 4);

        let cli = Cli::try_parse_from(["sedecordle_solver"]).unwrap();
        assert_eq!(cli.puzzles, DEFAULT_PUZZLES);
    }
}
