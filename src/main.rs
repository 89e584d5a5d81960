//! Target UA - CLI
//!
//! Word game with TUI and plain CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use target_ua::{
    commands::{run_check, run_simple, run_stats},
    core::{LetterSet, PartOfSpeech},
    output::{print_round, print_stats, print_verdict},
    round::{DEFAULT_DICTIONARY, GRID_SIZE, Round, RoundConfig},
};

#[derive(Parser)]
#[command(
    name = "target_ua",
    about = "Find Ukrainian words of a given part of speech from five random letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file: one '<word> <tags>...' entry per line (defaults to the bundled sample list)
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Seed for letter and part-of-speech draws (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Number of letters in the grid
    #[arg(short = 'g', long, global = true, default_value_t = GRID_SIZE)]
    grid_size: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one line of words per round)
    Simple,

    /// Check a list of words without prompting
    Check {
        /// Allowed first letters, e.g. "рхбцм"
        #[arg(short, long)]
        letters: LetterSet,

        /// Target part of speech: noun, verb, adjective or adverb
        #[arg(short, long)]
        part: PartOfSpeech,

        /// Words to check
        words: Vec<String>,
    },

    /// Count dictionary words per letter and part of speech
    Stats {
        /// Letters to report on (whole alphabet if omitted)
        #[arg(short, long)]
        letters: Option<LetterSet>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = RoundConfig {
        dictionary: cli.dictionary,
        grid_size: cli.grid_size,
        seed: cli.seed,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple(&config),
        Commands::Check {
            letters,
            part,
            words,
        } => run_check_command(&config, letters, part, &words),
        Commands::Stats { letters } => run_stats_command(&config, letters),
    }
}

fn run_play_command(config: RoundConfig) -> Result<()> {
    use target_ua::interactive::{App, run_tui};

    let app = App::new(config)?;
    run_tui(app)
}

fn run_check_command(
    config: &RoundConfig,
    letters: LetterSet,
    part: PartOfSpeech,
    words: &[String],
) -> Result<()> {
    let round = Round::new(letters, part);
    print_round(&round);

    let words: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let verdict = run_check(config, &round, &words)?;
    print_verdict(&verdict);
    Ok(())
}

fn run_stats_command(config: &RoundConfig, letters: Option<LetterSet>) -> Result<()> {
    let letters = letters.unwrap_or_else(LetterSet::alphabet);
    let stats = run_stats(&config.dictionary, &letters)?;
    print_stats(&stats);
    Ok(())
}
