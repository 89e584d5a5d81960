//! Simple interactive CLI mode
//!
//! Text-based rounds without the TUI: show the grid, read one line of words,
//! print the verdict.

use crate::checker::Verdict;
use crate::output::{print_round, print_verdict};
use crate::round::{Round, RoundConfig, parse_user_words};
use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Play a single round, reading the player's words from `input`
///
/// Returns `None` if `input` is already exhausted.
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded or input cannot be read.
pub fn play_round<R: Rng + ?Sized, I: BufRead>(
    config: &RoundConfig,
    rng: &mut R,
    input: &mut I,
) -> Result<Option<(Round, Verdict)>> {
    let round = Round::random_with_size(rng, config.grid_size);
    debug!("new round {round}");

    print_round(&round);
    let dictionary = round
        .load_dictionary(&config.dictionary)
        .context("cannot start a round")?;

    let Some(line) = prompt(
        input,
        "Enter the words (lowercase, in Ukrainian) separated by space",
    )?
    else {
        return Ok(None);
    };

    let words = parse_user_words(&line);
    let verdict = round.check(&words, &dictionary);
    print_verdict(&verdict);

    Ok(Some((round, verdict)))
}

/// Run the simple interactive CLI mode until the player stops
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded or there's an I/O error
/// reading user input.
pub fn run_simple(config: &RoundConfig) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Target UA - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("A game that will help students learn Ukrainian words");
    println!("that belong to different parts of speech.\n");
    println!("  - Words may have at most 5 letters");
    println!("  - Each word must start with one of the grid letters");
    println!("  - Each word must be the part of speech shown\n");

    let mut rng = config.rng();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut rounds = 0usize;
    let mut found = 0usize;

    loop {
        let Some((_, verdict)) = play_round(config, &mut rng, &mut input)? else {
            break;
        };
        rounds += 1;
        found += verdict.score();

        match prompt(&mut input, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => break,
        }
    }

    println!(
        "\n👋 Thanks for playing! {} {} in {} {}.\n",
        found.to_string().bright_cyan().bold(),
        if found == 1 { "word" } else { "words" },
        rounds,
        if rounds == 1 { "round" } else { "rounds" }
    );
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` on end of input
fn prompt<I: BufRead>(input: &mut I, text: &str) -> Result<Option<String>> {
    print!("{text}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read user input")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
