//! Display functions for rounds and command results

use super::formatters::{format_grid, percent, score_bar};
use crate::checker::Verdict;
use crate::commands::DictionaryStats;
use crate::core::PartOfSpeech;
use crate::round::Round;
use colored::Colorize;

/// Print the letters and part of speech the player has to match
pub fn print_round(round: &Round) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "The game grid:  {}",
        format_grid(&round.letters).bright_yellow().bold()
    );
    println!(
        "Language part:  {}",
        round.part.name().bright_green().bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print accepted words, then the words the player could have found
pub fn print_verdict(verdict: &Verdict) {
    println!("\n{}", "Correct words:".green().bold());
    for word in &verdict.correct {
        println!("  {word}");
    }

    println!("\n{}", "More words:".yellow().bold());
    for word in &verdict.missed {
        println!("  {word}");
    }

    let found = verdict.score();
    let total = found + verdict.missed.len();
    println!(
        "\n📊 Found {} of {} [{}] {}%",
        found.to_string().bright_cyan().bold(),
        total,
        score_bar(found, verdict.missed.len(), 30).green(),
        percent(found, total)
    );
}

/// Print per-letter dictionary statistics
pub fn print_stats(stats: &DictionaryStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Entries loaded:   {}", stats.total_entries);
    println!("   Distinct words:   {}", stats.distinct_words);
    println!("   Load time:        {:.2}s", stats.load_time.as_secs_f64());

    println!(
        "\n   {:<6} {:>8} {:>8} {:>10} {:>8} {:>8}",
        "letter".bright_black(),
        "noun",
        "verb",
        "adjective",
        "adverb",
        "other"
    );
    for row in &stats.letters {
        let line = format!(
            "   {:<6} {:>8} {:>8} {:>10} {:>8} {:>8}",
            row.letter,
            row.count(PartOfSpeech::Noun),
            row.count(PartOfSpeech::Verb),
            row.count(PartOfSpeech::Adjective),
            row.count(PartOfSpeech::Adverb),
            row.unclassified
        );
        if row.total() == 0 {
            println!("{}", line.bright_black());
        } else {
            println!("{line}");
        }
    }

    println!(
        "\n   {:<6} {:>8} {:>8} {:>10} {:>8}",
        "total".bold(),
        stats.total_of(PartOfSpeech::Noun),
        stats.total_of(PartOfSpeech::Verb),
        stats.total_of(PartOfSpeech::Adjective),
        stats.total_of(PartOfSpeech::Adverb)
    );
}
