//! Dictionary statistics command
//!
//! Counts, for each letter, how many distinct words of every part of speech a
//! round starting with that letter could ever ask for.

use crate::checker::WordIndex;
use crate::core::{ClassifiedDictionary, LetterSet, PartOfSpeech};
use crate::dictionary::load_from_file;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::Path;
use std::time::{Duration, Instant};

/// Word counts for a single starting letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStats {
    pub letter: char,
    /// Indexed like [`PartOfSpeech::ALL`]
    pub counts: [usize; 4],
    pub unclassified: usize,
}

impl LetterStats {
    #[must_use]
    pub fn count(&self, part: PartOfSpeech) -> usize {
        self.counts[part_slot(part)]
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.unclassified
    }
}

/// Statistics for a whole dictionary
#[derive(Debug)]
pub struct DictionaryStats {
    pub letters: Vec<LetterStats>,
    pub total_entries: usize,
    pub distinct_words: usize,
    pub load_time: Duration,
}

impl DictionaryStats {
    /// Distinct words of `part` across every letter
    #[must_use]
    pub fn total_of(&self, part: PartOfSpeech) -> usize {
        self.letters.iter().map(|s| s.count(part)).sum()
    }
}

const fn part_slot(part: PartOfSpeech) -> usize {
    match part {
        PartOfSpeech::Noun => 0,
        PartOfSpeech::Verb => 1,
        PartOfSpeech::Adjective => 2,
        PartOfSpeech::Adverb => 3,
    }
}

/// Count distinct words per letter and part of speech
///
/// Duplicate dictionary words are counted once, under their last
/// classification, the same way a round scores them.
#[must_use]
pub fn compute_stats(dictionary: &ClassifiedDictionary, letters: &LetterSet) -> Vec<LetterStats> {
    let index = WordIndex::build(dictionary);
    let words: Vec<_> = index.iter().collect();

    letters
        .as_slice()
        .par_iter()
        .map(|&letter| {
            let mut stats = LetterStats {
                letter,
                counts: [0; 4],
                unclassified: 0,
            };

            for (word, class) in &words {
                if !word.starts_with(letter) {
                    continue;
                }
                match class.part() {
                    Some(part) => stats.counts[part_slot(part)] += 1,
                    None => stats.unclassified += 1,
                }
            }

            stats
        })
        .collect()
}

/// Load the dictionary for `letters` and compute its statistics
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded.
pub fn run_stats(path: &Path, letters: &LetterSet) -> Result<DictionaryStats> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .context("invalid spinner template")?,
    );
    spinner.set_message(format!("Loading {}", path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let dictionary = load_from_file(path, letters);
    let load_time = start.elapsed();

    let dictionary = match dictionary {
        Ok(dictionary) => {
            spinner.finish_with_message(format!("Loaded {} entries", dictionary.len()));
            dictionary
        }
        Err(err) => {
            spinner.finish_and_clear();
            return Err(err).context("cannot compute dictionary statistics");
        }
    };

    let stats = compute_stats(&dictionary, letters);
    let distinct_words = stats.iter().map(LetterStats::total).sum();

    Ok(DictionaryStats {
        letters: stats,
        total_entries: dictionary.len(),
        distinct_words,
        load_time,
    })
}
