//! One-shot word check
//!
//! Scores a fixed list of words for given letters and part of speech, without
//! any prompting.

use crate::checker::Verdict;
use crate::round::{Round, RoundConfig};
use anyhow::{Context, Result};

/// Load the round's dictionary and check `words` against it
///
/// # Errors
///
/// Returns an error if the dictionary cannot be loaded.
pub fn run_check<S: AsRef<str>>(
    config: &RoundConfig,
    round: &Round,
    words: &[S],
) -> Result<Verdict> {
    let dictionary = round
        .load_dictionary(&config.dictionary)
        .with_context(|| format!("cannot check words for letters [{}]", round.letters))?;

    Ok(round.check(words, &dictionary))
}
