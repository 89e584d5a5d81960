//! Scoring a player's words against the round's dictionary

use super::WordIndex;
use crate::core::{ClassifiedDictionary, LetterSet, PartOfSpeech};

/// Outcome of a round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    /// Player words that are dictionary words of the target part, in input order
    pub correct: Vec<String>,
    /// Matching dictionary words absent from `correct`, in dictionary order
    pub missed: Vec<String>,
}

impl Verdict {
    /// Number of accepted submissions (repeats count each time)
    #[inline]
    #[must_use]
    pub fn score(&self) -> usize {
        self.correct.len()
    }

    /// True when the round had nothing to find and nothing was found
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.correct.is_empty() && self.missed.is_empty()
    }
}

/// Check submitted words for one round
///
/// A submission is correct when the dictionary classifies it as `target`;
/// anything else is dropped silently. Submissions are not de-duplicated, so a
/// repeated correct word is counted each time. `missed` lists every distinct
/// dictionary word of `target` starting with one of `letters` that is not in
/// `correct`.
///
/// # Examples
/// ```
/// use target_ua::checker::check_words;
/// use target_ua::core::{ClassifiedDictionary, Entry, LetterSet, PartOfSpeech};
///
/// let dictionary: ClassifiedDictionary = [
///     Entry::new("яв", PartOfSpeech::Noun),
///     Entry::new("ябеда", PartOfSpeech::Noun),
/// ]
/// .into_iter()
/// .collect();
/// let letters = LetterSet::new(['я']).unwrap();
///
/// let verdict = check_words(&["яв", "яв", "нема"], PartOfSpeech::Noun, &letters, &dictionary);
/// assert_eq!(verdict.correct, ["яв", "яв"]);
/// assert_eq!(verdict.missed, ["ябеда"]);
/// ```
#[must_use]
pub fn check_words<S: AsRef<str>>(
    user_words: &[S],
    target: PartOfSpeech,
    letters: &LetterSet,
    dictionary: &ClassifiedDictionary,
) -> Verdict {
    let index = WordIndex::build(dictionary);

    let correct: Vec<String> = user_words
        .iter()
        .map(|word| word.as_ref())
        .filter(|&word| index.get(word).is_some_and(|class| class.is(target)))
        .map(str::to_string)
        .collect();

    let missed = index
        .iter()
        .filter(|(word, class)| {
            class.is(target) && letters.starts(word) && !correct.iter().any(|c| c == word)
        })
        .map(|(word, _)| word.to_string())
        .collect();

    Verdict { correct, missed }
}
