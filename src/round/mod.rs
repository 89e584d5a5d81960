//! Round setup
//!
//! Draws the letter grid and target part of speech from an injected RNG,
//! loads the round's dictionary slice and turns raw player input into words.

use crate::checker::{Verdict, check_words};
use crate::core::{ALPHABET, ALPHABET_LEN, ClassifiedDictionary, LetterSet, PartOfSpeech};
use crate::dictionary::{DictionaryError, load_from_file};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Letters shown to the player each round
pub const GRID_SIZE: usize = 5;

/// Default dictionary file, relative to the working directory
///
/// Points at the word list bundled with the crate; pass `-d` for a full one.
pub const DEFAULT_DICTIONARY: &str = "data/sample.lst";

/// Settings shared by every round of a session
#[derive(Debug, Clone)]
pub struct RoundConfig {
    pub dictionary: PathBuf,
    pub grid_size: usize,
    pub seed: Option<u64>,
}

impl RoundConfig {
    #[must_use]
    pub fn new(dictionary: impl Into<PathBuf>) -> Self {
        Self {
            dictionary: dictionary.into(),
            grid_size: GRID_SIZE,
            seed: None,
        }
    }

    /// RNG for the session: seeded when a seed is configured, otherwise from the OS
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY)
    }
}

/// Draw `size` distinct letters from the alphabet
///
/// `size` is clamped to `1..=33`.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use target_ua::round::generate_grid;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let grid = generate_grid(&mut rng, 5);
/// assert_eq!(grid.len(), 5);
/// ```
#[must_use]
pub fn generate_grid<R: Rng + ?Sized>(rng: &mut R, size: usize) -> LetterSet {
    let mut alphabet: Vec<char> = ALPHABET.chars().collect();
    alphabet.shuffle(rng);
    alphabet.truncate(size.clamp(1, ALPHABET_LEN));

    LetterSet::new(alphabet).unwrap_or_else(|_| LetterSet::alphabet())
}

/// Pick a target part of speech uniformly
#[must_use]
pub fn choose_part<R: Rng + ?Sized>(rng: &mut R) -> PartOfSpeech {
    *PartOfSpeech::ALL
        .choose(rng)
        .unwrap_or(&PartOfSpeech::Noun)
}

/// Split a line of player input into words
///
/// Words are lower-cased and repeats dropped, keeping first-occurrence order.
#[must_use]
pub fn parse_user_words(line: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    line.split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// The letters and target part of speech of one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub letters: LetterSet,
    pub part: PartOfSpeech,
}

impl Round {
    #[must_use]
    pub const fn new(letters: LetterSet, part: PartOfSpeech) -> Self {
        Self { letters, part }
    }

    /// Draw a fresh round of [`GRID_SIZE`] letters
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random_with_size(rng, GRID_SIZE)
    }

    #[must_use]
    pub fn random_with_size<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Self {
        let letters = generate_grid(rng, size);
        let part = choose_part(rng);
        Self { letters, part }
    }

    /// Load the dictionary entries this round can use
    ///
    /// # Errors
    ///
    /// Propagates `DictionaryError` if the file is missing or unreadable.
    pub fn load_dictionary<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<ClassifiedDictionary, DictionaryError> {
        load_from_file(path, &self.letters)
    }

    /// Score the player's words for this round
    #[must_use]
    pub fn check<S: AsRef<str>>(
        &self,
        user_words: &[S],
        dictionary: &ClassifiedDictionary,
    ) -> Verdict {
        check_words(user_words, self.part, &self.letters, dictionary)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.letters, self.part)
    }
}
