//! Allowed first letters for a round

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The 33 lower-case letters of the Ukrainian alphabet
pub const ALPHABET: &str = "абвгґдеєжзиіїйклмнопрстуфхцчшщьюя";

/// Number of letters in [`ALPHABET`]
pub const ALPHABET_LEN: usize = 33;

/// Error type for invalid letter sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterSetError {
    #[error("letter set must contain at least one letter")]
    Empty,
}

/// A non-empty set of letters a word may start with
///
/// Keeps the order letters were first seen in, so a grid always prints
/// the way it was drawn. Duplicates are dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: Vec<char>,
}

impl LetterSet {
    /// Build a letter set from any sequence of characters
    ///
    /// # Errors
    /// Returns `LetterSetError::Empty` if no letters are supplied.
    ///
    /// # Examples
    /// ```
    /// use target_ua::core::LetterSet;
    ///
    /// let letters = LetterSet::new(['я', 'б', 'я']).unwrap();
    /// assert_eq!(letters.len(), 2);
    /// assert!(letters.contains('я'));
    /// ```
    pub fn new(letters: impl IntoIterator<Item = char>) -> Result<Self, LetterSetError> {
        let mut unique: Vec<char> = Vec::new();
        for letter in letters {
            if !unique.contains(&letter) {
                unique.push(letter);
            }
        }

        if unique.is_empty() {
            return Err(LetterSetError::Empty);
        }

        Ok(Self { letters: unique })
    }

    /// Every letter of [`ALPHABET`]
    #[must_use]
    pub fn alphabet() -> Self {
        Self {
            letters: ALPHABET.chars().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Check whether `word` starts with one of the letters
    ///
    /// An empty word starts with nothing.
    #[inline]
    #[must_use]
    pub fn starts(&self, word: &str) -> bool {
        word.chars().next().is_some_and(|first| self.contains(first))
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True when the set holds no letters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[char] {
        &self.letters
    }
}

impl FromStr for LetterSet {
    type Err = LetterSetError;

    /// Parse letters from text such as `"абвгд"`, `"а б в"` or `"а,б,в"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(
            s.to_lowercase()
                .chars()
                .filter(|c| !c.is_whitespace() && *c != ','),
        )
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_33_unique_letters() {
        assert_eq!(ALPHABET.chars().count(), ALPHABET_LEN);
        assert_eq!(LetterSet::alphabet().len(), ALPHABET_LEN);
    }

    #[test]
    fn empty_set_rejected() {
        assert_eq!(LetterSet::new([]), Err(LetterSetError::Empty));
        assert_eq!(" , ".parse::<LetterSet>(), Err(LetterSetError::Empty));
    }

    #[test]
    fn duplicates_dropped_order_kept() {
        let letters = LetterSet::new(['р', 'х', 'р', 'б']).unwrap();
        assert_eq!(letters.as_slice(), &['р', 'х', 'б']);
    }

    #[test]
    fn parse_ignores_separators_and_case() {
        let letters: LetterSet = "Р, х б".parse().unwrap();
        assert_eq!(letters.as_slice(), &['р', 'х', 'б']);
    }

    #[test]
    fn starts_checks_first_character_only() {
        let letters = LetterSet::new(['я']).unwrap();
        assert!(letters.starts("ябеда"));
        assert!(!letters.starts("бая"));
        assert!(!letters.starts(""));
    }

    #[test]
    fn single_letter_set_is_valid() {
        let letters = LetterSet::new(['ґ']).unwrap();
        assert_eq!(letters.len(), 1);
        assert!(!letters.is_empty());
    }

    #[test]
    fn display_space_separated() {
        let letters = LetterSet::new(['а', 'б', 'в']).unwrap();
        assert_eq!(letters.to_string(), "а б в");
    }
}
