//! Word lookup built from a classified dictionary

use crate::core::{Classification, ClassifiedDictionary};
use indexmap::IndexMap;

/// Insertion-ordered map from word to classification
///
/// A word that appears more than once keeps the position of its first
/// occurrence and the classification of its last.
#[derive(Debug, Clone, Default)]
pub struct WordIndex<'a> {
    words: IndexMap<&'a str, &'a Classification>,
}

impl<'a> WordIndex<'a> {
    /// Build the index from dictionary order
    ///
    /// # Examples
    /// ```
    /// use target_ua::checker::WordIndex;
    /// use target_ua::core::{ClassifiedDictionary, Entry, PartOfSpeech};
    ///
    /// let dictionary: ClassifiedDictionary = [
    ///     Entry::new("мати", PartOfSpeech::Verb),
    ///     Entry::new("мак", PartOfSpeech::Noun),
    ///     Entry::new("мати", PartOfSpeech::Noun),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let index = WordIndex::build(&dictionary);
    /// assert_eq!(index.len(), 2);
    /// assert!(index.get("мати").unwrap().is(PartOfSpeech::Noun));
    /// ```
    #[must_use]
    pub fn build(dictionary: &'a ClassifiedDictionary) -> Self {
        let mut words = IndexMap::with_capacity(dictionary.len());
        for entry in dictionary {
            // IndexMap::insert keeps the existing slot and replaces the value
            words.insert(entry.word(), entry.class());
        }
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&'a Classification> {
        self.words.get(word).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Distinct words with their final classification, in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Classification)> + '_ {
        self.words.iter().map(|(&word, &class)| (word, class))
    }
}
