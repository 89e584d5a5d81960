//! Dictionary entries and the ordered, filtered dictionary of a round

use super::{Classification, PartOfSpeech};
use std::fmt;

/// A word together with its classification
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    word: String,
    class: Classification,
}

impl Entry {
    #[must_use]
    pub fn new(word: impl Into<String>, class: impl Into<Classification>) -> Self {
        Self {
            word: word.into(),
            class: class.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn class(&self) -> &Classification {
        &self.class
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.class)
    }
}

/// Entries in the order they appeared in the source dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedDictionary {
    entries: Vec<Entry>,
}

impl ClassifiedDictionary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Words classified as `part`, in dictionary order (duplicates included)
    pub fn words_of(&self, part: PartOfSpeech) -> impl Iterator<Item = &str> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.class().is(part))
            .map(Entry::word)
    }
}

impl FromIterator<Entry> for ClassifiedDictionary {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ClassifiedDictionary {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for ClassifiedDictionary {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ClassifiedDictionary {
        [
            Entry::new("яв", PartOfSpeech::Noun),
            Entry::new("явити", PartOfSpeech::Verb),
            Entry::new("як", Classification::Unclassified(String::new())),
            Entry::new("ява", PartOfSpeech::Noun),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn collect_preserves_order() {
        let dict = sample();
        let words: Vec<&str> = dict.iter().map(Entry::word).collect();
        assert_eq!(words, ["яв", "явити", "як", "ява"]);
    }

    #[test]
    fn words_of_filters_by_part() {
        let dict = sample();
        let nouns: Vec<&str> = dict.words_of(PartOfSpeech::Noun).collect();
        assert_eq!(nouns, ["яв", "ява"]);
        assert_eq!(dict.words_of(PartOfSpeech::Adverb).count(), 0);
    }

    #[test]
    fn push_appends() {
        let mut dict = ClassifiedDictionary::new();
        assert!(dict.is_empty());
        dict.push(Entry::new("яр", PartOfSpeech::Noun));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.entries()[0].word(), "яр");
    }

    #[test]
    fn entry_display() {
        let entry = Entry::new("явний", PartOfSpeech::Adjective);
        assert_eq!(entry.to_string(), "явний (adjective)");
    }
}
