//! Dictionary loading
//!
//! Reads a word list where each line is `<word> <tag>...` and keeps the words
//! that fit a round: at most [`MAX_WORD_LEN`] letters, starting with one of the
//! round's letters, and not carrying a disqualifying tag.

use super::markers::{classify, is_disqualified};
use crate::core::{ClassifiedDictionary, Entry, LetterSet};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Longest word (in characters) a round accepts
pub const MAX_WORD_LEN: usize = 5;

/// Errors raised while loading a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary '{}' is unavailable: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read dictionary at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Parse one dictionary line
///
/// Returns `None` when the line produces no entry: empty or over-long word,
/// first letter outside `letters`, or a disqualifying tag.
///
/// # Examples
/// ```
/// use target_ua::core::{LetterSet, PartOfSpeech};
/// use target_ua::dictionary::loader::parse_line;
///
/// let letters = LetterSet::new(['я']).unwrap();
/// let entry = parse_line("Явити verb\n", &letters).unwrap();
/// assert_eq!(entry.word(), "явити");
/// assert!(entry.class().is(PartOfSpeech::Verb));
///
/// assert!(parse_line("ягідка /n", &letters).is_none()); // six letters
/// ```
#[must_use]
pub fn parse_line(line: &str, letters: &LetterSet) -> Option<Entry> {
    let line = line.trim_end().to_lowercase();
    let mut tokens = line.split(' ');
    let word = tokens.next().unwrap_or_default();

    if word.is_empty() || word.chars().count() > MAX_WORD_LEN || !letters.starts(word) {
        return None;
    }

    let annotation = tokens
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if is_disqualified(&annotation) {
        return None;
    }

    Some(Entry::new(word, classify(&annotation)))
}

/// Load a dictionary from any buffered reader
///
/// # Errors
///
/// Returns `DictionaryError::Read` if a line cannot be read, including lines
/// that are not valid UTF-8.
pub fn load_from_reader<R: BufRead>(
    reader: R,
    letters: &LetterSet,
) -> Result<ClassifiedDictionary, DictionaryError> {
    let mut dictionary = ClassifiedDictionary::new();
    let mut unclassified = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DictionaryError::Read {
            line: idx + 1,
            source,
        })?;

        if let Some(entry) = parse_line(&line, letters) {
            if entry.class().part().is_none() {
                debug!("line {}: no part-of-speech marker in {:?}", idx + 1, line);
                unclassified += 1;
            }
            dictionary.push(entry);
        }
    }

    if unclassified > 0 {
        warn!("{unclassified} dictionary entries carry no part-of-speech marker");
    }

    Ok(dictionary)
}

/// Load a dictionary from an in-memory string
///
/// A `&str` is valid UTF-8 and reading it cannot fail, so this never errors.
#[must_use]
pub fn load_from_str(content: &str, letters: &LetterSet) -> ClassifiedDictionary {
    load_from_reader(content.as_bytes(), letters).unwrap_or_default()
}

/// Load a dictionary file, keeping only words that start with `letters`
///
/// # Errors
///
/// Returns `DictionaryError::Unavailable` if the file cannot be opened and
/// `DictionaryError::Read` if reading fails part-way through.
///
/// # Examples
/// ```no_run
/// use target_ua::core::LetterSet;
/// use target_ua::dictionary::loader::load_from_file;
///
/// let letters: LetterSet = "я".parse().unwrap();
/// let dictionary = load_from_file("data/sample.lst", &letters).unwrap();
/// println!("Loaded {} entries", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    letters: &LetterSet,
) -> Result<ClassifiedDictionary, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionary = load_from_reader(BufReader::new(file), letters)?;
    info!(
        "loaded {} entries from {} for letters [{letters}]",
        dictionary.len(),
        path.display()
    );

    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Classification, PartOfSpeech};
    use std::io::{Cursor, Write};

    fn letters(s: &str) -> LetterSet {
        s.parse().unwrap()
    }

    fn pairs(dictionary: &ClassifiedDictionary) -> Vec<(&str, Option<PartOfSpeech>)> {
        dictionary
            .iter()
            .map(|entry| (entry.word(), entry.class().part()))
            .collect()
    }

    #[test]
    fn loads_the_three_line_example() {
        let dict = load_from_str("ябеда /n\nяв noun\nявити verb\n", &letters("я"));
        assert_eq!(
            pairs(&dict),
            vec![
                ("ябеда", Some(PartOfSpeech::Noun)),
                ("яв", Some(PartOfSpeech::Noun)),
                ("явити", Some(PartOfSpeech::Verb)),
            ]
        );
    }

    #[test]
    fn six_letter_word_always_excluded() {
        let dict = load_from_str("ягідка /n\nяблуко noun\n", &letters("я"));
        assert!(dict.is_empty());
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Five Cyrillic letters are ten bytes in UTF-8
        let entry = parse_line("явище /n", &letters("я")).unwrap();
        assert_eq!(entry.word(), "явище");
    }

    #[test]
    fn first_letter_must_be_in_set() {
        let dict = load_from_str("ява /n\nбіг /n\nрік /n\n", &letters("бр"));
        let words: Vec<&str> = dict.iter().map(Entry::word).collect();
        assert_eq!(words, ["біг", "рік"]);
    }

    #[test]
    fn disqualified_lines_dropped() {
        let dict = load_from_str("ой intj\nот noninfl part\nоса /n\n", &letters("о"));
        let words: Vec<&str> = dict.iter().map(Entry::word).collect();
        assert_eq!(words, ["оса"]);
    }

    #[test]
    fn line_is_lowercased_before_matching() {
        let entry = parse_line("ЯВІР /N", &letters("я")).unwrap();
        assert_eq!(entry.word(), "явір");
        assert!(entry.class().is(PartOfSpeech::Noun));
    }

    #[test]
    fn repeated_spaces_and_crlf_tolerated() {
        let entry = parse_line("ява   :rare   /n\r\n", &letters("я")).unwrap();
        assert_eq!(entry.word(), "ява");
        assert!(entry.class().is(PartOfSpeech::Noun));
    }

    #[test]
    fn leading_space_means_empty_word() {
        assert!(parse_line(" ява /n", &letters("я")).is_none());
        assert!(parse_line("", &letters("я")).is_none());
    }

    #[test]
    fn tab_is_not_a_separator() {
        // Only single spaces split tokens, so "яв\t/n" is one five-character word
        let entry = parse_line("яв\t/n", &letters("я")).unwrap();
        assert_eq!(entry.word(), "яв\t/n");
        assert_eq!(entry.class(), &Classification::Unclassified(String::new()));
    }

    #[test]
    fn unclassified_annotation_retained() {
        let dict = load_from_str("ярь sfx\nяр\n", &letters("я"));
        assert_eq!(
            dict.entries()[0].class(),
            &Classification::Unclassified("sfx".to_string())
        );
        assert_eq!(
            dict.entries()[1].class(),
            &Classification::Unclassified(String::new())
        );
    }

    #[test]
    fn duplicates_kept_in_source_order() {
        let dict = load_from_str("мати /v\nмак /n\nмати /n\n", &letters("м"));
        assert_eq!(
            pairs(&dict),
            vec![
                ("мати", Some(PartOfSpeech::Verb)),
                ("мак", Some(PartOfSpeech::Noun)),
                ("мати", Some(PartOfSpeech::Noun)),
            ]
        );
    }

    #[test]
    fn every_entry_respects_length_and_letters() {
        let content = "ява /n\nябеда /n\nягідка /n\nбіг /v\nхата /n\nцвях /n\n";
        let set = letters("яц");
        let dict = load_from_str(content, &set);
        for entry in &dict {
            assert!(entry.word().chars().count() <= MAX_WORD_LEN);
            assert!(set.starts(entry.word()));
        }
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn reader_and_str_agree() {
        let content = "ябеда /n\nяй intj\nявний adj\nякось adv\n";
        let set = letters("я");
        let from_reader = load_from_reader(Cursor::new(content), &set).unwrap();
        assert_eq!(from_reader, load_from_str(content, &set));
    }

    #[test]
    fn str_loading_keeps_unclassified_entries_like_reader() {
        let content = "ярь sfx\nяр /n\nяса\nяй intj\n";
        let set = letters("я");
        let from_str = load_from_str(content, &set);
        assert_eq!(from_str, load_from_reader(content.as_bytes(), &set).unwrap());
        assert_eq!(
            pairs(&from_str),
            vec![
                ("ярь", None),
                ("яр", Some(PartOfSpeech::Noun)),
                ("яса", None),
            ]
        );
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let bytes: &[u8] = b"\xd1\x8f\xd0\xb2 /n\n\xff\xfe /n\n";
        let err = load_from_reader(Cursor::new(bytes), &letters("я")).unwrap_err();
        assert!(matches!(err, DictionaryError::Read { line: 2, .. }));
    }

    #[test]
    fn load_from_file_reads_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ябеда /n").unwrap();
        writeln!(file, "яв noun").unwrap();
        writeln!(file, "явити verb").unwrap();

        let set = letters("я");
        let first = load_from_file(file.path(), &set).unwrap();
        let second = load_from_file(file.path(), &set).unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.lst");

        let err = load_from_file(&path, &letters("я")).unwrap_err();
        match err {
            DictionaryError::Unavailable { path: reported, .. } => assert_eq!(reported, path),
            other @ DictionaryError::Read { .. } => panic!("unexpected error: {other}"),
        }
    }
}
