//! Core domain types for the word game
//!
//! Plain data with no I/O: parts of speech, dictionary entries and letter sets.

mod entry;
mod letters;
mod part;

pub use entry::{ClassifiedDictionary, Entry};
pub use letters::{ALPHABET, ALPHABET_LEN, LetterSet, LetterSetError};
pub use part::{Classification, ParsePartError, PartOfSpeech};
