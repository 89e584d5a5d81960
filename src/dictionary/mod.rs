//! Dictionary loading and classification
//!
//! Turns a flat word-list file into the ordered, filtered entries a round
//! plays with.

pub mod loader;
pub mod markers;

pub use loader::{
    DictionaryError, MAX_WORD_LEN, load_from_file, load_from_reader, load_from_str, parse_line,
};
