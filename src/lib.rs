//! Target UA
//!
//! A Ukrainian word game: the player gets five random letters and a part of
//! speech, then names short words that start with one of the letters and
//! belong to that part of speech.
//!
//! # Quick Start
//!
//! ```rust
//! use target_ua::core::{LetterSet, PartOfSpeech};
//! use target_ua::dictionary::load_from_str;
//! use target_ua::checker::check_words;
//!
//! let letters: LetterSet = "я".parse().unwrap();
//! let dictionary = load_from_str("ябеда /n\nяв noun\nявити verb\n", &letters);
//!
//! let verdict = check_words(&["яв"], PartOfSpeech::Noun, &letters, &dictionary);
//! assert_eq!(verdict.correct, ["яв"]);
//! assert_eq!(verdict.missed, ["ябеда"]);
//! ```

// Core domain types
pub mod core;

// Dictionary loading
pub mod dictionary;

// Scoring player words
pub mod checker;

// Round setup
pub mod round;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
