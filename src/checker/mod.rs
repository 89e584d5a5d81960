//! Word checking
//!
//! Splits a player's submissions into accepted words and computes the
//! dictionary words they missed.

mod index;
mod verdict;

pub use index::WordIndex;
pub use verdict::{Verdict, check_words};
