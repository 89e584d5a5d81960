//! Command implementations

pub mod check;
pub mod simple;
pub mod stats;

pub use check::run_check;
pub use simple::{play_round, run_simple};
pub use stats::{DictionaryStats, LetterStats, compute_stats, run_stats};
