//! Terminal output formatting
//!
//! Display utilities for rounds, verdicts and statistics.

pub mod display;
pub mod formatters;

pub use display::{print_round, print_stats, print_verdict};
