//! Formatting utilities for terminal output

use crate::core::LetterSet;

/// Format the letter grid as boxed upper-case letters: `[А] [Б] [В]`
#[must_use]
pub fn format_grid(letters: &LetterSet) -> String {
    letters
        .iter()
        .map(|letter| format!("[{}]", letter.to_uppercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of the round's words the player found, as a bar
#[must_use]
pub fn score_bar(found: usize, missed: usize, width: usize) -> String {
    create_progress_bar(found as f64, (found + missed) as f64, width)
}

/// Percentage with one decimal, "0.0" when there is nothing to divide by
#[must_use]
pub fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", part as f64 / whole as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_uppercased_and_boxed() {
        let letters: LetterSet = "абґ".parse().unwrap();
        assert_eq!(format_grid(&letters), "[А] [Б] [Ґ]");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_bar_counts_found_against_total() {
        assert_eq!(score_bar(1, 3, 4), "█░░░");
        assert_eq!(score_bar(0, 0, 3), "░░░");
    }

    #[test]
    fn percent_formats() {
        assert_eq!(percent(1, 4), "25.0");
        assert_eq!(percent(1, 0), "0.0");
    }
}
