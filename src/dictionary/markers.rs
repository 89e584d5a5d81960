//! Annotation markers recognised in dictionary lines
//!
//! Matching is by substring over the joined annotation string, so the order
//! of [`PART_MARKERS`] matters: `n` and `v` also occur inside longer tags and
//! must only be tried after the specific markers.

use crate::core::{Classification, PartOfSpeech};

/// Markers that exclude a word from the game entirely
pub const DISQUALIFYING_MARKERS: &[&str] = &["intj", "noninfl"];

/// Part-of-speech markers, tried in order; the first hit wins
pub const PART_MARKERS: &[(&str, PartOfSpeech)] = &[
    ("/n", PartOfSpeech::Noun),
    ("/v", PartOfSpeech::Verb),
    ("noun", PartOfSpeech::Noun),
    ("adj", PartOfSpeech::Adjective),
    ("adv", PartOfSpeech::Adverb),
    ("n", PartOfSpeech::Noun),
    ("v", PartOfSpeech::Verb),
];

/// Check whether an annotation contains any disqualifying marker
#[must_use]
pub fn is_disqualified(annotation: &str) -> bool {
    DISQUALIFYING_MARKERS
        .iter()
        .any(|marker| annotation.contains(marker))
}

/// Classify an annotation string
///
/// Falls back to `Classification::Unclassified` carrying the annotation
/// verbatim when no marker is present.
///
/// # Examples
/// ```
/// use target_ua::core::{Classification, PartOfSpeech};
/// use target_ua::dictionary::markers::classify;
///
/// assert_eq!(classify("/n"), Classification::Part(PartOfSpeech::Noun));
/// assert_eq!(classify("adv"), Classification::Part(PartOfSpeech::Adverb));
/// assert_eq!(classify("sfx"), Classification::Unclassified("sfx".into()));
/// ```
#[must_use]
pub fn classify(annotation: &str) -> Classification {
    PART_MARKERS
        .iter()
        .find(|(marker, _)| annotation.contains(marker))
        .map_or_else(
            || Classification::Unclassified(annotation.to_string()),
            |&(_, part)| Classification::Part(part),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(annotation: &str) -> Option<PartOfSpeech> {
        classify(annotation).part()
    }

    #[test]
    fn slash_markers() {
        assert_eq!(part("/n"), Some(PartOfSpeech::Noun));
        assert_eq!(part("/v"), Some(PartOfSpeech::Verb));
        assert_eq!(part("/v /n"), Some(PartOfSpeech::Noun));
    }

    #[test]
    fn word_markers() {
        assert_eq!(part("noun"), Some(PartOfSpeech::Noun));
        assert_eq!(part("verb"), Some(PartOfSpeech::Verb));
        assert_eq!(part("adj"), Some(PartOfSpeech::Adjective));
        assert_eq!(part("adv"), Some(PartOfSpeech::Adverb));
    }

    #[test]
    fn adjective_marker_beats_trailing_noun_letter() {
        // "adj:n" holds both "adj" and "n"; "adj" is earlier in the table
        assert_eq!(part("adj:n"), Some(PartOfSpeech::Adjective));
    }

    #[test]
    fn bare_n_inside_longer_tag_reads_as_noun() {
        // "inf" contains an "n" and nothing earlier in the table matches
        assert_eq!(part("verb:inf"), Some(PartOfSpeech::Noun));
    }

    #[test]
    fn adverb_before_bare_v() {
        assert_eq!(part("adv:rare"), Some(PartOfSpeech::Adverb));
    }

    #[test]
    fn unmatched_annotation_kept_verbatim() {
        assert_eq!(
            classify("sfx :rare"),
            Classification::Unclassified("sfx :rare".to_string())
        );
        assert_eq!(classify(""), Classification::Unclassified(String::new()));
    }

    #[test]
    fn disqualifying_markers_match_as_substrings() {
        assert!(is_disqualified("intj"));
        assert!(is_disqualified("part noninfl"));
        assert!(is_disqualified("xintjx"));
        assert!(!is_disqualified("/n"));
        assert!(!is_disqualified(""));
    }
}
