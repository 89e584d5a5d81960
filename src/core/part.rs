//! Parts of speech and dictionary classifications

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four parts of speech a round can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Every part of speech, in display order
    pub const ALL: [Self; 4] = [Self::Noun, Self::Verb, Self::Adjective, Self::Adverb];

    /// Lower-case English name ("noun", "verb", ...)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a part-of-speech name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown part of speech '{0}' (expected noun, verb, adjective or adverb)")]
pub struct ParsePartError(pub String);

impl FromStr for PartOfSpeech {
    type Err = ParsePartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noun" | "n" => Ok(Self::Noun),
            "verb" | "v" => Ok(Self::Verb),
            "adjective" | "adj" => Ok(Self::Adjective),
            "adverb" | "adv" => Ok(Self::Adverb),
            _ => Err(ParsePartError(s.to_string())),
        }
    }
}

/// Classification attached to a dictionary word
///
/// Annotations that match none of the known markers are kept verbatim in
/// `Unclassified`, which never compares equal to any part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classification {
    Part(PartOfSpeech),
    Unclassified(String),
}

impl Classification {
    /// The part of speech, if the annotation was recognised
    #[inline]
    #[must_use]
    pub const fn part(&self) -> Option<PartOfSpeech> {
        match self {
            Self::Part(part) => Some(*part),
            Self::Unclassified(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is(&self, part: PartOfSpeech) -> bool {
        self.part() == Some(part)
    }
}

impl From<PartOfSpeech> for Classification {
    fn from(part: PartOfSpeech) -> Self {
        Self::Part(part)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Part(part) => write!(f, "{part}"),
            Self::Unclassified(raw) => write!(f, "unclassified({raw})"),
        }
    }
}
