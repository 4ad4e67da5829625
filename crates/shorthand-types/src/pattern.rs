//! Symbol patterns: a glyph, what it means, and how confidently it is read.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShorthandError;
use crate::system::ShorthandSystem;

/// Grouping label shown in the pattern library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternCategory {
    Common,
    Endings,
    Letters,
    Blends,
    Vowels,
}

impl PatternCategory {
    pub const ALL: [PatternCategory; 5] = [
        PatternCategory::Common,
        PatternCategory::Endings,
        PatternCategory::Letters,
        PatternCategory::Blends,
        PatternCategory::Vowels,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            PatternCategory::Common => "Common Words",
            PatternCategory::Endings => "Word Endings",
            PatternCategory::Letters => "Letters",
            PatternCategory::Blends => "Letter Blends",
            PatternCategory::Vowels => "Vowels",
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PatternCategory::Common => "common",
            PatternCategory::Endings => "endings",
            PatternCategory::Letters => "letters",
            PatternCategory::Blends => "blends",
            PatternCategory::Vowels => "vowels",
        };
        f.write_str(s)
    }
}

impl FromStr for PatternCategory {
    type Err = ShorthandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PatternCategory::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShorthandError::validation(format!("unknown pattern category: {s}")))
    }
}

/// A single symbol-to-meaning mapping with its recognition confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub symbol: String,
    pub meaning: String,
    pub category: PatternCategory,
    /// Recognition confidence in `0.0..=1.0`.
    pub confidence: f64,
}

struct Entry(&'static str, &'static str, PatternCategory, f64);

use PatternCategory::{Blends, Common, Endings, Letters, Vowels};

const TEELINE: &[Entry] = &[
    Entry("⌒", "the", Common, 0.95),
    Entry("∩", "and", Common, 0.92),
    Entry("⌐", "ing", Endings, 0.88),
    Entry("∼", "er", Endings, 0.85),
    Entry("⊂", "for", Common, 0.90),
    Entry("⊃", "to", Common, 0.93),
    Entry("∪", "with", Common, 0.87),
    Entry("∩", "that", Common, 0.89),
];

const PITMAN: &[Entry] = &[
    Entry("|", "t", Letters, 0.96),
    Entry("/", "p", Letters, 0.94),
    Entry("\\", "b", Letters, 0.91),
    Entry("—", "k", Letters, 0.93),
    Entry("~", "g", Letters, 0.88),
    Entry("∠", "ch", Blends, 0.86),
    Entry("∟", "sh", Blends, 0.84),
];

const GREGG: &[Entry] = &[
    Entry("⌒", "a", Vowels, 0.92),
    Entry("∩", "e", Vowels, 0.94),
    Entry("⊂", "i", Vowels, 0.89),
    Entry("⊃", "o", Vowels, 0.91),
    Entry("∪", "u", Vowels, 0.87),
    Entry("∼", "th", Blends, 0.85),
    Entry("≈", "wh", Blends, 0.83),
];

/// Number of library entries that make up a system's canonical set.
const CANONICAL_LEN: usize = 3;

fn entries(system: ShorthandSystem) -> &'static [Entry] {
    match system {
        ShorthandSystem::Teeline => TEELINE,
        ShorthandSystem::Pitman => PITMAN,
        ShorthandSystem::Gregg => GREGG,
    }
}

fn materialize(list: &[Entry]) -> Vec<Pattern> {
    list.iter()
        .map(|Entry(symbol, meaning, category, confidence)| Pattern {
            symbol: (*symbol).to_owned(),
            meaning: (*meaning).to_owned(),
            category: *category,
            confidence: *confidence,
        })
        .collect()
}

/// The full reference pattern library for `system`.
pub fn pattern_library(system: ShorthandSystem) -> Vec<Pattern> {
    materialize(entries(system))
}

/// The patterns reported by decode and training results for `system`.
pub fn canonical_patterns(system: ShorthandSystem) -> Vec<Pattern> {
    let list = entries(system);
    materialize(&list[..CANONICAL_LEN.min(list.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_sizes() {
        assert_eq!(pattern_library(ShorthandSystem::Teeline).len(), 8);
        assert_eq!(pattern_library(ShorthandSystem::Pitman).len(), 7);
        assert_eq!(pattern_library(ShorthandSystem::Gregg).len(), 7);
    }

    #[test]
    fn canonical_teeline_set() {
        let meanings: Vec<String> = canonical_patterns(ShorthandSystem::Teeline)
            .into_iter()
            .map(|p| p.meaning)
            .collect();
        assert_eq!(meanings, ["the", "and", "ing"]);
    }

    #[test]
    fn canonical_pitman_symbols() {
        let patterns = canonical_patterns(ShorthandSystem::Pitman);
        assert_eq!(patterns[0].symbol, "|");
        assert_eq!(patterns[2].symbol, "\\");
        assert!((patterns[1].confidence - 0.94).abs() < f64::EPSILON);
    }

    #[test]
    fn confidences_are_fractions() {
        for system in ShorthandSystem::ALL {
            for p in pattern_library(system) {
                assert!((0.0..=1.0).contains(&p.confidence), "{p:?}");
                assert_eq!(p.symbol.chars().count(), 1, "{p:?}");
            }
        }
    }

    #[test]
    fn category_serde_is_lowercase() {
        let json = serde_json::to_string(&PatternCategory::Endings).unwrap();
        assert_eq!(json, "\"endings\"");
        assert_eq!("Blends".parse::<PatternCategory>().unwrap(), PatternCategory::Blends);
        assert!("glyphs".parse::<PatternCategory>().is_err());
    }
}
