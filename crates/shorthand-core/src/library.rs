//! Searching and summarising the reference pattern library.

use std::collections::BTreeSet;

use serde::Serialize;

use shorthand_types::pattern::pattern_library;
use shorthand_types::{Pattern, PatternCategory, ShorthandSystem};

/// Filter over a system's pattern library.
#[derive(Debug, Clone, Default)]
pub struct PatternQuery {
    /// Case-insensitive substring matched against the pattern meaning.
    pub search: Option<String>,
    pub category: Option<PatternCategory>,
}

impl PatternQuery {
    pub fn matches(&self, pattern: &Pattern) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => pattern
                .meaning
                .to_lowercase()
                .contains(&term.to_lowercase()),
        };
        let category_ok = self.category.is_none_or(|c| c == pattern.category);
        search_ok && category_ok
    }

    /// Library entries for `system` that pass the filter, in library order.
    pub fn run(&self, system: ShorthandSystem) -> Vec<Pattern> {
        pattern_library(system)
            .into_iter()
            .filter(|p| self.matches(p))
            .collect()
    }
}

/// Headline numbers for a system's library.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySummary {
    pub total: usize,
    pub category_count: usize,
    /// Mean confidence as a percentage.
    pub average_confidence: f64,
}

pub fn summarize_library(system: ShorthandSystem) -> LibrarySummary {
    let patterns = pattern_library(system);
    let categories: BTreeSet<String> = patterns.iter().map(|p| p.category.to_string()).collect();
    let average_confidence = if patterns.is_empty() {
        0.0
    } else {
        patterns.iter().map(|p| p.confidence).sum::<f64>() / patterns.len() as f64 * 100.0
    };
    LibrarySummary {
        total: patterns.len(),
        category_count: categories.len(),
        average_confidence,
    }
}
