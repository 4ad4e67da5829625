//! Post-processing of generation responses into confidence and patterns.
//!
//! The endpoint returns plain text with no usable confidence signal, so
//! [`PlaceholderScorer`] synthesizes values in fixed ranges. A real
//! extractor plugs in through [`ResponseScorer`].

use std::ops::Range;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use shorthand_types::pattern::canonical_patterns;
use shorthand_types::{Pattern, ShorthandSystem};

use crate::types::GenerateContentResponse;

/// Confidence range reported for a decode, as integer percentages.
pub const DECODE_CONFIDENCE_RANGE: Range<u8> = 70..95;

/// Accuracy range reported after training.
pub const TRAINING_ACCURACY_RANGE: Range<f64> = 85.0..95.0;

pub trait ResponseScorer: Send + Sync {
    /// Overall decode confidence in `0..=100`.
    fn confidence(&self, response: &GenerateContentResponse) -> u8;

    /// Patterns recognized in the response.
    fn patterns(&self, response: &GenerateContentResponse, system: ShorthandSystem) -> Vec<Pattern>;

    /// Accuracy to report for a finished training run.
    fn training_accuracy(&self, system: ShorthandSystem, samples: usize) -> f64;
}

/// Random values in the documented ranges plus the system's canonical
/// patterns.
pub struct PlaceholderScorer {
    rng: Mutex<StdRng>,
}

impl PlaceholderScorer {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence, for tests and reproducible demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock only means another thread panicked mid-draw.
        let mut guard = self.rng.lock().unwrap_or_else(|p| p.into_inner());
        f(&mut *guard)
    }
}

impl Default for PlaceholderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseScorer for PlaceholderScorer {
    fn confidence(&self, _response: &GenerateContentResponse) -> u8 {
        self.with_rng(|rng| rng.gen_range(DECODE_CONFIDENCE_RANGE))
    }

    fn patterns(&self, _response: &GenerateContentResponse, system: ShorthandSystem) -> Vec<Pattern> {
        canonical_patterns(system)
    }

    fn training_accuracy(&self, _system: ShorthandSystem, _samples: usize) -> f64 {
        self.with_rng(|rng| rng.gen_range(TRAINING_ACCURACY_RANGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_in_range() {
        let scorer = PlaceholderScorer::seeded(7);
        let resp = GenerateContentResponse::from_text("x");
        for _ in 0..500 {
            let c = scorer.confidence(&resp);
            assert!(DECODE_CONFIDENCE_RANGE.contains(&c), "{c}");
        }
    }

    #[test]
    fn training_accuracy_in_range() {
        let scorer = PlaceholderScorer::new();
        for _ in 0..500 {
            let a = scorer.training_accuracy(ShorthandSystem::Gregg, 3);
            assert!((85.0..95.0).contains(&a), "{a}");
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        let resp = GenerateContentResponse::default();
        let a = PlaceholderScorer::seeded(42);
        let b = PlaceholderScorer::seeded(42);
        let xs: Vec<u8> = (0..10).map(|_| a.confidence(&resp)).collect();
        let ys: Vec<u8> = (0..10).map(|_| b.confidence(&resp)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn patterns_are_canonical() {
        let scorer = PlaceholderScorer::seeded(1);
        let resp = GenerateContentResponse::default();
        for system in ShorthandSystem::ALL {
            assert_eq!(scorer.patterns(&resp, system), canonical_patterns(system));
        }
    }
}
