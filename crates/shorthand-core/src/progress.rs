//! Linear estimate of how training samples translate into accuracy.

use serde::Serialize;

/// Accuracy with no samples.
const BASE_ACCURACY: f64 = 60.0;
/// Accuracy gained per sample.
const ACCURACY_PER_SAMPLE: f64 = 5.0;
/// Ceiling the estimate never exceeds.
const MAX_ESTIMATED_ACCURACY: f64 = 95.0;

/// Default accuracy users train towards.
pub const DEFAULT_TARGET_ACCURACY: f64 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEstimate {
    pub current_accuracy: f64,
    pub samples_needed: u32,
    /// Percentage of the target reached, capped at 100.
    pub progress: f64,
}

/// Estimate accuracy after `samples_count` samples and how many more are
/// needed to reach `target_accuracy`.
pub fn estimate_training_progress(samples_count: u32, target_accuracy: f64) -> TrainingEstimate {
    let current = (BASE_ACCURACY + ACCURACY_PER_SAMPLE * samples_count as f64).min(MAX_ESTIMATED_ACCURACY);
    let needed = ((target_accuracy - current) / ACCURACY_PER_SAMPLE).ceil().max(0.0);
    let progress = if target_accuracy > 0.0 {
        (current / target_accuracy * 100.0).min(100.0)
    } else {
        100.0
    };
    TrainingEstimate {
        current_accuracy: current,
        samples_needed: needed as u32,
        progress,
    }
}
