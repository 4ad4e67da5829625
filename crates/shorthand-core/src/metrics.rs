//! Reading-speed and confidence presentation helpers.

use serde::Serialize;

/// Words per minute for `text` decoded in `processing_time_ms`.
///
/// Returns `None` when no time elapsed, since the rate is unbounded.
pub fn calculate_reading_speed(text: &str, processing_time_ms: u64) -> Option<u32> {
    if processing_time_ms == 0 {
        return None;
    }
    let words = text.split_whitespace().count() as f64;
    let minutes = processing_time_ms as f64 / 60_000.0;
    Some((words / minutes).round() as u32)
}

/// Display tier for a confidence percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfidenceLabel {
    pub label: &'static str,
    pub color: &'static str,
}

pub fn format_confidence_score(confidence: f64) -> ConfidenceLabel {
    let (label, color) = if confidence >= 90.0 {
        ("Excellent", "green")
    } else if confidence >= 80.0 {
        ("Good", "blue")
    } else if confidence >= 70.0 {
        ("Fair", "yellow")
    } else {
        ("Poor", "red")
    };
    ConfidenceLabel { label, color }
}
