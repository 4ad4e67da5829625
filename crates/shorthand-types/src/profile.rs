//! Per-system user profile.
//!
//! Profiles are plain values. Updates return a new profile and leave the
//! caller to decide where to store it (see [`SessionState`](crate::session::SessionState)).

use serde::{Deserialize, Serialize};

use crate::system::ShorthandSystem;

/// Where a profile stands in its training lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileStatus {
    Ready,
    Training,
    Expert,
}

/// Accuracy and usage figures for one shorthand system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub system: ShorthandSystem,
    /// Percentage in `0.0..=100.0`.
    pub accuracy: f64,
    pub samples_count: u32,
    pub status: ProfileStatus,
    pub total_decoded: u64,
    /// Mean decode time in seconds.
    pub avg_processing_time: f64,
}

impl UserProfile {
    /// A profile with no training and no decodes.
    pub fn new(system: ShorthandSystem) -> Self {
        Self {
            system,
            accuracy: 0.0,
            samples_count: 0,
            status: ProfileStatus::Training,
            total_decoded: 0,
            avg_processing_time: 0.0,
        }
    }

    /// The demo profile a fresh session starts with.
    pub fn starter(system: ShorthandSystem) -> Self {
        match system {
            ShorthandSystem::Teeline => Self {
                system,
                accuracy: 87.0,
                samples_count: 8,
                status: ProfileStatus::Ready,
                total_decoded: 156,
                avg_processing_time: 2.3,
            },
            ShorthandSystem::Pitman => Self::new(system),
            ShorthandSystem::Gregg => Self {
                system,
                accuracy: 92.0,
                samples_count: 12,
                status: ProfileStatus::Expert,
                total_decoded: 234,
                avg_processing_time: 1.8,
            },
        }
    }

    /// Profile after a completed training run.
    pub fn with_training(&self, accuracy: f64, samples: usize) -> Self {
        Self {
            accuracy: accuracy.clamp(0.0, 100.0),
            samples_count: u32::try_from(samples).unwrap_or(u32::MAX),
            status: ProfileStatus::Ready,
            ..self.clone()
        }
    }

    /// Profile after the user submitted a correction.
    pub fn with_correction(&self) -> Self {
        Self {
            accuracy: (self.accuracy + 0.5).min(100.0),
            ..self.clone()
        }
    }

    /// Profile after one more successful decode taking `processing_time_ms`.
    pub fn with_decode(&self, processing_time_ms: u64) -> Self {
        let total = self.total_decoded.saturating_add(1);
        let secs = processing_time_ms as f64 / 1000.0;
        let mean = self.avg_processing_time + (secs - self.avg_processing_time) / total as f64;
        Self {
            total_decoded: total,
            avg_processing_time: mean,
            ..self.clone()
        }
    }
}
