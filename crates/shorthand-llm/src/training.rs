//! Simulated training job.
//!
//! Training runs as a sequence of timed steps. Each step races a
//! [`CancellationToken`] and reports a [`TrainingProgress`] event, so a real
//! incremental trainer can later replace the sleep without changing callers.

use std::time::Duration;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use shorthand_types::config::TrainingSection;
use shorthand_types::pattern::canonical_patterns;
use shorthand_types::results::TrainedModel;
use shorthand_types::{Result, ShorthandError, ShorthandSystem, TrainingSample};

use crate::scoring::ResponseScorer;

/// Pacing of a training run. The defaults take two seconds in total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    pub steps: u32,
    pub step_delay: Duration,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            steps: 10,
            step_delay: Duration::from_millis(200),
        }
    }
}

impl From<&TrainingSection> for TrainingConfig {
    fn from(section: &TrainingSection) -> Self {
        Self {
            steps: section.steps,
            step_delay: Duration::from_millis(section.step_delay_ms),
        }
    }
}

/// Emitted after each completed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrainingProgress {
    pub step: u32,
    pub steps: u32,
    /// `0..=100`, reaching 100 on the last step.
    pub percent: u8,
}

pub struct TrainingJob {
    config: TrainingConfig,
}

impl TrainingJob {
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Run the job to completion or cancellation.
    ///
    /// A dropped progress receiver does not stop the job.
    pub async fn run(
        &self,
        system: ShorthandSystem,
        samples: &[TrainingSample],
        scorer: &dyn ResponseScorer,
        cancel: &CancellationToken,
        progress: Option<&mpsc::Sender<TrainingProgress>>,
    ) -> Result<TrainedModel> {
        if samples.is_empty() {
            return Err(ShorthandError::validation(
                "at least one training sample is required",
            ));
        }

        let steps = self.config.steps.max(1);
        let transcribed_chars: usize = samples.iter().map(|s| s.transcription.len()).sum();
        info!(
            system = %system,
            samples = samples.len(),
            transcribed_chars,
            steps,
            "training started"
        );

        for step in 1..=steps {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!(system = %system, step, "training cancelled");
                    return Err(ShorthandError::Cancelled);
                }
                _ = tokio::time::sleep(self.config.step_delay) => {}
            }

            let event = TrainingProgress {
                step,
                steps,
                percent: (u64::from(step) * 100 / u64::from(steps)) as u8,
            };
            if let Some(tx) = progress
                && tx.send(event).await.is_err()
            {
                debug!(system = %system, "progress receiver dropped");
            }
        }

        let model = TrainedModel {
            model_id: format!(
                "{}_{}",
                system.key().to_lowercase(),
                Utc::now().timestamp_millis()
            ),
            accuracy: scorer.training_accuracy(system, samples.len()),
            patterns: canonical_patterns(system),
        };
        info!(
            system = %system,
            model_id = %model.model_id,
            accuracy = model.accuracy,
            "training finished"
        );
        Ok(model)
    }
}

impl Default for TrainingJob {
    fn default() -> Self {
        Self::new(TrainingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::PlaceholderScorer;
    use shorthand_types::ImageFile;

    fn samples(n: usize) -> Vec<TrainingSample> {
        (0..n)
            .map(|i| {
                TrainingSample::new(
                    ImageFile::new(format!("{i}.png"), "image/png", vec![1, 2, 3]),
                    format!("sample {i}"),
                    "data:image/png;base64,AQID",
                )
            })
            .collect()
    }

    fn fast_job(steps: u32) -> TrainingJob {
        TrainingJob::new(TrainingConfig {
            steps,
            step_delay: Duration::from_millis(1),
        })
    }

    #[tokio::test]
    async fn completes_with_model() {
        let scorer = PlaceholderScorer::seeded(3);
        let cancel = CancellationToken::new();
        let model = fast_job(4)
            .run(ShorthandSystem::Pitman, &samples(3), &scorer, &cancel, None)
            .await
            .unwrap();
        assert!(model.model_id.starts_with("pitman_"));
        assert!((85.0..95.0).contains(&model.accuracy));
        assert_eq!(model.patterns, canonical_patterns(ShorthandSystem::Pitman));
    }

    #[tokio::test]
    async fn progress_is_monotonic_and_ends_at_100() {
        let scorer = PlaceholderScorer::seeded(3);
        let cancel = CancellationToken::new();
        let (tx, mut rx) = mpsc::channel(32);

        fast_job(10)
            .run(ShorthandSystem::Teeline, &samples(3), &scorer, &cancel, Some(&tx))
            .await
            .unwrap();
        drop(tx);

        let mut percents = Vec::new();
        while let Some(ev) = rx.recv().await {
            percents.push(ev.percent);
        }
        assert_eq!(percents, [10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[tokio::test]
    async fn uneven_steps_still_reach_100() {
        let scorer = PlaceholderScorer::seeded(3);
        let cancel = CancellationToken::new();
        let (tx, mut rx) = mpsc::channel(8);
        fast_job(3)
            .run(ShorthandSystem::Gregg, &samples(3), &scorer, &cancel, Some(&tx))
            .await
            .unwrap();
        drop(tx);
        let mut last = None;
        while let Some(ev) = rx.recv().await {
            last = Some(ev);
        }
        let last = last.unwrap();
        assert_eq!((last.step, last.steps, last.percent), (3, 3, 100));
    }

    #[tokio::test]
    async fn cancelled_before_start() {
        let scorer = PlaceholderScorer::seeded(3);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = TrainingJob::new(TrainingConfig {
            steps: 10,
            step_delay: Duration::from_secs(60),
        })
        .run(ShorthandSystem::Gregg, &samples(3), &scorer, &cancel, None)
        .await
        .unwrap_err();
        assert!(matches!(err, ShorthandError::Cancelled));
    }

    #[tokio::test]
    async fn cancelled_mid_run() {
        let scorer = PlaceholderScorer::seeded(3);
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });
        let err = TrainingJob::new(TrainingConfig {
            steps: 10,
            step_delay: Duration::from_secs(30),
        })
        .run(ShorthandSystem::Teeline, &samples(3), &scorer, &cancel, None)
        .await
        .unwrap_err();
        assert!(matches!(err, ShorthandError::Cancelled));
    }

    #[tokio::test]
    async fn dropped_receiver_does_not_abort() {
        let scorer = PlaceholderScorer::seeded(3);
        let cancel = CancellationToken::new();
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let result = fast_job(3)
            .run(ShorthandSystem::Teeline, &samples(3), &scorer, &cancel, Some(&tx))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn empty_samples_rejected() {
        let scorer = PlaceholderScorer::seeded(3);
        let cancel = CancellationToken::new();
        let err = fast_job(1)
            .run(ShorthandSystem::Teeline, &[], &scorer, &cancel, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ShorthandError::Validation(_)));
    }

    #[test]
    fn config_from_section() {
        let config = TrainingConfig::from(&TrainingSection {
            steps: 4,
            step_delay_ms: 50,
        });
        assert_eq!(config.steps, 4);
        assert_eq!(config.step_delay, Duration::from_millis(50));
    }
}
