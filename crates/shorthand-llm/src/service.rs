//! The shorthand decoding service.
//!
//! [`ShorthandService`] turns shorthand images into text through a
//! [`VisionProvider`], runs the simulated training job, and produces model
//! exports and accuracy reports. Every operation returns an [`Outcome`] (or a
//! plain value) and never propagates errors to the caller.

use std::sync::Arc;
use std::time::Instant;

use chrono::{Duration as ChronoDuration, NaiveDate, Utc};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use shorthand_types::config::Config;
use shorthand_types::results::{
    AccuracyMetrics, AccuracyPoint, CorrectionAck, CorrectionResult, DecodeResult,
    DecodedShorthand, EXPORT_VERSION, ImportResult, ImportedModel, ModelExport, TimeRange,
    TrainResult, TrainedModel,
};
use shorthand_types::{Outcome, Result, ShorthandError, ShorthandSystem, TrainingSample, UserProfile};

use crate::config::VisionConfig;
use crate::gemini::GeminiProvider;
use crate::provider::VisionProvider;
use crate::scoring::{PlaceholderScorer, ResponseScorer};
use crate::training::{TrainingConfig, TrainingJob, TrainingProgress};
use crate::types::GenerateContentRequest;

/// MIME type declared for every inline image, whatever the upload was.
const INLINE_IMAGE_MIME: &str = "image/jpeg";

/// Opaque payload written into model exports until real weights exist.
const MODEL_DATA_PLACEHOLDER: &str = "compressed_model_data_here";

const CORRECTION_MESSAGE: &str = "Model updated with correction";

const INVALID_MODEL_DATA: &str = "Invalid model data";

pub struct ShorthandService<P: VisionProvider> {
    provider: P,
    scorer: Arc<dyn ResponseScorer>,
    training: TrainingJob,
}

impl ShorthandService<GeminiProvider> {
    /// Build a Gemini-backed service from the loaded configuration.
    ///
    /// An inline `vision.apiKey` wins over the environment variable. A
    /// missing key is a [`ShorthandError::Configuration`] error.
    pub fn from_config(config: &Config) -> Result<Self> {
        let vision = VisionConfig::from(&config.vision);
        let provider = if config.vision.api_key.is_empty() {
            GeminiProvider::from_env(vision)?
        } else {
            GeminiProvider::with_api_key(vision, config.vision.api_key.clone())?
        };
        Ok(Self::new(provider).with_training(TrainingConfig::from(&config.training)))
    }
}

impl<P: VisionProvider> ShorthandService<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            scorer: Arc::new(PlaceholderScorer::new()),
            training: TrainingJob::default(),
        }
    }

    pub fn with_scorer(mut self, scorer: Arc<dyn ResponseScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_training(mut self, config: TrainingConfig) -> Self {
        self.training = TrainingJob::new(config);
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Decode a `data:` URI holding a shorthand image.
    pub async fn decode_image(
        &self,
        image_data: &str,
        system: ShorthandSystem,
        profile: Option<&UserProfile>,
    ) -> DecodeResult {
        match self.decode_inner(image_data, system, profile).await {
            Ok(decoded) => Outcome::Success(decoded),
            Err(e) => {
                warn!(system = %system, error = %e, "decode failed");
                Outcome::Failure(e.to_string())
            }
        }
    }

    async fn decode_inner(
        &self,
        image_data: &str,
        system: ShorthandSystem,
        profile: Option<&UserProfile>,
    ) -> Result<DecodedShorthand> {
        let Some((_, base64_data)) = image_data.split_once(',') else {
            return Err(ShorthandError::validation(
                "image data must be a data URI with a base64 payload",
            ));
        };

        if let Some(profile) = profile {
            debug!(
                system = %system,
                accuracy = profile.accuracy,
                samples = profile.samples_count,
                "decoding with user profile"
            );
        }

        let request = GenerateContentRequest::with_image(
            decode_instruction(system),
            INLINE_IMAGE_MIME,
            base64_data,
        );

        let started = Instant::now();
        let response = self.provider.generate(&request).await?;
        let processing_time = started.elapsed().as_millis() as u64;

        let decoded_text = response
            .first_text()
            .ok_or_else(|| ShorthandError::parse("response contained no decoded text"))?
            .to_string();

        let decoded = DecodedShorthand {
            decoded_text,
            confidence: self.scorer.confidence(&response),
            processing_time,
            patterns: self.scorer.patterns(&response, system),
        };
        info!(
            system = %system,
            provider = self.provider.name(),
            confidence = decoded.confidence,
            elapsed_ms = processing_time,
            "decoded shorthand image"
        );
        Ok(decoded)
    }

    /// Train on the given samples with no progress listener.
    pub async fn train_shorthand_model(
        &self,
        system: ShorthandSystem,
        samples: &[TrainingSample],
    ) -> TrainResult {
        let cancel = CancellationToken::new();
        self.train_with_progress(system, samples, &cancel, None).await
    }

    /// Train on the given samples, reporting progress and honoring `cancel`.
    pub async fn train_with_progress(
        &self,
        system: ShorthandSystem,
        samples: &[TrainingSample],
        cancel: &CancellationToken,
        progress: Option<&mpsc::Sender<TrainingProgress>>,
    ) -> TrainResult {
        let result: Result<TrainedModel> = self
            .training
            .run(system, samples, self.scorer.as_ref(), cancel, progress)
            .await;
        if let Err(e) = &result {
            warn!(system = %system, error = %e, "training failed");
        }
        result.into()
    }

    /// Record a user correction. Always succeeds.
    pub async fn improve_from_correction(
        &self,
        original: &str,
        corrected: &str,
        system: ShorthandSystem,
    ) -> CorrectionResult {
        info!(
            system = %system,
            original_len = original.len(),
            corrected_len = corrected.len(),
            "correction received"
        );
        Outcome::Success(CorrectionAck {
            message: CORRECTION_MESSAGE.into(),
        })
    }

    /// Accuracy history for `system`, restricted to `range`.
    pub async fn get_accuracy_metrics(
        &self,
        system: ShorthandSystem,
        range: TimeRange,
    ) -> AccuracyMetrics {
        accuracy_metrics(system, range)
    }

    pub async fn export_user_model(&self, system: ShorthandSystem) -> ModelExport {
        export_model(system)
    }

    pub async fn import_user_model(&self, serialized: &str) -> ImportResult {
        import_model(serialized)
    }
}

/// Accuracy history for `system`, restricted to `range`.
///
/// Needs no provider, so callers without an API key can report metrics.
pub fn accuracy_metrics(system: ShorthandSystem, range: TimeRange) -> AccuracyMetrics {
    let history = window(recorded_history(), range);
    debug!(system = %system, range = %range, points = history.len(), "accuracy metrics");
    AccuracyMetrics {
        current: 87.0,
        trend: "+5%".into(),
        history,
    }
}

/// Snapshot the personal model for `system`.
pub fn export_model(system: ShorthandSystem) -> ModelExport {
    info!(system = %system, "exporting user model");
    ModelExport {
        system,
        version: EXPORT_VERSION.into(),
        export_date: Utc::now(),
        model_data: MODEL_DATA_PLACEHOLDER.into(),
    }
}

/// Parse a model written by [`export_model`].
pub fn import_model(serialized: &str) -> ImportResult {
    match serde_json::from_str::<ModelExport>(serialized) {
        Ok(export) => {
            info!(system = %export.system, version = %export.version, "imported user model");
            Outcome::Success(ImportedModel {
                system: export.system,
                version: export.version,
            })
        }
        Err(e) => {
            warn!(error = %e, "model import rejected");
            Outcome::Failure(INVALID_MODEL_DATA.into())
        }
    }
}

fn decode_instruction(system: ShorthandSystem) -> String {
    format!(
        "Analyze this {system} shorthand image and decode it to text. Consider the user's \
         writing style and previous patterns. Provide confidence scores for each recognized \
         element."
    )
}

fn recorded_history() -> Vec<AccuracyPoint> {
    [(2024, 1, 1, 75.0), (2024, 1, 15, 82.0), (2024, 2, 1, 87.0)]
        .into_iter()
        .filter_map(|(y, m, d, accuracy)| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| AccuracyPoint { date, accuracy })
        })
        .collect()
}

/// Drop points older than the window, measured back from the newest point.
fn window(history: Vec<AccuracyPoint>, range: TimeRange) -> Vec<AccuracyPoint> {
    let (Some(days), Some(newest)) = (range.days(), history.iter().map(|p| p.date).max()) else {
        return history;
    };
    let cutoff = newest - ChronoDuration::days(days);
    history.into_iter().filter(|p| p.date >= cutoff).collect()
}
