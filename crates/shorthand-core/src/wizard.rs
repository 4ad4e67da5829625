//! Training-sample collection wizard.
//!
//! The wizard walks the user through Upload -> Transcribe -> Verify for
//! each sample and holds the collected samples until training starts.
//! Samples are discarded when they are handed to the trainer.

use tracing::debug;
use uuid::Uuid;

use shorthand_types::{ImageFile, Result, ShorthandError, ShorthandSystem, TrainingSample};

use crate::image::{to_data_uri, validate_image_for_shorthand};
use crate::progress::{TrainingEstimate, estimate_training_progress};

/// Fewest samples a training run accepts.
pub const MIN_TRAINING_SAMPLES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    Upload,
    Transcribe,
    Verify,
}

impl WizardStep {
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Upload => "Upload Shorthand",
            WizardStep::Transcribe => "Add Transcription",
            WizardStep::Verify => "Verify & Train",
        }
    }

    fn next(self) -> Self {
        match self {
            WizardStep::Upload => WizardStep::Transcribe,
            WizardStep::Transcribe | WizardStep::Verify => WizardStep::Verify,
        }
    }

    fn prev(self) -> Self {
        match self {
            WizardStep::Upload | WizardStep::Transcribe => WizardStep::Upload,
            WizardStep::Verify => WizardStep::Transcribe,
        }
    }
}

/// The sample currently being assembled.
#[derive(Debug, Clone, Default)]
struct Draft {
    image: Option<ImageFile>,
    preview: Option<String>,
    transcription: String,
}

#[derive(Debug, Clone)]
pub struct TrainingWizard {
    system: ShorthandSystem,
    step: WizardStep,
    draft: Draft,
    samples: Vec<TrainingSample>,
}

impl TrainingWizard {
    pub fn new(system: ShorthandSystem) -> Self {
        Self {
            system,
            step: WizardStep::Upload,
            draft: Draft::default(),
            samples: Vec::new(),
        }
    }

    pub fn system(&self) -> ShorthandSystem {
        self.system
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn next_step(&mut self) -> WizardStep {
        self.step = self.step.next();
        self.step
    }

    pub fn prev_step(&mut self) -> WizardStep {
        self.step = self.step.prev();
        self.step
    }

    /// Attach an image to the draft. Invalid images are rejected and the
    /// draft is left unchanged.
    pub fn set_image(&mut self, image: ImageFile) -> Result<()> {
        validate_image_for_shorthand(&image).into_result()?;
        self.draft.preview = Some(to_data_uri(&image));
        self.draft.image = Some(image);
        Ok(())
    }

    pub fn set_transcription(&mut self, text: impl Into<String>) {
        self.draft.transcription = text.into();
    }

    /// Preview data URI of the draft image, if one is attached.
    pub fn preview(&self) -> Option<&str> {
        self.draft.preview.as_deref()
    }

    /// Commit the draft as a sample and return to the upload step.
    pub fn add_sample(&mut self) -> Result<Uuid> {
        if self.draft.transcription.trim().is_empty() {
            return Err(ShorthandError::validation("A transcription is required"));
        }
        let draft = std::mem::take(&mut self.draft);
        let (Some(image), Some(preview)) = (draft.image, draft.preview) else {
            self.draft.transcription = draft.transcription;
            return Err(ShorthandError::validation("An image is required"));
        };

        let sample = TrainingSample::new(image, draft.transcription, preview);
        let id = sample.id;
        debug!(system = %self.system, sample = %id, "added training sample");
        self.samples.push(sample);
        self.step = WizardStep::Upload;
        Ok(id)
    }

    /// Drop a collected sample. Returns whether it existed.
    pub fn remove_sample(&mut self, id: Uuid) -> bool {
        let before = self.samples.len();
        self.samples.retain(|s| s.id != id);
        self.samples.len() != before
    }

    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    pub fn ready_to_train(&self) -> bool {
        self.samples.len() >= MIN_TRAINING_SAMPLES
    }

    pub fn estimate(&self, target_accuracy: f64) -> TrainingEstimate {
        let count = u32::try_from(self.samples.len()).unwrap_or(u32::MAX);
        estimate_training_progress(count, target_accuracy)
    }

    /// Hand the collected samples to the trainer, leaving the wizard empty.
    pub fn take_samples(&mut self) -> Result<Vec<TrainingSample>> {
        if !self.ready_to_train() {
            return Err(ShorthandError::validation(format!(
                "at least {MIN_TRAINING_SAMPLES} training samples are required (have {})",
                self.samples.len()
            )));
        }
        self.step = WizardStep::Upload;
        self.draft = Draft::default();
        Ok(std::mem::take(&mut self.samples))
    }
}
