//! Utility layer for the shorthand toolkit.
//!
//! Side-effect-free helpers around the data model, plus file export and
//! import:
//!
//! - [`image`] -- upload validation, loading and data-URI encoding
//! - [`metrics`] -- reading speed and confidence labels
//! - [`tips`] -- practice tips per system and accuracy tier
//! - [`progress`] -- training-progress estimate
//! - [`export`] -- profile/history export and import
//! - [`library`] -- pattern library search and summary
//! - [`wizard`] -- training-sample collection

pub mod export;
pub mod image;
pub mod library;
pub mod metrics;
pub mod progress;
pub mod tips;
pub mod wizard;

pub use export::{ShorthandExport, export_shorthand_data, import_shorthand_data};
pub use image::{ImageValidation, validate_image_for_shorthand};
pub use metrics::{calculate_reading_speed, format_confidence_score};
pub use progress::{TrainingEstimate, estimate_training_progress};
pub use tips::generate_shorthand_tips;
pub use wizard::{MIN_TRAINING_SAMPLES, TrainingWizard};
