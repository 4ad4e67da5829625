//! Shorthand decoding service.
//!
//! This crate talks to a multimodal `generateContent` endpoint to turn
//! photographs of shorthand into text, and hosts the simulated training
//! job that personalizes a user's profile.
//!
//! # Architecture
//!
//! - [`VisionProvider`] trait defines the generation call
//! - [`GeminiProvider`] implements it over HTTP with reqwest
//! - [`ResponseScorer`] turns a response into confidence and patterns
//! - [`TrainingJob`] runs cancellable training with progress events
//! - [`ShorthandService`] ties them together behind result envelopes
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use shorthand_llm::{GeminiProvider, ShorthandService, VisionConfig};
//! use shorthand_types::ShorthandSystem;
//!
//! let provider = GeminiProvider::from_env(VisionConfig::gemini())?;
//! let service = ShorthandService::new(provider);
//!
//! let result = service
//!     .decode_image("data:image/jpeg;base64,/9j/4AAQ...", ShorthandSystem::Teeline, None)
//!     .await;
//! if let Some(decoded) = result.success() {
//!     println!("{} ({}%)", decoded.decoded_text, decoded.confidence);
//! }
//! ```

pub mod config;
pub mod error;
pub mod gemini;
pub mod provider;
pub mod scoring;
pub mod service;
pub mod training;
pub mod types;

pub use config::VisionConfig;
pub use error::{ProviderError, Result};
pub use gemini::GeminiProvider;
pub use provider::VisionProvider;
pub use scoring::{PlaceholderScorer, ResponseScorer};
pub use service::{ShorthandService, accuracy_metrics, export_model, import_model};
pub use training::{TrainingConfig, TrainingJob, TrainingProgress};
pub use types::{GenerateContentRequest, GenerateContentResponse};
