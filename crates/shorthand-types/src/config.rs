//! Configuration schema.
//!
//! Loaded from JSON (`~/.shorthand/config.json` or `SHORTHAND_CONFIG`).
//! Every field has a default, so an empty object is a valid config. Keys are
//! camelCase; snake_case aliases are accepted.

use serde::{Deserialize, Serialize};

use crate::secret::ApiKey;
use crate::system::ShorthandSystem;

/// Default generation endpoint.
pub const DEFAULT_BASE_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro-vision:generateContent";

/// Environment variable holding the endpoint API key.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vision: VisionSection,
    pub training: TrainingSection,
    pub defaults: DefaultsSection,
}

/// How to reach the generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisionSection {
    #[serde(alias = "base_url")]
    pub base_url: String,

    /// Environment variable to read the key from.
    #[serde(alias = "api_key_env")]
    pub api_key_env: String,

    /// Inline key; takes precedence over `api_key_env` when non-empty.
    #[serde(alias = "api_key")]
    pub api_key: ApiKey,

    #[serde(alias = "timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for VisionSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            api_key: ApiKey::default(),
            timeout_secs: 60,
        }
    }
}

/// Pacing of the simulated training job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrainingSection {
    pub steps: u32,
    #[serde(alias = "step_delay_ms")]
    pub step_delay_ms: u64,
}

impl Default for TrainingSection {
    fn default() -> Self {
        Self {
            steps: 10,
            step_delay_ms: 200,
        }
    }
}

/// Defaults for CLI arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DefaultsSection {
    pub system: ShorthandSystem,
    #[serde(alias = "target_accuracy")]
    pub target_accuracy: f64,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            system: ShorthandSystem::Teeline,
            target_accuracy: 90.0,
        }
    }
}
