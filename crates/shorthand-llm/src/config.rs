//! Endpoint configuration for the vision provider.
//!
//! [`VisionConfig`] says where the generation endpoint lives and which
//! environment variable holds its key. It is built from the user-facing
//! [`VisionSection`] or from [`VisionConfig::gemini`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use shorthand_types::config::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, VisionSection};

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionConfig {
    /// Human-readable provider name used in logs.
    pub name: String,

    /// Full `generateContent` URL; the key is appended as `?key=`.
    pub base_url: String,

    /// Environment variable that holds the API key.
    pub api_key_env: String,

    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl VisionConfig {
    /// The public Gemini vision endpoint.
    pub fn gemini() -> Self {
        Self {
            name: "gemini".into(),
            base_url: DEFAULT_BASE_URL.into(),
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            timeout_secs: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self::gemini()
    }
}

impl From<&VisionSection> for VisionConfig {
    fn from(section: &VisionSection) -> Self {
        Self {
            name: "gemini".into(),
            base_url: section.base_url.clone(),
            api_key_env: section.api_key_env.clone(),
            timeout_secs: Some(section.timeout_secs).filter(|s| *s > 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_defaults() {
        let config = VisionConfig::gemini();
        assert!(config.base_url.ends_with("gemini-pro-vision:generateContent"));
        assert_eq!(config.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn from_section_copies_fields() {
        let section = VisionSection {
            base_url: "http://localhost:9999/generate".into(),
            api_key_env: "LOCAL_KEY".into(),
            timeout_secs: 5,
            ..VisionSection::default()
        };
        let config = VisionConfig::from(&section);
        assert_eq!(config.base_url, "http://localhost:9999/generate");
        assert_eq!(config.api_key_env, "LOCAL_KEY");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn zero_timeout_falls_back_to_default() {
        let section = VisionSection {
            timeout_secs: 0,
            ..VisionSection::default()
        };
        assert_eq!(VisionConfig::from(&section).timeout(), Duration::from_secs(60));
    }

    #[test]
    fn deserialize_minimal() {
        let json = r#"{"name":"local","base_url":"http://x","api_key_env":"K"}"#;
        let config: VisionConfig = serde_json::from_str(json).unwrap();
        assert!(config.timeout_secs.is_none());
    }
}
