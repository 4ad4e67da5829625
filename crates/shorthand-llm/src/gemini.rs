//! HTTP provider for the Gemini `generateContent` endpoint.
//!
//! Requests are `POST {base_url}?key={api_key}` with a JSON body. The key
//! is resolved once, at construction, so a missing credential fails before
//! any request is attempted.

use async_trait::async_trait;
use tracing::{debug, warn};

use shorthand_types::secret::ApiKey;

use crate::config::VisionConfig;
use crate::error::{ProviderError, Result};
use crate::provider::VisionProvider;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

pub struct GeminiProvider {
    config: VisionConfig,
    http: reqwest::Client,
    api_key: ApiKey,
}

impl GeminiProvider {
    /// Create a provider, reading the key from `config.api_key_env`.
    pub fn from_env(config: VisionConfig) -> Result<Self> {
        let key = std::env::var(&config.api_key_env).unwrap_or_default();
        Self::with_api_key(config, ApiKey::new(key))
    }

    /// Create a provider with an explicit key. An empty key is rejected.
    pub fn with_api_key(config: VisionConfig, api_key: ApiKey) -> Result<Self> {
        if api_key.is_empty() {
            return Err(ProviderError::NotConfigured(format!(
                "set {} env var",
                config.api_key_env
            )));
        }
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            config,
            http,
            api_key,
        })
    }

    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    fn endpoint(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }
}

#[async_trait]
impl VisionProvider for GeminiProvider {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn generate(&self, request: &GenerateContentRequest) -> Result<GenerateContentResponse> {
        debug!(
            provider = %self.config.name,
            parts = request.contents.iter().map(|c| c.parts.len()).sum::<usize>(),
            "sending generateContent request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.expose())])
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Http(e.without_url()))?;

        if !status.is_success() {
            warn!(
                provider = %self.config.name,
                status = status.as_u16(),
                "generation request failed"
            );
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::InvalidResponse(format!("failed to parse response: {e}"))
        })?;

        debug!(
            provider = %self.config.name,
            candidates = parsed.candidates.len(),
            "generateContent response received"
        );
        Ok(parsed)
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("name", &self.config.name)
            .field("base_url", &self.config.base_url)
            .field("api_key", &self.api_key)
            .finish()
    }
}
