//! Provider error types for shorthand-llm.
//!
//! [`ProviderError`] describes what went wrong talking to the generation
//! endpoint. The service folds it into the workspace-wide
//! [`ShorthandError`] taxonomy before turning it into a failure result.

use thiserror::Error;

use shorthand_types::ShorthandError;

/// Errors from a [`VisionProvider`](crate::provider::VisionProvider).
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status {
        status: u16,
        /// Response body, kept for logging.
        body: String,
    },

    /// No API key is available.
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// A 2xx response whose body does not have the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Network-level failure from reqwest.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

impl From<ProviderError> for ShorthandError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Status { status, body } => ShorthandError::Transport {
                status: Some(status),
                message: body,
            },
            // The request URL carries the API key as a query parameter.
            ProviderError::Http(e) => {
                let e = e.without_url();
                ShorthandError::Transport {
                    status: e.status().map(|s| s.as_u16()),
                    message: e.to_string(),
                }
            }
            ProviderError::NotConfigured(msg) => ShorthandError::Configuration(msg),
            ProviderError::InvalidResponse(msg) => ShorthandError::Parse(msg),
            ProviderError::Json(e) => ShorthandError::Parse(e.to_string()),
        }
    }
}
