//! Error types for the shorthand toolkit.
//!
//! [`ShorthandError`] is the single error taxonomy shared by every crate in
//! the workspace. Service operations convert it into a failure-shaped
//! [`Outcome`](crate::outcome::Outcome) at their boundary, so callers see a
//! message rather than a propagated fault.

use thiserror::Error;

/// Top-level error type for shorthand operations.
///
/// Validation errors are raised before any network activity. Transport and
/// parse errors come from the generation endpoint or from import paths.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ShorthandError {
    /// Bad input: wrong file type or size, empty required field, unknown
    /// shorthand system.
    #[error("{0}")]
    Validation(String),

    /// Network failure or a non-2xx HTTP status from the endpoint.
    #[error("{}", transport_message(*status, message))]
    Transport {
        /// HTTP status, when the server answered at all.
        status: Option<u16>,
        /// Human-readable detail.
        message: String,
    },

    /// Malformed JSON or an unexpected response shape.
    #[error("{0}")]
    Parse(String),

    /// A required setting (usually the API key) is missing.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The operation was cancelled before it finished.
    #[error("operation cancelled")]
    Cancelled,

    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn transport_message(status: Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("HTTP error! status: {code}"),
        None => format!("network error: {message}"),
    }
}

impl ShorthandError {
    /// Shorthand for a [`ShorthandError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Shorthand for a [`ShorthandError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Returns the HTTP status for transport errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

/// A convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ShorthandError>;
