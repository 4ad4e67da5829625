//! The [`VisionProvider`] trait for multimodal generation calls.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Something that can answer a `generateContent` request.
///
/// [`GeminiProvider`](crate::gemini::GeminiProvider) is the HTTP
/// implementation. Tests substitute in-process fakes.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Provider name for logs (e.g. "gemini").
    fn name(&self) -> &str;

    /// Execute one generation request.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`](crate::error::ProviderError) on network
    /// failure, non-2xx status or an unparseable body.
    async fn generate(&self, request: &GenerateContentRequest) -> Result<GenerateContentResponse>;
}
