use async_trait::async_trait;

use crate::errors::LlmError;

/// Outbound chat-completion boundary.
///
/// The API key is supplied per call: it arrives with each form submission
/// and is passed through unmodified, the backend holds no credential of its
/// own.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Produce the raw completion text for `prompt`.
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String, LlmError>;
}
