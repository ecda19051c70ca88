//! LLM provider trait.

use async_trait::async_trait;

use super::error::LLMError;
use super::types::GenerateContentRequest;

/// Trait for upstream providers the relay can forward to.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Make one `generateContent` call and return the parsed JSON body.
    ///
    /// Non-success statuses come back as [`LLMError::Api`] with the raw body.
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<serde_json::Value, LLMError>;
}
