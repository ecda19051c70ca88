//! LLM error types.

use thiserror::Error;

/// Errors that can occur when calling the upstream provider.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request failed
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The upstream call did not complete in time
    #[error("upstream call timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Response body was not valid JSON
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LLMError {
    /// Status reported to the client for a timed-out upstream call.
    pub const TIMEOUT_STATUS: u16 = 504;
}
