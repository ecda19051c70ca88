//! Gemini provider over the REST `generateContent` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use super::error::LLMError;
use super::provider::LLMProvider;
use super::types::GenerateContentRequest;
use crate::config::UpstreamConfig;

/// Header carrying the Gemini API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini provider bound to one model endpoint.
pub struct GeminiProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl GeminiProvider {
    #[must_use]
    pub fn new(client: Client, endpoint: String, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            timeout,
        }
    }

    /// Build a provider for the configured model.
    #[must_use]
    pub fn from_config(config: &UpstreamConfig, api_key: Option<String>) -> Self {
        Self::new(
            Client::new(),
            config.endpoint(),
            api_key,
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request(&self, body: &GenerateContentRequest) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .timeout(self.timeout);

        if let Some(ref key) = self.api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        builder.json(body)
    }

    fn map_request_error(&self, err: reqwest::Error) -> LLMError {
        if err.is_timeout() {
            LLMError::Timeout {
                secs: self.timeout.as_secs(),
            }
        } else {
            LLMError::Request(err)
        }
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<serde_json::Value, LLMError> {
        let response = self
            .build_request(&request)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!(status, error = %e, "Failed to read provider error body");
                    String::new()
                }
            };
            return Err(LLMError::Api { status, message });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_request_error(e))?;
        Ok(serde_json::from_slice(&body)?)
    }
}
