//! The chat relay: validates a local message, forwards it upstream, and maps
//! whatever comes back onto a small set of client-facing outcomes.

use std::sync::Arc;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, error};

use crate::llm::{GenerateContentRequest, GenerateContentResponse, LLMError, LLMProvider};

/// Terminal outcome of one relayed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Reply text extracted from the provider response.
    Success { reply: String },
    /// The request carried no usable message. Upstream was not contacted.
    BadRequest,
    /// The provider answered with a non-success status, or did not answer in time.
    UpstreamError { status: u16, detail: String },
    /// Anything else that went wrong while handling the request.
    InternalError { detail: String },
}

impl RelayOutcome {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayOutcome::Success { .. } => StatusCode::OK,
            RelayOutcome::BadRequest => StatusCode::BAD_REQUEST,
            RelayOutcome::UpstreamError { .. } => StatusCode::BAD_GATEWAY,
            RelayOutcome::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body sent to the client.
    pub fn body(&self) -> Value {
        match self {
            RelayOutcome::Success { reply } => json!({ "reply": reply }),
            RelayOutcome::BadRequest => json!({ "error": "empty message" }),
            RelayOutcome::UpstreamError { status, detail } => json!({
                "error": "provider error",
                "status": status,
                "detail": detail,
            }),
            RelayOutcome::InternalError { detail } => json!({
                "error": "internal error",
                "detail": detail,
            }),
        }
    }
}

impl IntoResponse for RelayOutcome {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

/// Forwards single chat messages to an upstream provider.
#[derive(Clone)]
pub struct ChatRelay {
    provider: Arc<dyn LLMProvider>,
}

impl ChatRelay {
    pub fn new(provider: Arc<dyn LLMProvider>) -> Self {
        Self { provider }
    }

    /// Handle one incoming request body.
    ///
    /// Never fails: every error is folded into a [`RelayOutcome`].
    pub async fn handle(&self, incoming: &Value) -> RelayOutcome {
        let message = coerce_message(incoming.get("message"));
        if message.is_empty() {
            return RelayOutcome::BadRequest;
        }

        let request = GenerateContentRequest::from_text(message);
        match self.provider.generate_content(request).await {
            Ok(body) => RelayOutcome::Success {
                reply: extract_reply(&body),
            },
            Err(LLMError::Api { status, message }) => {
                error!(status, body = %message, "Provider returned an error");
                RelayOutcome::UpstreamError {
                    status,
                    detail: message,
                }
            }
            Err(e @ LLMError::Timeout { .. }) => {
                error!(error = %e, "Provider call timed out");
                RelayOutcome::UpstreamError {
                    status: LLMError::TIMEOUT_STATUS,
                    detail: e.to_string(),
                }
            }
            Err(e) => {
                error!(error = %e, "Chat relay failed");
                RelayOutcome::InternalError {
                    detail: e.to_string(),
                }
            }
        }
    }
}

/// Coerce the `message` field to a string. Empty means "no message".
///
/// Falsy JSON values (`null`, `false`, `0`, `""`) count as absent. Arrays are
/// flattened into their elements joined with `,`, with `null` elements left
/// empty, so `[]` and `[""]` are absent too. Objects are forwarded as their
/// compact JSON text.
pub fn coerce_message(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(other) => stringify(other),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Pull reply text out of a successful provider body.
///
/// Falls back to the serialized body itself when no candidate text can be
/// found, so the client always receives something.
pub fn extract_reply(body: &Value) -> String {
    let text = GenerateContentResponse::deserialize(body)
        .ok()
        .and_then(|r| r.reply_text());

    match text {
        Some(text) => text,
        None => {
            debug!("No candidate text in provider response, returning raw body");
            body.to_string()
        }
    }
}
