//! Chat relay HTTP handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::server::AppState;

/// POST /api/chat
///
/// Request body: `{"message": "..."}`. The body is read leniently: anything
/// that is not JSON is treated as a request without a message. A body that
/// cannot be read at all (e.g. over the size limit) gets a JSON error with the
/// rejection's status.
pub async fn chat(State(state): State<AppState>, body: Result<Bytes, BytesRejection>) -> Response {
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(status = rejection.status().as_u16(), error = %rejection, "Rejected chat request body");
            return (
                rejection.status(),
                Json(json!({
                    "error": "invalid request body",
                    "detail": rejection.body_text(),
                })),
            )
                .into_response();
        }
    };

    let incoming = match serde_json::from_slice::<Value>(&body) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "Chat request body is not JSON");
            Value::Null
        }
    };

    state.relay.handle(&incoming).await.into_response()
}
