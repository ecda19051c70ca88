use std::path::Path;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::relay::ChatRelay;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub relay: ChatRelay,
    pub credential_configured: bool,
}

/// Build the router: the chat API, health probes, and static files at `/`.
pub fn build_app(state: AppState, request_timeout_secs: u64, static_dir: &Path) -> Router {
    Router::new()
        .route("/livez", get(handlers::livez))
        .route("/readyz", get(handlers::readyz))
        .route("/version", get(handlers::version))
        .route("/api/chat", post(handlers::chat))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
        .with_state(state)
}
