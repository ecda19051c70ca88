use axum::extract::State;
use axum::http::StatusCode;

use crate::server::AppState;

/// GET /livez
pub async fn livez() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// GET /readyz
///
/// The process starts without a provider credential, but cannot relay
/// anything useful until one is configured.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.credential_configured {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "provider credential not configured")
    }
}
