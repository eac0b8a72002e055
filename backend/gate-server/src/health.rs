use crate::AppState;

use std::time::SystemTime;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "identity_source": state.identity_source.mode().to_string(),
            "classifier": state.gateway.endpoint_url(),
        },
        "timestamp": humantime::format_rfc3339_seconds(SystemTime::now()).to_string(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Kubernetes liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Kubernetes readiness probe (ready to accept traffic?)
///
/// The classifier endpoint is not probed; an unreachable model still
/// yields the `Error` label rather than a failed request.
pub async fn readiness_check() -> Response {
    (StatusCode::OK, "Ready").into_response()
}
