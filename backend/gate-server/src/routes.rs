use crate::{
    AppState,
    api::{classify, session},
    health,
    pages::{classifier, login},
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Room for multipart boundaries and part headers around the uploaded image
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.classifier.max_upload_bytes;
    let form_limit = body_limit.saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        // Login gate
        .route("/", get(login::login_page))
        .route("/login", get(login::begin_login))
        .route("/logout", get(login::begin_logout))
        // Classifier page
        .route("/app", get(classifier::classifier_page))
        .route(
            "/app/classify",
            post(classifier::submit_image).layer(DefaultBodyLimit::max(form_limit)),
        )
        // JSON API
        .route("/api/v1/session", get(session::get_session))
        .route("/api/v1/classify", post(classify::classify_image))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
