use crate::{ApiError, ApiResult, AppState, Viewer};

use gate_classify::{PredictionBody, validate_image_type};

use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use log::{info, warn};

/// POST /api/v1/classify
///
/// Body is the raw image; `Content-Type` names its type. Transport
/// failures still answer 200 with the `Error` label and a diagnostic.
pub async fn classify_image(
    State(state): State<AppState>,
    viewer: Viewer,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<PredictionBody>> {
    if !viewer.is_authenticated() {
        return Err(ApiError::unauthorized("Please log in to access the App"));
    }

    let body = body?;

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::bad_request("Content-Type header is required"))?;

    validate_image_type(content_type, &state.classifier.accepted_types)?;

    if body.is_empty() {
        return Err(ApiError::bad_request("Request body is empty"));
    }

    let viewer_key = viewer.rate_limit_key(&state);
    if let Err(e) = state.rate_limiter.check(&viewer_key) {
        warn!("Classification quota exhausted for '{viewer_key}'");
        return Err(e.into());
    }

    info!(
        "Classifying {} bytes of {content_type} for '{viewer_key}'",
        body.len()
    );
    let prediction = state.gateway.classify(&body).await;

    Ok(Json(prediction.to_body()))
}
