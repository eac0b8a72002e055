//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use gate_auth::AuthError;
use gate_classify::ClassifyError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "UNAUTHORIZED", "RATE_LIMITED")
    pub code: String,
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No signed-in viewer (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Upload type outside the accepted set (400)
    #[error("Invalid file type : {content_type} {location}")]
    UnsupportedImageType {
        content_type: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Upload larger than the configured limit (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// Per-viewer quota exhausted (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::UnsupportedImageType { .. } | ApiError::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message,
            },
            ApiError::UnsupportedImageType { content_type, .. } => ApiErrorBody {
                code: "UNSUPPORTED_IMAGE_TYPE".into(),
                message: format!("Invalid file type : {content_type}"),
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
            },
            ApiError::PayloadTooLarge { message, .. } => ApiErrorBody {
                code: "PAYLOAD_TOO_LARGE".into(),
                message,
            },
            ApiError::RateLimited { message, .. } => ApiErrorBody {
                code: "RATE_LIMITED".into(),
                message,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Only type rejections surface as API errors; transport failures are
/// reported through the `Error` prediction instead.
impl From<ClassifyError> for ApiError {
    #[track_caller]
    fn from(e: ClassifyError) -> Self {
        match e {
            ClassifyError::UnsupportedImageType { content_type, .. } => {
                ApiError::UnsupportedImageType {
                    content_type,
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            other => ApiError::Internal {
                message: other.diagnostic(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::RateLimitExceeded {
                limit, window_secs, ..
            } => ApiError::RateLimited {
                message: format!(
                    "Too many classifications: at most {limit} per {window_secs}s"
                ),
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::Unauthorized {
                message: other.error_code().to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<BytesRejection> for ApiError {
    #[track_caller]
    fn from(rejection: BytesRejection) -> Self {
        let message = rejection.body_text();
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge {
                message,
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ApiError::BadRequest {
                message,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
