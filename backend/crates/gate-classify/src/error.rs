use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while classifying an image
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("Failed to build HTTP client: {source} {location}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Classification request timed out after {timeout_secs}s {location}")]
    Timeout {
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("Classification endpoint returned HTTP {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("Classification response exceeded {limit} bytes {location}")]
    ResponseTooLarge { limit: usize, location: ErrorLocation },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid file type : {content_type} {location}")]
    UnsupportedImageType {
        content_type: String,
        location: ErrorLocation,
    },
}

impl ClassifyError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClassifyError::Http {
            message: err.to_string(),
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClassifyError::Json {
            message: err.to_string(),
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unsupported_type(content_type: impl Into<String>) -> Self {
        ClassifyError::UnsupportedImageType {
            content_type: content_type.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short user-facing description, without source locations
    pub fn diagnostic(&self) -> String {
        match self {
            Self::ClientBuild { source, .. } => format!("HTTP client unavailable: {source}"),
            Self::Http { message, .. } => format!("Request failed: {message}"),
            Self::Timeout { timeout_secs, .. } => {
                format!("No response from the model within {timeout_secs}s")
            }
            Self::Status { status, .. } => format!("Model endpoint returned HTTP {status}"),
            Self::ResponseTooLarge { limit, .. } => {
                format!("Model response larger than {limit} bytes")
            }
            Self::Json { message, .. } => format!("Unreadable model response: {message}"),
            Self::UnsupportedImageType { content_type, .. } => {
                format!("Invalid file type : {content_type}")
            }
        }
    }
}

impl From<serde_json::Error> for ClassifyError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClassifyError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
