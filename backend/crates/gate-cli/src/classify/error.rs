use gate_classify::{ClassifyError, Prediction};
use gate_config::ConfigError;

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that stop a file from being sent for classification
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {}: {source} {location}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot tell the image type of {}; pass --content-type {location}", .path.display())]
    UnknownContentType {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    #[track_caller]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_content_type(path: &Path) -> Self {
        CliError::UnknownContentType {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Whether a run should exit successfully: false on the `Error` label
/// or on anything that stopped the request from being made.
pub fn is_success(result: &Result<Prediction>) -> bool {
    matches!(result, Ok(prediction) if !prediction.is_error())
}

pub type Result<T> = std::result::Result<T, CliError>;
