//! Classification gateway
//!
//! Forwards raw image bytes, base64-encoded, to a remote inference endpoint
//! and maps the JSON reply (or any failure) to a [`Prediction`].

pub mod error;
pub mod gateway;
pub mod image_type;
pub mod prediction;

#[cfg(test)]
mod tests;

pub use error::{ClassifyError, Result as ClassifyResult};
pub use gateway::{ClassificationGateway, MAX_RESPONSE_BYTES};
pub use image_type::{guess_content_type, mime_subtype, validate_image_type};
pub use prediction::{ERROR_LABEL, Prediction, PredictionBody, UNKNOWN_LABEL};
