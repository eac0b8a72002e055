use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCEPTED_TYPES, DEFAULT_ENDPOINT_URL,
    DEFAULT_LABEL_FIELD, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_TIMEOUT_SECS, MAX_MAX_UPLOAD_BYTES,
    MAX_TIMEOUT_SECS, MIN_MAX_UPLOAD_BYTES, MIN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Remote inference endpoint settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// POST target; receives the base64-encoded image as the request body
    pub endpoint_url: String,
    /// Fixed per-request timeout
    pub timeout_secs: u64,
    /// JSON field in the response holding the label
    pub label_field: String,
    /// Accepted MIME subtypes (the part after the last '/')
    pub accepted_types: Vec<String>,
    pub max_upload_bytes: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::from(DEFAULT_ENDPOINT_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            label_field: String::from(DEFAULT_LABEL_FIELD),
            accepted_types: DEFAULT_ACCEPTED_TYPES.iter().map(|t| t.to_string()).collect(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ClassifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.endpoint_url.starts_with("http://") || self.endpoint_url.starts_with("https://"))
        {
            return Err(ConfigError::classifier(format!(
                "classifier.endpoint_url must be an http(s) URL, got '{}'",
                self.endpoint_url
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::classifier(format!(
                "classifier.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.label_field.trim().is_empty() {
            return Err(ConfigError::classifier(
                "classifier.label_field cannot be empty",
            ));
        }

        if self.accepted_types.iter().all(|t| t.trim().is_empty()) {
            return Err(ConfigError::classifier(
                "classifier.accepted_types must list at least one type",
            ));
        }

        if self.max_upload_bytes < MIN_MAX_UPLOAD_BYTES
            || self.max_upload_bytes > MAX_MAX_UPLOAD_BYTES
        {
            return Err(ConfigError::classifier(format!(
                "classifier.max_upload_bytes must be {}-{}, got {}",
                MIN_MAX_UPLOAD_BYTES, MAX_MAX_UPLOAD_BYTES, self.max_upload_bytes
            )));
        }

        Ok(())
    }
}
