use crate::{CliError, CliResult};

use gate_classify::{ClassificationGateway, Prediction, guess_content_type, validate_image_type};
use gate_config::ClassifierConfig;

use std::path::Path;

/// Command-line overrides on top of the configured classifier
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub content_type: Option<String>,
}

impl ClassifyOptions {
    /// Classifier settings with these overrides applied
    pub fn apply(&self, base: &ClassifierConfig) -> ClassifierConfig {
        ClassifierConfig {
            endpoint_url: self
                .endpoint
                .clone()
                .unwrap_or_else(|| base.endpoint_url.clone()),
            timeout_secs: self.timeout_secs.unwrap_or(base.timeout_secs),
            ..base.clone()
        }
    }
}

/// Classify one local image file.
///
/// The type check happens before the file is read or any request is made.
pub async fn classify_file(
    path: &Path,
    options: &ClassifyOptions,
    base: &ClassifierConfig,
) -> CliResult<Prediction> {
    let content_type = match options.content_type {
        Some(ref content_type) => content_type.clone(),
        None => guess_content_type(path).ok_or_else(|| CliError::unknown_content_type(path))?,
    };

    let config = options.apply(base);
    config.validate()?;
    validate_image_type(&content_type, &config.accepted_types)?;

    let image = tokio::fs::read(path)
        .await
        .map_err(|e| CliError::io(path, e))?;

    let gateway = ClassificationGateway::new(&config)?;
    Ok(gateway.classify(&image).await)
}
