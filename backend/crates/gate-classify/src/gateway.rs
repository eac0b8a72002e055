use crate::{ClassifyError, ClassifyResult, Prediction};

use gate_config::ClassifierConfig;

use std::panic::Location;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use error_location::ErrorLocation;
use log::{error, info, warn};
use reqwest::{Client as ReqwestClient, Response};
use serde_json::Value;

/// Largest model reply read before the request is abandoned
pub const MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// HTTP gateway to the remote image classifier
pub struct ClassificationGateway {
    endpoint_url: String,
    label_field: String,
    timeout_secs: u64,
    client: ReqwestClient,
}

impl ClassificationGateway {
    /// Create a gateway with the configured endpoint and fixed timeout
    #[track_caller]
    pub fn new(config: &ClassifierConfig) -> ClassifyResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|source| ClassifyError::ClientBuild {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            endpoint_url: config.endpoint_url.clone(),
            label_field: config.label_field.clone(),
            timeout_secs: config.timeout_secs,
            client,
        })
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Classify an image, collapsing every failure into a sentinel.
    pub async fn classify(&self, image: &[u8]) -> Prediction {
        match self.predict(image).await {
            Ok(Some(label)) => {
                info!("Classified {} bytes as '{}'", image.len(), label);
                Prediction::Label(label)
            }
            Ok(None) => {
                warn!(
                    "Classifier response had no '{}' field",
                    self.label_field
                );
                Prediction::Unknown
            }
            Err(e) => {
                error!("Classification failed: {e}");
                Prediction::Error {
                    diagnostic: e.diagnostic(),
                }
            }
        }
    }

    /// POST the base64-encoded image and read the label field.
    ///
    /// `Ok(None)` when the reply is valid JSON without a usable label.
    pub async fn predict(&self, image: &[u8]) -> ClassifyResult<Option<String>> {
        let payload = STANDARD.encode(image);

        let response = self
            .client
            .post(&self.endpoint_url)
            .body(payload)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status {
                status: status.as_u16(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = self.read_body(response).await?;
        let json: Value = serde_json::from_slice(&body)?;

        Ok(json.get(&self.label_field).and_then(label_text))
    }

    async fn read_body(&self, mut response: Response) -> ClassifyResult<Vec<u8>> {
        if let Some(length) = response.content_length()
            && length > MAX_RESPONSE_BYTES as u64
        {
            return Err(response_too_large());
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| self.map_transport_error(e))?
        {
            if body.len() + chunk.len() > MAX_RESPONSE_BYTES {
                return Err(response_too_large());
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }

    #[track_caller]
    fn map_transport_error(&self, err: reqwest::Error) -> ClassifyError {
        if err.is_timeout() {
            ClassifyError::Timeout {
                timeout_secs: self.timeout_secs,
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            ClassifyError::from_reqwest(err)
        }
    }
}

#[track_caller]
fn response_too_large() -> ClassifyError {
    ClassifyError::ResponseTooLarge {
        limit: MAX_RESPONSE_BYTES,
        location: ErrorLocation::from(Location::caller()),
    }
}

fn label_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
