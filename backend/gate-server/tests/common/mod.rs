#![allow(dead_code)]

//! Test infrastructure for gate-server router tests

use gate_server::{AppState, build_router};

use gate_config::{AuthConfig, AuthMode, Config};

use std::path::Path;

use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wiremock::MockServer;

pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
pub const BOUNDARY: &str = "gate-test-boundary";

/// Config pointing the classifier at a mock server
pub fn test_config(mock_server: &MockServer) -> Config {
    let mut config = Config::default();
    config.classifier.endpoint_url = format!("{}/predict", mock_server.uri());
    config.classifier.timeout_secs = 5;
    config
}

pub fn build_app(config: &Config) -> Router {
    let state = AppState::from_config(config, Path::new(".")).expect("valid test config");
    build_router(state)
}

pub fn disabled_auth() -> AuthConfig {
    AuthConfig {
        mode: AuthMode::Disabled,
        dev_user_name: "Test Viewer".to_string(),
        ..AuthConfig::default()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.expect("router is infallible")
}

pub async fn body_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Single-file multipart/form-data body, as a browser form would send it
pub fn multipart_body(field: &str, filename: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}
