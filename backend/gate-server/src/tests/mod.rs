mod api;
mod identity_source;

use crate::AppState;

use gate_config::{AuthConfig, AuthMode, Config};

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

pub(crate) const TEST_SECRET: &str = "test-secret-that-is-at-least-32-characters";

pub(crate) fn test_state(auth: AuthConfig) -> AppState {
    let mut config = Config::default();
    config.auth = auth;
    config.classifier.endpoint_url = "http://127.0.0.1:9/predict".to_string();
    AppState::from_config(&config, Path::new(".")).unwrap()
}

pub(crate) fn id_token_auth() -> AuthConfig {
    AuthConfig {
        mode: AuthMode::IdToken,
        jwt_secret: Some(TEST_SECRET.to_string()),
        ..AuthConfig::default()
    }
}

pub(crate) fn sign(claims: Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

pub(crate) fn expires_in(secs: i64) -> i64 {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs() as i64;
    now + secs
}

pub(crate) fn claims(email: &str, exp: i64) -> Value {
    json!({ "sub": "user-123", "email": email, "exp": exp })
}
