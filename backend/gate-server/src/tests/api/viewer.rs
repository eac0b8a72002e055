use crate::Viewer;
use crate::tests::{claims, expires_in, id_token_auth, sign, test_state};

use gate_auth::{IdentityField, LoginEvidence, LoginState};
use gate_config::{AuthConfig, AuthMode};

use axum::{body::Body, extract::FromRequestParts, http::Request};

async fn extract(state: &crate::AppState, request: Request<Body>) -> Viewer {
    let (mut parts, _body) = request.into_parts();
    match Viewer::from_request_parts(&mut parts, state).await {
        Ok(viewer) => viewer,
        Err(never) => match never {},
    }
}

#[tokio::test]
async fn given_no_identity_headers_when_extracting_then_unauthenticated() {
    let state = test_state(AuthConfig::default());
    let request = Request::builder().body(Body::empty()).unwrap();

    let viewer = extract(&state, request).await;

    assert!(viewer.identity.is_none());
    assert_eq!(viewer.state, LoginState::Unauthenticated);
}

#[tokio::test]
async fn given_email_header_when_extracting_then_authenticated_by_inference() {
    let state = test_state(AuthConfig::default());
    let request = Request::builder()
        .header("X-Forwarded-Email", "a@b.com")
        .body(Body::empty())
        .unwrap();

    let viewer = extract(&state, request).await;

    assert_eq!(
        viewer.state,
        LoginState::Authenticated {
            display_name: "a@b.com".to_string(),
            evidence: LoginEvidence::InferredFromField(IdentityField::Email),
        }
    );
    assert_eq!(viewer.rate_limit_key(&state), "a@b.com");
}

#[tokio::test]
async fn given_valid_bearer_token_when_extracting_then_subject_keys_rate_limit() {
    let state = test_state(id_token_auth());
    let token = sign(claims("monarch@example.com", expires_in(3600)));
    let request = Request::builder()
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let viewer = extract(&state, request).await;

    assert!(viewer.is_authenticated());
    assert_eq!(viewer.state.display_name(), Some("monarch@example.com"));
    assert_eq!(viewer.rate_limit_key(&state), "user-123");
}

#[tokio::test]
async fn given_disabled_mode_when_extracting_then_dev_user_signed_in() {
    let state = test_state(AuthConfig {
        mode: AuthMode::Disabled,
        dev_user_name: "Local Dev".to_string(),
        ..AuthConfig::default()
    });
    let request = Request::builder().body(Body::empty()).unwrap();

    let viewer = extract(&state, request).await;

    assert_eq!(
        viewer.state,
        LoginState::Authenticated {
            display_name: "Local Dev".to_string(),
            evidence: LoginEvidence::PlatformFlag,
        }
    );
}
