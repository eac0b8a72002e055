use crate::tests::{TEST_SECRET, claims, expires_in, id_token_auth, sign};
use crate::{IdentitySource, ServerError};

use gate_auth::IdentityField;
use gate_config::{AuthConfig, AuthMode};

use std::path::Path;

use googletest::prelude::*;
use http::{HeaderMap, HeaderValue};

fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.insert(*name, HeaderValue::from_str(value).unwrap());
    }
    map
}

fn source(auth: &AuthConfig) -> IdentitySource {
    IdentitySource::from_config(auth, Path::new(".")).unwrap()
}

#[test]
fn given_headers_mode_without_headers_when_reading_then_absent() {
    let source = source(&AuthConfig::default());

    assert!(source.viewer(&HeaderMap::new()).is_none());
}

#[test]
fn given_headers_mode_when_reading_then_fields_use_prefix_and_suffix() {
    let source = source(&AuthConfig::default());
    let map = headers(&[
        ("x-forwarded-logged-in", "true"),
        ("x-forwarded-full-name", "Vanessa Cardui"),
        ("x-forwarded-primary-email", "painted@lady.org"),
        ("x-forwarded-user-id", "   "),
    ]);

    let identity = source.viewer(&map).unwrap();

    assert_that!(identity.is_logged_in, eq(Some(true)));
    assert_eq!(identity.value(IdentityField::FullName), Some("Vanessa Cardui"));
    assert_eq!(
        identity.value(IdentityField::PrimaryEmail),
        Some("painted@lady.org")
    );
    assert_eq!(identity.value(IdentityField::UserId), None);
}

#[test]
fn given_custom_prefix_when_reading_then_default_prefix_ignored() {
    let source = source(&AuthConfig {
        header_prefix: "X-Auth-".to_string(),
        ..AuthConfig::default()
    });
    let map = headers(&[("x-forwarded-email", "a@b.com"), ("x-auth-name", "Ada")]);

    let identity = source.viewer(&map).unwrap();

    assert_eq!(identity.value(IdentityField::Email), None);
    assert_eq!(identity.value(IdentityField::Name), Some("Ada"));
}

#[test]
fn given_id_token_cookie_when_reading_then_claims_become_identity() {
    let source = source(&id_token_auth());
    let token = sign(claims("cookie@example.com", expires_in(3600)));
    let cookie = format!("theme=dark; id_token={token}");
    let map = headers(&[("cookie", cookie.as_str())]);

    let identity = source.viewer(&map).unwrap();

    assert_eq!(
        identity.value(IdentityField::Email),
        Some("cookie@example.com")
    );
    assert_eq!(identity.value(IdentityField::Sub), Some("user-123"));
}

#[test]
fn given_expired_token_when_reading_then_absent() {
    let source = source(&id_token_auth());
    let token = sign(claims("late@example.com", expires_in(-3600)));
    let bearer = format!("Bearer {token}");
    let map = headers(&[("authorization", bearer.as_str())]);

    assert!(source.viewer(&map).is_none());
}

#[test]
fn given_token_signed_with_other_secret_when_reading_then_absent() {
    let source = source(&AuthConfig {
        jwt_secret: Some(format!("{TEST_SECRET}-rotated")),
        ..id_token_auth()
    });
    let token = sign(claims("a@b.com", expires_in(3600)));
    let bearer = format!("Bearer {token}");

    assert!(source.viewer(&headers(&[("authorization", bearer.as_str())])).is_none());
}

#[test]
fn given_missing_public_key_file_when_building_then_key_file_error() {
    let auth = AuthConfig {
        mode: AuthMode::IdToken,
        jwt_public_key_path: Some("missing.pem".to_string()),
        ..AuthConfig::default()
    };

    let result = IdentitySource::from_config(&auth, Path::new("/nonexistent-gate-dir"));

    assert!(matches!(result, Err(ServerError::JwtKeyFile { .. })));
}

#[test]
fn given_disabled_mode_when_reading_then_same_identity_every_time() {
    let source = source(&AuthConfig {
        mode: AuthMode::Disabled,
        ..AuthConfig::default()
    });

    let first = source.viewer(&HeaderMap::new()).unwrap();
    let second = source.viewer(&headers(&[("x-forwarded-email", "ignored@b.com")]));

    assert_eq!(first.value(IdentityField::Name), Some("Developer"));
    assert_eq!(Some(first), second);
    assert_that!(source.mode(), eq(AuthMode::Disabled));
}
