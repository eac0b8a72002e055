use crate::ApiError;

use gate_auth::AuthError;
use gate_classify::ClassifyError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_unauthorized_when_into_response_then_401_with_json_body() {
    let (status, json) = body_json(ApiError::unauthorized("Please log in")).await;

    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Please log in");
}

#[tokio::test]
async fn given_unsupported_type_when_into_response_then_400_with_type_in_message() {
    let error: ApiError = ClassifyError::unsupported_type("image/gif").into();

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(json["error"]["code"], "UNSUPPORTED_IMAGE_TYPE");
    assert_eq!(json["error"]["message"], "Invalid file type : image/gif");
}

#[tokio::test]
async fn given_rate_limit_error_when_converted_then_429() {
    let error: ApiError = AuthError::RateLimitExceeded {
        limit: 30,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::TOO_MANY_REQUESTS));
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
    assert!(json["error"]["message"].as_str().unwrap().contains("30"));
}

#[tokio::test]
async fn given_payload_too_large_when_into_response_then_413() {
    let error = ApiError::PayloadTooLarge {
        message: "length limit exceeded".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::PAYLOAD_TOO_LARGE));
    assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
}

#[test]
fn given_token_error_when_converted_then_unauthorized() {
    let error: ApiError = AuthError::invalid_token("bad signature").into();

    assert_that!(error.status(), eq(StatusCode::UNAUTHORIZED));
}

#[test]
fn given_transport_error_when_converted_then_internal() {
    let error: ApiError = ClassifyError::Status {
        status: 502,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    match error {
        ApiError::Internal { message, .. } => assert!(message.contains("502")),
        other => panic!("Expected Internal, got {other:?}"),
    }
}
