//! Classifier page: `/app` and the form target `/app/classify`

use crate::{AppState, Viewer, pages::html};

use gate_classify::{Prediction, validate_image_type};

use axum::{
    body::Bytes,
    extract::{
        Multipart, State,
        multipart::{MultipartError, MultipartRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use log::{info, warn};

pub const LOGIN_REQUIRED: &str = "Please log in to access the App";
pub const NO_IMAGE: &str = "Please choose an image to classify.";
pub const TOO_LARGE: &str = "That image is too large to classify.";
pub const RATE_LIMITED: &str = "Too many classifications. Please wait a moment and try again.";

/// Multipart fields the forms submit, one per form
const UPLOAD_FIELDS: [&str; 2] = ["image", "camera"];

struct Upload {
    content_type: String,
    bytes: Bytes,
}

/// GET /app
pub async fn classifier_page(State(state): State<AppState>, viewer: Viewer) -> Response {
    if !viewer.is_authenticated() {
        return login_required(&state);
    }

    render(&state, StatusCode::OK, "")
}

/// POST /app/classify
pub async fn submit_image(
    State(state): State<AppState>,
    viewer: Viewer,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    if !viewer.is_authenticated() {
        return login_required(&state);
    }

    let upload = match multipart {
        Ok(mut multipart) => read_upload(&mut multipart).await,
        Err(rejection) => {
            return render(
                &state,
                rejection.status(),
                &html::error(&rejection.body_text()),
            );
        }
    };

    let upload = match upload {
        Ok(Some(upload)) => upload,
        Ok(None) => return render(&state, StatusCode::BAD_REQUEST, &html::error(NO_IMAGE)),
        Err(e) => {
            warn!("Failed to read upload: {e}");
            return render(&state, e.status(), &html::error(&e.body_text()));
        }
    };

    let max_bytes = state.classifier.max_upload_bytes;
    if upload.bytes.len() > max_bytes {
        warn!(
            "Rejected upload of {} bytes, limit is {max_bytes}",
            upload.bytes.len()
        );
        return render(
            &state,
            StatusCode::PAYLOAD_TOO_LARGE,
            &html::error(&format!("{TOO_LARGE} ({max_bytes} bytes at most)")),
        );
    }

    if let Err(e) = validate_image_type(&upload.content_type, &state.classifier.accepted_types) {
        warn!("Rejected upload: {e}");
        return render(&state, StatusCode::BAD_REQUEST, &html::error(&e.diagnostic()));
    }

    let viewer_key = viewer.rate_limit_key(&state);
    if state.rate_limiter.check(&viewer_key).is_err() {
        warn!("Classification quota exhausted for '{viewer_key}'");
        return render(&state, StatusCode::TOO_MANY_REQUESTS, &html::error(RATE_LIMITED));
    }

    info!(
        "Classifying {} bytes of {} for '{viewer_key}'",
        upload.bytes.len(),
        upload.content_type
    );
    let prediction = state.gateway.classify(&upload.bytes).await;

    render(&state, StatusCode::OK, &result_section(&upload, &prediction))
}

async fn read_upload(multipart: &mut Multipart) -> Result<Option<Upload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if !UPLOAD_FIELDS.contains(&name.as_str()) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await?;
        if !bytes.is_empty() {
            return Ok(Some(Upload {
                content_type,
                bytes,
            }));
        }
    }

    Ok(None)
}

fn result_section(upload: &Upload, prediction: &Prediction) -> String {
    let preview = format!(
        "data:{};base64,{}",
        upload.content_type,
        STANDARD.encode(&upload.bytes)
    );

    let mut section = html::image(&preview, "Uploaded image");
    section.push_str(&format!(
        "<p>Class Label: <strong>{}</strong></p>\n",
        html::escape(prediction.label())
    ));
    if let Some(diagnostic) = prediction.diagnostic() {
        section.push_str(&html::error(diagnostic));
    }
    section
}

fn login_required(state: &AppState) -> Response {
    let mut body = html::heading(&state.page.app_title);
    body.push_str(&html::warning(LOGIN_REQUIRED));
    body.push_str(&html::link("/", "Go to the login page"));

    (
        StatusCode::UNAUTHORIZED,
        html::document(&state.page.app_title, &body),
    )
        .into_response()
}

fn render(state: &AppState, status: StatusCode, result: &str) -> Response {
    let page = &state.page;
    let accept = state
        .classifier
        .accepted_types
        .iter()
        .map(|t| format!(".{t}"))
        .collect::<Vec<_>>()
        .join(",");

    let mut body = html::heading(&page.app_title);
    body.push_str(&html::image(&page.app_image_url, &page.app_title));
    body.push_str(result);
    body.push_str(&format!(
        "<h2>Upload an image</h2>\n\
         <form method=\"post\" action=\"/app/classify\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"image\" accept=\"{accept}\">\n\
         <button type=\"submit\">Classify</button>\n</form>\n\
         <h2>Take a picture</h2>\n\
         <form method=\"post\" action=\"/app/classify\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"camera\" accept=\"image/*\" capture=\"environment\">\n\
         <button type=\"submit\">Classify</button>\n</form>\n",
        accept = html::escape(&accept),
    ));
    body.push_str(&html::link("/", "Back to the login page"));

    (status, html::document(&page.app_title, &body)).into_response()
}
