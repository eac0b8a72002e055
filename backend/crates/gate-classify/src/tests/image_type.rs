use crate::{ClassifyError, guess_content_type, mime_subtype, validate_image_type};

use std::path::Path;

fn accepted() -> Vec<String> {
    ["jpg", "jpeg", "png", "jfif"]
        .iter()
        .map(|t| t.to_string())
        .collect()
}

#[test]
fn given_accepted_types_when_validated_then_subtype_returned() {
    for content_type in ["image/jpg", "image/jpeg", "image/png", "image/jfif"] {
        let result = validate_image_type(content_type, &accepted());
        assert!(result.is_ok(), "{content_type} should be accepted");
    }
}

#[test]
fn given_gif_when_validated_then_rejected_with_content_type() {
    let result = validate_image_type("image/gif", &accepted());

    match result {
        Err(ClassifyError::UnsupportedImageType { content_type, .. }) => {
            assert_eq!(content_type, "image/gif");
        }
        other => panic!("expected UnsupportedImageType, got {other:?}"),
    }
}

#[test]
fn given_uppercase_and_parameters_when_validated_then_normalised() {
    let result = validate_image_type("image/PNG; charset=binary", &accepted());

    assert_eq!(result.unwrap(), "png");
}

#[test]
fn given_empty_content_type_when_validated_then_rejected() {
    assert!(validate_image_type("", &accepted()).is_err());
}

#[test]
fn given_bare_subtype_when_mime_subtype_then_returned_as_is() {
    assert_eq!(mime_subtype("jpeg"), "jpeg");
    assert_eq!(mime_subtype("application/x/jfif"), "jfif");
}

#[test]
fn given_file_extensions_when_guessing_then_maps_to_image_types() {
    assert_eq!(
        guess_content_type(Path::new("monarch.JPG")).as_deref(),
        Some("image/jpeg")
    );
    assert_eq!(
        guess_content_type(Path::new("wing.gif")).as_deref(),
        Some("image/gif")
    );
    assert_eq!(guess_content_type(Path::new("notes.txt")), None);
    assert_eq!(guess_content_type(Path::new("no_extension")), None);
}

#[test]
fn given_rejection_when_diagnostic_then_matches_page_message() {
    let err = validate_image_type("image/gif", &accepted()).unwrap_err();

    assert_eq!(err.diagnostic(), "Invalid file type : image/gif");
}
