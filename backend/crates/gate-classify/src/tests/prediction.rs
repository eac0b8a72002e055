use crate::{ERROR_LABEL, Prediction, UNKNOWN_LABEL};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_each_variant_when_label_then_sentinels_used() {
    assert_eq!(Prediction::Label("Monarch".into()).label(), "Monarch");
    assert_eq!(Prediction::Unknown.label(), UNKNOWN_LABEL);
    assert_eq!(
        Prediction::Error {
            diagnostic: "boom".into()
        }
        .label(),
        ERROR_LABEL
    );
}

#[test]
fn given_error_prediction_when_serialized_then_includes_diagnostic() {
    let prediction = Prediction::Error {
        diagnostic: "Model endpoint returned HTTP 500".into(),
    };

    let json = serde_json::to_value(prediction.to_body()).unwrap();

    assert_eq!(
        json,
        json!({ "label": "Error", "diagnostic": "Model endpoint returned HTTP 500" })
    );
    assert_that!(prediction.is_error(), eq(true));
}

#[test]
fn given_label_prediction_when_serialized_then_omits_diagnostic() {
    let json = serde_json::to_value(Prediction::Label("Viceroy".into()).to_body()).unwrap();

    assert_eq!(json, json!({ "label": "Viceroy" }));
}

#[test]
fn given_non_error_predictions_when_checked_then_no_diagnostic() {
    assert_that!(Prediction::Unknown.is_error(), eq(false));
    assert_that!(Prediction::Unknown.diagnostic(), none());
    assert_that!(Prediction::Label("Monarch".into()).diagnostic(), none());
}
