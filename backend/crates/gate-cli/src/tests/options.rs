use crate::{ClassifyOptions, is_success};

use gate_classify::Prediction;
use gate_config::ClassifierConfig;

#[test]
fn given_no_overrides_when_applied_then_base_config_kept() {
    let base = ClassifierConfig::default();

    let config = ClassifyOptions::default().apply(&base);

    assert_eq!(config.endpoint_url, base.endpoint_url);
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(config.accepted_types, base.accepted_types);
}

#[test]
fn given_overrides_when_applied_then_endpoint_and_timeout_replaced() {
    let options = ClassifyOptions {
        endpoint: Some("http://localhost:9000/predict".to_string()),
        timeout_secs: Some(3),
        content_type: None,
    };

    let config = options.apply(&ClassifierConfig::default());

    assert_eq!(config.endpoint_url, "http://localhost:9000/predict");
    assert_eq!(config.timeout_secs, 3);
    assert_eq!(config.label_field, "predicted_label");
}

#[test]
fn given_each_outcome_when_checking_success_then_only_labels_succeed() {
    assert!(is_success(&Ok(Prediction::Label("Monarch".into()))));
    assert!(is_success(&Ok(Prediction::Unknown)));
    assert!(!is_success(&Ok(Prediction::Error {
        diagnostic: "timeout".into()
    })));
}
