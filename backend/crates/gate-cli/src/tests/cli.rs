use crate::{cli::Cli, commands::Commands};

use std::path::PathBuf;

use clap::Parser;

#[test]
fn given_only_file_when_parsing_then_overrides_absent() {
    let cli = Cli::try_parse_from(["gate", "classify", "monarch.jpg"]).unwrap();

    let Commands::Classify {
        file,
        endpoint,
        timeout,
        content_type,
    } = cli.command;
    assert_eq!(file, PathBuf::from("monarch.jpg"));
    assert!(endpoint.is_none());
    assert!(timeout.is_none());
    assert!(content_type.is_none());
    assert!(!cli.pretty);
}

#[test]
fn given_all_flags_when_parsing_then_captured() {
    let cli = Cli::try_parse_from([
        "gate",
        "classify",
        "capture",
        "--endpoint",
        "http://127.0.0.1:9000/predict",
        "--timeout",
        "5",
        "--content-type",
        "image/jfif",
        "--pretty",
    ])
    .unwrap();

    let Commands::Classify {
        endpoint,
        timeout,
        content_type,
        ..
    } = cli.command;
    assert_eq!(endpoint.as_deref(), Some("http://127.0.0.1:9000/predict"));
    assert_eq!(timeout, Some(5));
    assert_eq!(content_type.as_deref(), Some("image/jfif"));
    assert!(cli.pretty);
}

#[test]
fn given_non_numeric_timeout_when_parsing_then_rejected() {
    let result = Cli::try_parse_from(["gate", "classify", "a.png", "--timeout", "soon"]);

    assert!(result.is_err());
}
