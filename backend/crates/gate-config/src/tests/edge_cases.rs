use crate::Config;
use crate::tests::{setup_config_dir, write_config};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "this is not valid toml {{{{");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_unknown_auth_mode_in_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[auth]\nmode = \"saml\"");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join("gate");
    let _dir = crate::tests::EnvGuard::set("GATE_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert!(result.is_ok());
    assert_that!(nested.exists(), eq(true));
}
