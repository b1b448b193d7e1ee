//! Credential lookup tests

use repochat_domain::error::Error;
use repochat_infrastructure::config::ConfigLoader;
use repochat_infrastructure::credentials::{env_credential, load_dotenv_from, require_credential};
use tempfile::TempDir;

#[test]
fn test_unset_variable_is_missing_credential() {
    let err = require_credential("REPOCHAT_TEST_NEVER_SET_TOKEN").unwrap_err();

    match err {
        Error::MissingCredential { variable } => {
            assert_eq!(variable, "REPOCHAT_TEST_NEVER_SET_TOKEN");
        }
        other => panic!("expected MissingCredential, got {other:?}"),
    }
}

#[test]
fn test_blank_variable_counts_as_absent() {
    // SAFETY: the variable name is unique to this test
    unsafe { std::env::set_var("REPOCHAT_TEST_BLANK_TOKEN", "   ") };

    assert_eq!(env_credential("REPOCHAT_TEST_BLANK_TOKEN"), None);
    assert!(require_credential("REPOCHAT_TEST_BLANK_TOKEN").is_err());
}

#[test]
fn test_value_is_trimmed() {
    // SAFETY: the variable name is unique to this test
    unsafe { std::env::set_var("REPOCHAT_TEST_SET_TOKEN", " ghp_123\n") };

    assert_eq!(require_credential("REPOCHAT_TEST_SET_TOKEN").unwrap(), "ghp_123");
}

#[test]
fn test_env_file_overrides_reach_config_loader() {
    let dir = TempDir::new().unwrap();
    let env_file = dir.path().join(".env");
    std::fs::write(
        &env_file,
        "REPOCHAT_TEST_DOTENV_INDEX__COLLECTION=from-env-file\nREPOCHAT_TEST_DOTENV_GH=ghp_file\n",
    )
    .unwrap();

    load_dotenv_from(&env_file).unwrap();
    let config = ConfigLoader::new()
        .with_env_prefix("REPOCHAT_TEST_DOTENV")
        .load()
        .unwrap();

    assert_eq!(config.index.collection, "from-env-file");
    assert_eq!(env_credential("REPOCHAT_TEST_DOTENV_GH").as_deref(), Some("ghp_file"));
}

#[test]
fn test_missing_env_file_is_configuration_error() {
    let dir = TempDir::new().unwrap();

    let err = load_dotenv_from(&dir.path().join("absent.env")).unwrap_err();

    assert!(err.is_configuration(), "got {err:?}");
}
