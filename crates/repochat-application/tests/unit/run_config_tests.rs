//! Credential check

use repochat_application::use_cases::RunConfig;
use repochat_domain::error::Error;
use repochat_domain::value_objects::BackendChoice;

fn missing_variable(token: Option<&str>) -> Option<String> {
    match RunConfig::new(
        token.map(str::to_string),
        "GITHUB_TOKEN",
        BackendChoice::Hosted,
        "./basic/storage",
    ) {
        Err(Error::MissingCredential { variable }) => Some(variable),
        _ => None,
    }
}

#[test]
fn test_absent_token_is_missing_credential() {
    assert_eq!(missing_variable(None).as_deref(), Some("GITHUB_TOKEN"));
}

#[test]
fn test_blank_token_is_missing_credential() {
    assert_eq!(missing_variable(Some("")).as_deref(), Some("GITHUB_TOKEN"));
    assert_eq!(missing_variable(Some("  \t")).as_deref(), Some("GITHUB_TOKEN"));
}

#[test]
fn test_token_is_kept_trimmed() {
    let config = RunConfig::new(
        Some(" ghp_abc123 \n".to_string()),
        "GITHUB_TOKEN",
        BackendChoice::Local,
        "/tmp/store",
    )
    .unwrap();

    assert_eq!(config.github_token, "ghp_abc123");
    assert_eq!(config.backend, BackendChoice::Local);
    assert_eq!(config.persist_dir, std::path::PathBuf::from("/tmp/store"));
}

#[test]
fn test_missing_credential_is_configuration_error() {
    let err = RunConfig::new(None, "GITHUB_TOKEN", BackendChoice::Hosted, "x").unwrap_err();
    assert!(err.is_configuration());
}
