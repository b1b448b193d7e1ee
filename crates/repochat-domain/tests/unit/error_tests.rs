//! Unit tests for domain error types

use repochat_domain::Error;

#[test]
fn test_embedding_error() {
    let error = Error::embedding("Model not available");
    match error {
        Error::Embedding { message } => assert_eq!(message, "Model not available"),
        _ => panic!("Expected Embedding error"),
    }
}

#[test]
fn test_missing_credential_is_configuration_error() {
    let error = Error::missing_credential("GITHUB_TOKEN");
    assert!(error.is_configuration());
    assert_eq!(error.to_string(), "Missing credential: GITHUB_TOKEN");
}

#[test]
fn test_build_failed_keeps_cause_text() {
    let cause = Error::authentication("GitHub authentication failed: Bad credentials");
    let error = Error::build_failed(&cause);

    match &error {
        Error::BuildFailed { reason } => assert!(reason.contains("Bad credentials")),
        _ => panic!("Expected BuildFailed error"),
    }
    assert!(!error.is_configuration());
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let error: Error = io.into();
    assert!(error.to_string().contains("gone"));
}
