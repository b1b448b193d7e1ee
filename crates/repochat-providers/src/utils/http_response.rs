//! HTTP Response Utilities
//!
//! Helper functions for processing HTTP responses from API providers.

use repochat_domain::error::{Error, Result};
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Format an error message for a provider
fn provider_error(make: fn(String) -> Error, provider: &str, context: &str, details: &str) -> Error {
    make(format!("{provider} {context}: {details}"))
}

/// Utilities for processing HTTP responses
///
/// Status handling is shared by every HTTP provider; only the error kind for
/// non-authentication failures differs (`Error::embedding`, `Error::fetch`, ...).
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    /// * `make` - Constructor for the provider's error kind
    ///
    /// # Returns
    /// Parsed JSON on success. 401/403 map to `Error::Authentication`,
    /// everything else to the provider's error kind.
    pub async fn check_and_parse<T: DeserializeOwned>(
        response: Response,
        provider_name: &str,
        make: fn(String) -> Error,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            return Err(match code {
                401 | 403 => Error::authentication(format!(
                    "{provider_name} authentication failed ({code}): {error_text}"
                )),
                404 => provider_error(make, provider_name, "resource not found", &error_text),
                429 => provider_error(make, provider_name, "rate limit exceeded", &error_text),
                500..=599 => provider_error(
                    make,
                    provider_name,
                    &format!("server error ({code})"),
                    &error_text,
                ),
                _ => provider_error(
                    make,
                    provider_name,
                    &format!("request failed ({code})"),
                    &error_text,
                ),
            });
        }

        response.json().await.map_err(|e| {
            provider_error(make, provider_name, "response parse failed", &e.to_string())
        })
    }

    /// Map a transport failure (connect, timeout) to a domain error
    pub fn transport_error(
        provider_name: &str,
        error: &reqwest::Error,
        timeout: std::time::Duration,
        make: fn(String) -> Error,
    ) -> Error {
        if error.is_timeout() {
            make(format!(
                "{provider_name}: {} {:?}",
                crate::constants::ERROR_MSG_REQUEST_TIMEOUT,
                timeout
            ))
        } else if error.is_connect() {
            Error::network(format!("{provider_name} unreachable: {error}"))
        } else {
            make(format!("{provider_name} HTTP request failed: {error}"))
        }
    }
}
