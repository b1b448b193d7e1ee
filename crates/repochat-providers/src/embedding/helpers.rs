//! Common helpers for embedding providers

/// Common constructor patterns used by HTTP providers
pub mod constructor {
    /// Validate and normalize an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Validate and normalize an optional URL
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }

    /// Get effective URL with fallback to default
    pub fn get_effective_url(provided_url: Option<&str>, default_url: &str) -> String {
        provided_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| default_url.to_string())
    }
}
