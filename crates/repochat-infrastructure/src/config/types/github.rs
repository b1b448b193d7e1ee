//! GitHub fetch configuration types

use repochat_domain::entities::DEFAULT_BRANCH;
use repochat_providers::constants::{
    GITHUB_DEFAULT_API_URL, GITHUB_DEFAULT_CONCURRENT_REQUESTS, GITHUB_DEFAULT_EXTENSIONS,
};
use serde::{Deserialize, Serialize};

use crate::constants::{GITHUB_REQUEST_TIMEOUT_SECS, GITHUB_TOKEN_ENV};

/// Repository fetch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// REST API root
    pub api_url: String,

    /// Branch to index
    pub branch: String,

    /// File extensions to index, with the leading dot
    pub include_extensions: Vec<String>,

    /// Maximum blob downloads in flight
    pub concurrent_requests: usize,

    /// Environment variable holding the token
    pub token_env: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: GITHUB_DEFAULT_API_URL.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            include_extensions: GITHUB_DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
            concurrent_requests: GITHUB_DEFAULT_CONCURRENT_REQUESTS,
            token_env: GITHUB_TOKEN_ENV.to_string(),
            timeout_secs: GITHUB_REQUEST_TIMEOUT_SECS,
        }
    }
}
