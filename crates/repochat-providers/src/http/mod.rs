//! HTTP Client Configuration
//!
//! Every HTTP-based provider receives a `reqwest::Client` through its
//! constructor. `HttpClientConfig` describes how that client is built so the
//! wiring layer creates them consistently.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use repochat_domain::error::{Error, Result};

use crate::constants::HTTP_DEFAULT_TIMEOUT_SECS;

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// Total timeout for requests
    pub timeout: Duration,
    /// User agent string (GitHub rejects requests without one)
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 10,
            idle_timeout: Duration::from_secs(90),
            timeout: Duration::from_secs(HTTP_DEFAULT_TIMEOUT_SECS),
            user_agent: format!("repochat/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create configuration with custom timeout only
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    /// Build a `reqwest::Client` from this configuration
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .pool_max_idle_per_host(self.max_idle_per_host)
            .pool_idle_timeout(self.idle_timeout)
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| Error::network_with_source("Failed to create HTTP client", e))
    }
}
