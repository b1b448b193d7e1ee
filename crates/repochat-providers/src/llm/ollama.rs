//! Ollama LLM Provider
//!
//! Implements the LlmProvider port using Ollama's non-streaming generate API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use repochat_domain::error::{Error, Result};
use repochat_domain::ports::providers::LlmProvider;

use crate::constants::{CONTENT_TYPE_JSON, OLLAMA_DEFAULT_BASE_URL, OLLAMA_DEFAULT_MODEL};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Ollama completion provider
///
/// Receives its HTTP client via constructor injection. The timeout covers the
/// whole generation; there is no streaming.
///
/// ## Example
///
/// ```rust,no_run
/// use repochat_providers::llm::OllamaLlmProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let llm = OllamaLlmProvider::new(
///     "http://localhost:11434".to_string(),
///     "llama2".to_string(),
///     Duration::from_secs(200),
///     Client::new(),
/// );
/// ```
pub struct OllamaLlmProvider {
    base_url: String,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OllamaLlmProvider {
    /// Create a new Ollama completion provider
    ///
    /// # Arguments
    /// * `base_url` - Ollama server URL (e.g., "http://localhost:11434")
    /// * `model` - Model name (e.g., "llama2")
    /// * `timeout` - Per-request timeout
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(base_url: String, model: String, timeout: Duration, http_client: Client) -> Self {
        Self {
            base_url: constructor::get_effective_url(Some(&base_url), OLLAMA_DEFAULT_BASE_URL),
            model: if model.trim().is_empty() {
                OLLAMA_DEFAULT_MODEL.to_string()
            } else {
                model
            },
            timeout,
            http_client,
        }
    }

    /// Configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl LlmProvider for OllamaLlmProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false
        });

        let response = self
            .http_client
            .post(format!("{}/api/generate", self.base_url))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::transport_error("Ollama", &e, self.timeout, Error::llm))?;

        let body: GenerateResponse =
            HttpResponseUtils::check_and_parse(response, "Ollama", Error::llm).await?;
        Ok(body.response.trim().to_string())
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "ollama"
    }
}
