//! LLM configuration types

use repochat_providers::constants::{
    OLLAMA_DEFAULT_BASE_URL, OLLAMA_DEFAULT_MODEL, OLLAMA_REQUEST_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};

/// Ollama completion configuration, used whatever the embedding backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Ollama server root
    pub base_url: String,

    /// Model name
    pub model: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: OLLAMA_DEFAULT_BASE_URL.to_string(),
            model: OLLAMA_DEFAULT_MODEL.to_string(),
            request_timeout_secs: OLLAMA_REQUEST_TIMEOUT_SECS,
        }
    }
}
