//! Embedding backend configuration types

use repochat_providers::constants::{FASTEMBED_DEFAULT_MODEL, OPENAI_DEFAULT_EMBEDDING_MODEL};
use serde::{Deserialize, Serialize};

use crate::constants::{EMBEDDING_REQUEST_TIMEOUT_SECS, OPENAI_API_KEY_ENV};

/// Both embedding backends; which one is used is chosen at the prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// OpenAI embeddings (choice `1`)
    pub hosted: HostedEmbeddingConfig,
    /// FastEmbed embeddings (any other choice)
    pub local: LocalEmbeddingConfig,
}

/// Hosted (OpenAI) embedding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostedEmbeddingConfig {
    /// Model name
    pub model: String,

    /// Custom API root, `None` for api.openai.com
    pub base_url: Option<String>,

    /// Environment variable holding the API key
    pub api_key_env: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for HostedEmbeddingConfig {
    fn default() -> Self {
        Self {
            model: OPENAI_DEFAULT_EMBEDDING_MODEL.to_string(),
            base_url: None,
            api_key_env: OPENAI_API_KEY_ENV.to_string(),
            timeout_secs: EMBEDDING_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Local (FastEmbed) embedding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalEmbeddingConfig {
    /// Model identifier, e.g. `BAAI/bge-small-en-v1.5`
    pub model: String,
}

impl Default for LocalEmbeddingConfig {
    fn default() -> Self {
        Self {
            model: FASTEMBED_DEFAULT_MODEL.to_string(),
        }
    }
}
