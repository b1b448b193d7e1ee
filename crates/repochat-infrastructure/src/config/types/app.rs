//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{EmbeddingConfig, GithubConfig, IndexConfig, LlmConfig, LoggingConfig};

/// Root configuration, one section per concern
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log output
    pub logging: LoggingConfig,
    /// Repository fetching
    pub github: GithubConfig,
    /// Index construction and retrieval
    pub index: IndexConfig,
    /// Hosted and local embedding backends
    pub embedding: EmbeddingConfig,
    /// Answer generation
    pub llm: LlmConfig,
}
