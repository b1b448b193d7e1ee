//! Configuration types module

pub mod app;
pub mod embedding;
pub mod github;
pub mod index;
pub mod llm;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use embedding::{EmbeddingConfig, HostedEmbeddingConfig, LocalEmbeddingConfig};
pub use github::GithubConfig;
pub use index::IndexConfig;
pub use llm::LlmConfig;
pub use logging::LoggingConfig;
