//! # repochat - Provider Implementations
//!
//! Adapters for every port defined in `repochat-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Repository | `RepositoryFetcher` | GitHub |
//! | Embedding | `EmbeddingProvider` | OpenAI, FastEmbed, Null |
//! | Vector Store | `VectorStoreProvider` | Filesystem |
//! | LLM | `LlmProvider` | Ollama |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! repochat-providers = { version = "0.1", features = ["embedding-fastembed"] }
//! ```

// Re-export domain types commonly used with providers
pub use repochat_domain::error::{Error, Result};
pub use repochat_domain::ports::providers::{
    EmbeddingProvider, LlmProvider, RepositoryFetcher, VectorStoreProvider,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration shared by API-based providers
pub mod http;

/// Embedding provider implementations
pub mod embedding;

/// Vector store provider implementations
pub mod vector_store;

/// LLM provider implementations
pub mod llm;

/// GitHub repository reader
pub mod github;
