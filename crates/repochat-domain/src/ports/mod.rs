//! Domain Port Interfaces
//!
//! Boundary contracts between the orchestrator and the external services it
//! drives. High-level code (application layer) depends on these traits;
//! `repochat-providers` implements them.

/// External service provider ports
pub mod providers;

pub use providers::{
    EmbeddingProvider, LlmProvider, RepositoryFetcher, VectorStoreAdmin, VectorStoreProvider,
};
