use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use repochat_domain::error::Result;
use repochat_domain::ports::providers::{EmbeddingProvider, VectorStoreProvider};

/// Provider construction port
///
/// Keeps the use cases free of concrete adapters. Providers are built on
/// demand so that a branch never pays for a backend it does not use (the
/// local model is only loaded when the local backend is chosen).
#[async_trait]
pub trait ProviderFactory: Send + Sync {
    /// Hosted embedding provider with default settings
    fn hosted_embedding(&self) -> Result<Arc<dyn EmbeddingProvider>>;

    /// Local embedding provider
    fn local_embedding(&self) -> Result<Arc<dyn EmbeddingProvider>>;

    /// Open (creating if needed) the vector store persisted under `path`
    async fn open_vector_store(
        &self,
        path: &Path,
        dimensions: usize,
    ) -> Result<Arc<dyn VectorStoreProvider>>;
}
