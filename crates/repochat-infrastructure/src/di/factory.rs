//! Provider Factory
//!
//! Builds embedding providers and vector stores from configuration. The
//! orchestrator only sees the [`ProviderFactory`] port.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use repochat_application::ports::ProviderFactory;
use repochat_domain::error::Result;
use repochat_domain::ports::providers::{EmbeddingProvider, VectorStoreProvider};
use repochat_providers::embedding::{FastEmbedProvider, OpenAIEmbeddingProvider};
use repochat_providers::http::HttpClientConfig;
use repochat_providers::vector_store::{FilesystemVectorStore, FilesystemVectorStoreConfig};

use crate::config::EmbeddingConfig;
use crate::credentials::require_credential;

/// Factory backed by OpenAI, FastEmbed and the filesystem vector store
#[derive(Debug, Clone)]
pub struct DefaultProviderFactory {
    embedding: EmbeddingConfig,
}

impl DefaultProviderFactory {
    /// Create a factory for the configured embedding backends
    pub fn new(embedding: EmbeddingConfig) -> Self {
        Self { embedding }
    }
}

#[async_trait]
impl ProviderFactory for DefaultProviderFactory {
    /// The API key is read from the environment on every call
    fn hosted_embedding(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        let hosted = &self.embedding.hosted;
        let api_key = require_credential(&hosted.api_key_env)?;
        let timeout = Duration::from_secs(hosted.timeout_secs);
        let client = HttpClientConfig::with_timeout(timeout).build_client()?;

        tracing::debug!(model = %hosted.model, "Creating hosted embedding provider");
        Ok(Arc::new(OpenAIEmbeddingProvider::new(
            api_key,
            hosted.base_url.clone(),
            hosted.model.clone(),
            timeout,
            client,
        )))
    }

    /// Loads (and on first use downloads) the FastEmbed model
    fn local_embedding(&self) -> Result<Arc<dyn EmbeddingProvider>> {
        let model = &self.embedding.local.model;
        tracing::info!(%model, "Loading local embedding model");
        Ok(Arc::new(FastEmbedProvider::from_model_id(model)?))
    }

    async fn open_vector_store(
        &self,
        path: &Path,
        dimensions: usize,
    ) -> Result<Arc<dyn VectorStoreProvider>> {
        let store =
            FilesystemVectorStore::new(FilesystemVectorStoreConfig::new(path, dimensions)).await?;
        Ok(Arc::new(store))
    }
}
