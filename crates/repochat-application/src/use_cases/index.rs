//! Index Handle Use Case
//!
//! A [`VectorIndex`] is produced either by [`VectorIndex::from_documents`]
//! (fresh build) or by [`VectorIndex::load`] (reload). It owns the vector
//! store, the embedding provider used for queries and the collection name.

use std::path::Path;
use std::sync::Arc;

use chrono::Utc;
use repochat_domain::constants::INDEX_MANIFEST_FILENAME;
use repochat_domain::entities::{Document, RepositoryCoordinates};
use repochat_domain::error::{Error, Result};
use repochat_domain::ports::providers::{EmbeddingProvider, VectorStoreAdmin, VectorStoreProvider};
use repochat_domain::value_objects::{BackendChoice, Embedding, IndexManifest, SearchResult};

use crate::domain_services::TextSplitter;
use crate::ports::ProviderFactory;

/// Default vector store collection
pub const DEFAULT_COLLECTION: &str = "repochat_chunks";

/// Default number of chunks per embedding request
pub const DEFAULT_EMBED_BATCH_SIZE: usize = 32;

/// Settings handed explicitly to index construction
///
/// `default_embedding` is the embedding used when construction receives no
/// explicit provider. When it is `None` the hosted provider is used.
#[derive(Clone)]
pub struct IndexSettings {
    /// Vector store collection name
    pub collection: String,
    /// Chunking policy
    pub splitter: TextSplitter,
    /// Chunks per embedding request
    pub embed_batch_size: usize,
    /// Registered default embedding provider
    pub default_embedding: Option<Arc<dyn EmbeddingProvider>>,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            splitter: TextSplitter::default(),
            embed_batch_size: DEFAULT_EMBED_BATCH_SIZE,
            default_embedding: None,
        }
    }
}

impl std::fmt::Debug for IndexSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexSettings")
            .field("collection", &self.collection)
            .field("splitter", &self.splitter)
            .field("embed_batch_size", &self.embed_batch_size)
            .field(
                "default_embedding",
                &self.default_embedding.as_ref().map(|e| e.provider_name().to_string()),
            )
            .finish()
    }
}

/// What a fresh build is made from, recorded in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Backend chosen for this build
    pub backend: BackendChoice,
    /// Repository the documents came from
    pub repository: RepositoryCoordinates,
}

/// Index handle
pub struct VectorIndex {
    store: Arc<dyn VectorStoreProvider>,
    embedding: Arc<dyn EmbeddingProvider>,
    manifest: IndexManifest,
}

impl std::fmt::Debug for VectorIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorIndex")
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}

impl VectorIndex {
    /// Build a fresh index from `documents` and persist it under `persist_dir`
    ///
    /// Embedding resolution: `embed_model`, then `settings.default_embedding`,
    /// then the factory's hosted provider. Nothing is written to disk until
    /// every chunk has been embedded.
    pub async fn from_documents(
        documents: &[Document],
        embed_model: Option<Arc<dyn EmbeddingProvider>>,
        settings: &IndexSettings,
        factory: &dyn ProviderFactory,
        persist_dir: &Path,
        context: &BuildContext,
    ) -> Result<Self> {
        let embedding = match embed_model.or_else(|| settings.default_embedding.clone()) {
            Some(provider) => provider,
            None => factory.hosted_embedding()?,
        };

        let chunks = settings.splitter.split_documents(documents);
        tracing::info!(
            documents = documents.len(),
            chunks = chunks.len(),
            provider = embedding.provider_name(),
            model = embedding.model(),
            "Embedding chunks"
        );

        let embeddings = embed_in_batches(
            embedding.as_ref(),
            chunks.iter().map(|c| c.content.clone()).collect(),
            settings.embed_batch_size,
        )
        .await?;

        let dimensions = embeddings
            .first()
            .map_or_else(|| embedding.dimensions(), |e| e.vector.len());

        let store = factory.open_vector_store(persist_dir, dimensions).await?;
        store
            .create_collection(&settings.collection, dimensions)
            .await?;
        store
            .insert_vectors(
                &settings.collection,
                &embeddings,
                chunks.iter().map(|c| c.metadata()).collect(),
            )
            .await?;
        store.flush(&settings.collection).await?;

        let manifest = IndexManifest {
            collection: settings.collection.clone(),
            backend: context.backend,
            embedding_provider: embedding.provider_name().to_string(),
            embedding_model: embedding.model().to_string(),
            dimensions,
            document_count: documents.len(),
            chunk_count: chunks.len(),
            owner: context.repository.owner.clone(),
            repo: context.repository.repo.clone(),
            created_at: Utc::now(),
        };
        write_manifest(persist_dir, &manifest).await?;

        tracing::info!(
            path = %persist_dir.display(),
            chunks = manifest.chunk_count,
            "Index persisted"
        );

        Ok(Self {
            store,
            embedding,
            manifest,
        })
    }

    /// Restore an index persisted under `persist_dir`
    ///
    /// The query embedder follows the backend recorded in the manifest.
    pub async fn load(
        persist_dir: &Path,
        settings: &IndexSettings,
        factory: &dyn ProviderFactory,
        current_choice: BackendChoice,
    ) -> Result<Self> {
        let manifest = read_manifest(persist_dir).await?;

        if manifest.backend != current_choice {
            tracing::warn!(
                indexed_with = %manifest.backend,
                chosen = %current_choice,
                "Index was built with a different backend; queries use the indexed one"
            );
        }

        let embedding = match manifest.backend {
            BackendChoice::Hosted => factory.hosted_embedding()?,
            BackendChoice::Local => match &settings.default_embedding {
                Some(provider) => provider.clone(),
                None => factory.local_embedding()?,
            },
        };
        if embedding.model() != manifest.embedding_model {
            tracing::warn!(
                indexed_model = %manifest.embedding_model,
                query_model = embedding.model(),
                "Query embedding model differs from the indexed one"
            );
        }

        let store = factory
            .open_vector_store(persist_dir, manifest.dimensions)
            .await?;
        if !store.collection_exists(&manifest.collection).await? {
            return Err(Error::index_corrupted(format!(
                "Collection '{}' missing from {}",
                manifest.collection,
                persist_dir.display()
            )));
        }

        tracing::info!(
            path = %persist_dir.display(),
            owner = %manifest.owner,
            repo = %manifest.repo,
            chunks = manifest.chunk_count,
            "Index loaded"
        );

        Ok(Self {
            store,
            embedding,
            manifest,
        })
    }

    /// The `top_k` chunks most similar to `query`, best first
    pub async fn retrieve(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        let query_embedding = self.embedding.embed(query).await?;
        self.store
            .search_similar(&self.manifest.collection, &query_embedding.vector, top_k)
            .await
    }

    /// Description of the persisted index
    pub fn manifest(&self) -> &IndexManifest {
        &self.manifest
    }

    /// Provider used to embed queries
    pub fn embedding_provider(&self) -> &Arc<dyn EmbeddingProvider> {
        &self.embedding
    }
}

async fn embed_in_batches(
    provider: &dyn EmbeddingProvider,
    texts: Vec<String>,
    batch_size: usize,
) -> Result<Vec<Embedding>> {
    let mut embeddings = Vec::with_capacity(texts.len());
    for batch in texts.chunks(batch_size.max(1)) {
        let batch_embeddings = provider.embed_batch(batch).await?;
        if batch_embeddings.len() != batch.len() {
            return Err(Error::embedding(format!(
                "{} returned {} embeddings for {} texts",
                provider.provider_name(),
                batch_embeddings.len(),
                batch.len()
            )));
        }
        embeddings.extend(batch_embeddings);
    }
    Ok(embeddings)
}

async fn write_manifest(persist_dir: &Path, manifest: &IndexManifest) -> Result<()> {
    let content = serde_json::to_string_pretty(manifest)?;
    tokio::fs::write(persist_dir.join(INDEX_MANIFEST_FILENAME), content)
        .await
        .map_err(|e| Error::io_with_source("Failed to write index manifest", e))
}

async fn read_manifest(persist_dir: &Path) -> Result<IndexManifest> {
    let path = persist_dir.join(INDEX_MANIFEST_FILENAME);
    let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
        Error::index_corrupted(format!("Cannot read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| Error::index_corrupted(format!("Invalid {}: {e}", path.display())))
}
