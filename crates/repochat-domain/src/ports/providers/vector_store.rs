use crate::error::Result;
use crate::value_objects::{Embedding, SearchResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

/// Vector Store Administrative Operations
///
/// Monitoring and persistence operations, kept apart from the data path.
#[async_trait]
pub trait VectorStoreAdmin: Send + Sync {
    /// Check if a collection exists
    async fn collection_exists(&self, name: &str) -> Result<bool>;

    /// Get statistics about a collection
    async fn get_stats(&self, collection: &str) -> Result<HashMap<String, Value>>;

    /// Flush pending operations for a collection
    async fn flush(&self, collection: &str) -> Result<()>;

    /// Get the name/identifier of this vector store provider
    fn provider_name(&self) -> &str;
}

/// Vector Storage Interface
///
/// Persists chunk embeddings with their metadata and answers nearest-neighbour
/// queries.
///
/// # Example
///
/// ```ignore
/// store.create_collection("chunks", 384).await?;
/// let ids = store.insert_vectors("chunks", &embeddings, metadata).await?;
/// let hits = store.search_similar("chunks", &query.vector, 2).await?;
/// ```
#[async_trait]
pub trait VectorStoreProvider: VectorStoreAdmin + Send + Sync {
    /// Create a new vector collection with specified dimensions
    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()>;

    /// Delete an existing vector collection
    async fn delete_collection(&self, name: &str) -> Result<()>;

    /// Insert vectors with one metadata map per vector; returns assigned ids
    async fn insert_vectors(
        &self,
        collection: &str,
        vectors: &[Embedding],
        metadata: Vec<HashMap<String, Value>>,
    ) -> Result<Vec<String>>;

    /// Return the `limit` most similar vectors, best first
    async fn search_similar(
        &self,
        collection: &str,
        query_vector: &[f32],
        limit: usize,
    ) -> Result<Vec<SearchResult>>;
}
