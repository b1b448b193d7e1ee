//! Persisted index description

use crate::value_objects::BackendChoice;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value Object: Persisted Index Manifest
///
/// Written next to the vector store once a build has completed. Reloading
/// reads it back to reopen the store with matching dimensions and to pick the
/// embedding backend used for queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IndexManifest {
    /// Vector store collection holding the chunks
    pub collection: String,
    /// Backend the index was embedded with
    pub backend: BackendChoice,
    /// Embedding provider name (e.g. "openai", "fastembed")
    pub embedding_provider: String,
    /// Embedding model identifier
    pub embedding_model: String,
    /// Vector dimensionality
    pub dimensions: usize,
    /// Number of fetched documents
    pub document_count: usize,
    /// Number of embedded chunks
    pub chunk_count: usize,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Build completion time
    pub created_at: DateTime<Utc>,
}
