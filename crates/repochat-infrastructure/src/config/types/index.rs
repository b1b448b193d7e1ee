//! Index configuration types

use repochat_application::domain_services::chunking::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use repochat_application::use_cases::index::{DEFAULT_COLLECTION, DEFAULT_EMBED_BATCH_SIZE};
use repochat_application::use_cases::query_engine::DEFAULT_SIMILARITY_TOP_K;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::DEFAULT_PERSIST_DIR;

/// Index construction and retrieval configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Directory holding the persisted index
    pub persist_dir: PathBuf,

    /// Vector store collection name
    pub collection: String,

    /// Maximum chunk length in characters
    pub chunk_size: usize,

    /// Overlap between consecutive chunks in characters
    pub chunk_overlap: usize,

    /// Chunks retrieved per query
    pub similarity_top_k: usize,

    /// Chunks per embedding request
    pub embed_batch_size: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            persist_dir: PathBuf::from(DEFAULT_PERSIST_DIR),
            collection: DEFAULT_COLLECTION.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            similarity_top_k: DEFAULT_SIMILARITY_TOP_K,
            embed_batch_size: DEFAULT_EMBED_BATCH_SIZE,
        }
    }
}
