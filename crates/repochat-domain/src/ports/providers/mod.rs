//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | EmbeddingProvider | Text embedding generation services |
//! | VectorStoreProvider | Vector storage and similarity search |
//! | LlmProvider | Text completion for answering queries |
//! | RepositoryFetcher | Repository file download |

/// Embedding provider port
pub mod embedding;
/// LLM provider port
pub mod llm;
/// Repository fetcher port
pub mod repository;
/// Vector store provider port
pub mod vector_store;

pub use embedding::EmbeddingProvider;
pub use llm::LlmProvider;
pub use repository::RepositoryFetcher;
pub use vector_store::{VectorStoreAdmin, VectorStoreProvider};
