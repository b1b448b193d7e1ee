//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of text for semantic search |
//! | [`SearchResult`] | Ranked chunk returned by a similarity search |
//! | [`BackendChoice`] | Hosted or local embedding backend |
//! | [`IndexManifest`] | Description of a persisted index |

/// Embedding backend selection
pub mod backend;
/// Semantic embedding value objects
pub mod embedding;
/// Persisted index description
pub mod index;
/// Search-related value objects
pub mod search;

pub use backend::BackendChoice;
pub use embedding::Embedding;
pub use index::IndexManifest;
pub use search::SearchResult;
