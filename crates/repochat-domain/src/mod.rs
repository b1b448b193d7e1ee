//! # repochat - Domain Layer
//!
//! Core types shared by every layer of repochat: the documents fetched from
//! a repository, the embeddings built from them, the persisted index
//! manifest, and the ports (traits) implemented by the provider crate.
//!
//! ## Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entities`] | `Document`, `TextChunk`, `RepositoryCoordinates` |
//! | [`value_objects`] | `Embedding`, `SearchResult`, `BackendChoice`, `IndexManifest` |
//! | [`ports`] | `EmbeddingProvider`, `VectorStoreProvider`, `LlmProvider`, `RepositoryFetcher` |
//! | [`error`] | Domain `Error` and `Result` |

/// Domain constants
pub mod constants;
/// Entities with identity
pub mod entities;
/// Error handling types
pub mod error;
/// Boundary contracts implemented by providers
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use error::{Error, Result};
