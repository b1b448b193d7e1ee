//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Document`] | One fetched repository file with its text and metadata |
//! | [`TextChunk`] | A slice of a document that gets embedded |
//! | [`RepositoryCoordinates`] | Owner, name and branch of a GitHub repository |

/// Fetched documents and their chunks
pub mod document;
/// Repository coordinates
pub mod repository;

pub use document::{Document, TextChunk};
pub use repository::{DEFAULT_BRANCH, RepositoryCoordinates};
