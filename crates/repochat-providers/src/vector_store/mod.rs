//! Vector Store Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | FilesystemVectorStore | Local | Persistent sharded storage under the index directory |

#[cfg(feature = "vectorstore-filesystem")]
pub mod filesystem;
#[cfg(feature = "vectorstore-filesystem")]
mod similarity;

#[cfg(feature = "vectorstore-filesystem")]
pub use filesystem::{FilesystemVectorStore, FilesystemVectorStoreConfig};
