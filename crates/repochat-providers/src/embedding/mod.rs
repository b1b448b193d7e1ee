//! Embedding Provider Implementations
//!
//! Converts text into dense vector embeddings for semantic search.
//!
//! ## Available Providers
//!
//! | Provider | Type | Backend choice |
//! |----------|------|----------------|
//! | OpenAIEmbeddingProvider | Cloud | Hosted |
//! | FastEmbedProvider | Local ML | Local (requires `embedding-fastembed` feature) |
//! | NullEmbeddingProvider | Testing | - |

#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
pub mod helpers;
pub mod null;
#[cfg(feature = "embedding-openai")]
pub mod openai;

// Re-export for convenience
#[cfg(feature = "embedding-fastembed")]
pub use fastembed::FastEmbedProvider;
pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
#[cfg(feature = "embedding-openai")]
pub use openai::OpenAIEmbeddingProvider;
