//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use async_trait::async_trait;

use repochat_domain::error::Result;
use repochat_domain::ports::providers::EmbeddingProvider;
use repochat_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding provider for testing
///
/// Returns fixed-size vectors derived from the input text only, so the same
/// text always embeds to the same vector regardless of its batch position.
///
/// # Example
///
/// ```rust
/// use repochat_providers::embedding::NullEmbeddingProvider;
/// use repochat_domain::ports::providers::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }

    fn vector_for(text: &str) -> Vec<f32> {
        let hash = text.chars().map(|c| c as u32).fold(0u32, u32::wrapping_add);
        let base_value = (hash % 1000) as f32 / 1000.0;
        (0..EMBEDDING_DIMENSION_NULL)
            .map(|j| {
                let variation = ((hash as f32 + j as f32) * 0.01).sin();
                (base_value + variation * 0.1).clamp(0.0, 1.0)
            })
            .collect()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding {
                vector: Self::vector_for(text),
                model: "null".to_string(),
                dimensions: EMBEDDING_DIMENSION_NULL,
            })
            .collect())
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_NULL
    }

    fn model(&self) -> &str {
        "null"
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
