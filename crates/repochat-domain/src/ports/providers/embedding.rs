use crate::error::Result;
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Text Embedding Interface
///
/// Transforms text into semantic embeddings. Implemented by hosted APIs
/// (OpenAI) and local models (FastEmbed).
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers only
/// need to implement `embed_batch()`.
///
/// # Example
///
/// ```ignore
/// let embedding = provider.embed("fn main() {}").await?;
/// assert_eq!(embedding.vector.len(), provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get embedding for a single text (default implementation provided)
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| crate::error::Error::embedding("No embedding returned"))
    }

    /// Get embeddings for multiple texts, in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of the produced vectors
    fn dimensions(&self) -> usize;

    /// Model identifier
    fn model(&self) -> &str;

    /// Provider identifier (e.g. "openai", "fastembed")
    fn provider_name(&self) -> &str;
}
