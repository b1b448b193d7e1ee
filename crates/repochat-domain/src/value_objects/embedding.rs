//! Semantic Embedding Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Represents a vector embedding of text content that captures semantic meaning.
///
/// ## Example
///
/// ```rust
/// use repochat_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     vector: vec![0.1, 0.2, 0.3],
///     model: "BAAI/bge-small-en-v1.5".to_string(),
///     dimensions: 3,
/// };
/// assert_eq!(embedding.vector.len(), embedding.dimensions);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}
