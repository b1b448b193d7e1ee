//! Search-Related Value Objects

use serde::{Deserialize, Serialize};

/// Value Object: Ranked Search Result
///
/// A chunk returned by a similarity search. Higher `score` is more similar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Identifier of the matched chunk
    pub id: String,
    /// Path to the source file
    pub file_path: String,
    /// The matched chunk text
    pub content: String,
    /// Cosine similarity score
    pub score: f64,
}

impl SearchResult {
    /// Render the result the way it is shown to the LLM
    pub fn as_context(&self) -> String {
        format!("file_path: {}\n\n{}", self.file_path, self.content)
    }
}
