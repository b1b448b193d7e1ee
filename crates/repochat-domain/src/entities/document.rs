//! Documents and chunks

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Entity: Fetched Repository File
///
/// A single file produced by a repository fetcher. The `id` is stable for
/// identical content (the git blob sha for GitHub sources).
///
/// ## Example
///
/// ```rust
/// use repochat_domain::entities::Document;
///
/// let doc = Document::new("3b18e51", "README.md", "# Hello World");
/// assert_eq!(doc.extension(), Some("md"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Stable identifier of the content
    pub id: String,
    /// Path relative to the repository root
    pub file_path: String,
    /// Decoded text content
    pub text: String,
    /// Extra attributes (file name, url, ...)
    pub metadata: HashMap<String, Value>,
}

impl Document {
    /// Create a document with `file_path` and `file_name` metadata
    pub fn new(id: impl Into<String>, file_path: impl Into<String>, text: impl Into<String>) -> Self {
        let file_path = file_path.into();
        let file_name = file_path.rsplit('/').next().unwrap_or_default().to_string();
        let metadata = HashMap::from([
            ("file_path".to_string(), json!(file_path)),
            ("file_name".to_string(), json!(file_name)),
        ]);

        Self {
            id: id.into(),
            file_path,
            text: text.into(),
            metadata,
        }
    }

    /// Attach an extra metadata attribute
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Extension of the file name, without the dot
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_path.rsplit('/').next()?;
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() { None } else { Some(ext) }
    }
}

/// Entity: Embeddable Text Chunk
///
/// Produced by splitting a [`Document`]. `chunk_index` is the position of the
/// chunk within its document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextChunk {
    /// Unique identifier (`{file_path}:{chunk_index}`)
    ///
    /// Built from the path because identical files share a blob sha.
    pub id: String,
    /// Identifier of the source document
    pub document_id: String,
    /// Path of the source file
    pub file_path: String,
    /// Position within the source document
    pub chunk_index: usize,
    /// Chunk text
    pub content: String,
}

impl TextChunk {
    /// Create a chunk of `document`
    pub fn new(document: &Document, chunk_index: usize, content: impl Into<String>) -> Self {
        Self {
            id: format!("{}:{}", document.file_path, chunk_index),
            document_id: document.id.clone(),
            file_path: document.file_path.clone(),
            chunk_index,
            content: content.into(),
        }
    }

    /// Metadata stored next to the chunk vector
    pub fn metadata(&self) -> HashMap<String, Value> {
        HashMap::from([
            ("id".to_string(), json!(self.id)),
            ("document_id".to_string(), json!(self.document_id)),
            ("file_path".to_string(), json!(self.file_path)),
            ("chunk_index".to_string(), json!(self.chunk_index)),
            ("content".to_string(), json!(self.content)),
        ])
    }
}
