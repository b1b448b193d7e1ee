//! Sentence-aware text splitting
//!
//! Documents are cut on Unicode sentence boundaries and packed into chunks of
//! at most `chunk_size` characters. A chunk starts with the trailing sentences
//! of the previous one when they fit in `chunk_overlap` characters. Sentences
//! longer than a chunk are hard-split on character boundaries.

use repochat_domain::entities::{Document, TextChunk};
use repochat_domain::error::{Error, Result};
use unicode_segmentation::UnicodeSegmentation;

/// Default maximum chunk length in characters
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Default overlap between consecutive chunks in characters
pub const DEFAULT_CHUNK_OVERLAP: usize = 20;

/// Splits documents into embeddable chunks
///
/// ## Example
///
/// ```rust
/// use repochat_application::domain_services::TextSplitter;
///
/// let splitter = TextSplitter::new(40, 0).unwrap();
/// let chunks = splitter.split("First sentence here. Second sentence here. Third one.");
/// assert_eq!(chunks, vec!["First sentence here.", "Second sentence here. Third one."]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

impl TextSplitter {
    /// Create a splitter; the overlap must be smaller than the chunk size
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::invalid_argument("Chunk size must be greater than zero"));
        }
        if chunk_overlap >= chunk_size {
            return Err(Error::invalid_argument(format!(
                "Chunk overlap ({chunk_overlap}) must be smaller than chunk size ({chunk_size})"
            )));
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    /// Maximum chunk length in characters
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Split one text into trimmed, non-empty chunks
    pub fn split(&self, text: &str) -> Vec<String> {
        let pieces = self.pieces(text);

        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut current_len = 0usize;

        for piece in pieces {
            let piece_len = piece.chars().count();

            if current_len + piece_len > self.chunk_size && !current.is_empty() {
                push_chunk(&mut chunks, &current);

                let mut kept = Vec::new();
                let mut kept_len = 0usize;
                for prev in current.iter().rev() {
                    let len = prev.chars().count();
                    if kept_len + len > self.chunk_overlap {
                        break;
                    }
                    kept.push(*prev);
                    kept_len += len;
                }
                kept.reverse();

                if kept_len + piece_len > self.chunk_size {
                    kept.clear();
                    kept_len = 0;
                }
                current = kept;
                current_len = kept_len;
            }

            current.push(piece);
            current_len += piece_len;
        }

        if !current.is_empty() {
            push_chunk(&mut chunks, &current);
        }
        chunks
    }

    /// Split every document, preserving document order
    pub fn split_documents(&self, documents: &[Document]) -> Vec<TextChunk> {
        documents
            .iter()
            .flat_map(|doc| {
                self.split(&doc.text)
                    .into_iter()
                    .enumerate()
                    .map(move |(index, content)| TextChunk::new(doc, index, content))
            })
            .collect()
    }

    /// Sentences, with oversized ones cut into `chunk_size` windows
    fn pieces<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut pieces = Vec::new();
        for sentence in text.split_sentence_bounds() {
            if sentence.chars().count() <= self.chunk_size {
                pieces.push(sentence);
                continue;
            }
            let mut start = 0usize;
            for (count, (byte_idx, _)) in sentence.char_indices().enumerate() {
                if count > 0 && count % self.chunk_size == 0 {
                    pieces.push(&sentence[start..byte_idx]);
                    start = byte_idx;
                }
            }
            pieces.push(&sentence[start..]);
        }
        pieces
    }
}

fn push_chunk(chunks: &mut Vec<String>, pieces: &[&str]) {
    let chunk = pieces.concat();
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
