//! Scoring helpers shared by the brute-force stores

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use repochat_domain::value_objects::SearchResult;
use serde_json::Value;

use crate::utils::JsonExt;

/// Cosine similarity, 0.0 when either vector has zero norm
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let (dot_product, norm_a, norm_b) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&x, &y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a.sqrt() * norm_b.sqrt())
    }
}

/// Scored item for heap-based top-k selection
///
/// Reverse ordering so BinaryHeap acts as a min-heap. Ties fall back to
/// insertion order, earlier entries ranking higher.
#[derive(Debug, PartialEq)]
pub(crate) struct ScoredItem {
    pub(crate) score: f32,
    pub(crate) index: usize,
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Keeps the `limit` best scores seen so far
pub(crate) struct TopK {
    heap: BinaryHeap<ScoredItem>,
    limit: usize,
}

impl TopK {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(limit + 1),
            limit,
        }
    }

    pub(crate) fn push(&mut self, score: f32, index: usize) {
        if self.limit == 0 {
            return;
        }
        self.heap.push(ScoredItem { score, index });
        if self.heap.len() > self.limit {
            self.heap.pop();
        }
    }

    /// Best first
    pub(crate) fn into_sorted(self) -> Vec<ScoredItem> {
        let mut items = self.heap.into_vec();
        items.sort();
        items
    }
}

/// Convert stored chunk metadata to a search result
pub(crate) fn metadata_to_search_result(
    id: String,
    metadata: &HashMap<String, Value>,
    score: f32,
) -> SearchResult {
    SearchResult {
        id,
        file_path: metadata.string_or("file_path", "unknown"),
        content: metadata.string_or("content", ""),
        score: f64::from(score),
    }
}
