//! Filesystem vector store implementation
//!
//! Persists chunk vectors in append-only shard files under the index
//! directory, with a JSON index mapping chunk ids to shard offsets. This is
//! what makes the reload branch possible: reopening the same directory with
//! the same dimensions restores every collection.
//!
//! Layout for a collection `chunks`:
//!
//! ```text
//! <base_path>/chunks_index.json
//! <base_path>/chunks_shards/shard_0.dat
//! <base_path>/chunks_shards/shard_0.meta
//! ```
//!
//! Each record in a `.dat` file is `dimensions * f32 (LE)`, then a `u32 (LE)`
//! metadata length, then the metadata as JSON.

use crate::constants::{FILESYSTEM_BYTES_PER_DIMENSION, FILESYSTEM_VECTOR_STORE_MAX_PER_SHARD};
use crate::utils::JsonExt;
use async_trait::async_trait;
use dashmap::DashMap;
use repochat_domain::error::{Error, Result};
use repochat_domain::ports::providers::{VectorStoreAdmin, VectorStoreProvider};
use repochat_domain::value_objects::{Embedding, SearchResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use super::similarity::{TopK, cosine_similarity, metadata_to_search_result};

/// Filesystem vector store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesystemVectorStoreConfig {
    /// Base directory for storing vector data
    pub base_path: PathBuf,
    /// Maximum vectors per shard file
    pub max_vectors_per_shard: usize,
    /// Vector dimensions (must match embedding dimensions)
    pub dimensions: usize,
}

impl FilesystemVectorStoreConfig {
    /// Configuration for `base_path` with the given dimensions
    pub fn new(base_path: impl Into<PathBuf>, dimensions: usize) -> Self {
        Self {
            base_path: base_path.into(),
            max_vectors_per_shard: FILESYSTEM_VECTOR_STORE_MAX_PER_SHARD,
            dimensions,
        }
    }
}

/// Vector shard metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShardMetadata {
    shard_id: u32,
    vector_count: usize,
    /// Shard file size in bytes
    vectors_size: u64,
    /// Creation timestamp (unix seconds)
    created_at: u64,
}

/// Vector index entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexEntry {
    /// Shard ID where vector is stored
    shard_id: u32,
    /// Offset within the shard file
    offset: u64,
    /// Insertion sequence, used for stable ordering on ties
    seq: u64,
}

/// One record waiting to be appended to a shard
struct PendingRecord {
    id: String,
    bytes: Vec<u8>,
}

/// Filesystem vector store implementation
#[derive(Clone)]
pub struct FilesystemVectorStore {
    config: FilesystemVectorStoreConfig,
    /// Index cache ((collection, ID) -> IndexEntry)
    index_cache: Arc<DashMap<(String, String), IndexEntry>>,
    /// Shard metadata cache ((collection, shard_id) -> ShardMetadata)
    shard_cache: Arc<DashMap<(String, u32), ShardMetadata>>,
    /// Collections whose on-disk state has been loaded
    loaded: Arc<DashMap<String, ()>>,
}

mod file_utils {
    use repochat_domain::error::{Error, Result};
    use serde::{Serialize, de::DeserializeOwned};
    use std::path::Path;

    pub async fn exists(path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    pub async fn read_json<T: DeserializeOwned>(path: &Path, description: &str) -> Result<T> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to read {description}"), e))?;
        serde_json::from_str(&content).map_err(|e| {
            Error::index_corrupted(format!("Failed to parse {description} {}: {e}", path.display()))
        })
    }

    pub async fn write_json<T: Serialize>(path: &Path, data: &T, description: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io_with_source(format!("Failed to create directory for {description}"), e)
            })?;
        }
        let content = serde_json::to_string_pretty(data)?;
        tokio::fs::write(path, content)
            .await
            .map_err(|e| Error::io_with_source(format!("Failed to write {description}"), e))
    }
}

impl FilesystemVectorStore {
    /// Create a filesystem vector store rooted at `config.base_path`
    ///
    /// The directory is created if missing.
    pub async fn new(config: FilesystemVectorStoreConfig) -> Result<Self> {
        if config.dimensions == 0 {
            return Err(Error::invalid_argument("Vector dimensions must be non-zero"));
        }
        tokio::fs::create_dir_all(&config.base_path)
            .await
            .map_err(|e| Error::io_with_source("Failed to create vector store directory", e))?;

        Ok(Self {
            config,
            index_cache: Arc::new(DashMap::new()),
            shard_cache: Arc::new(DashMap::new()),
            loaded: Arc::new(DashMap::new()),
        })
    }

    /// Configured vector dimensions
    pub fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn index_path(&self, collection: &str) -> PathBuf {
        self.config
            .base_path
            .join(format!("{collection}_index.json"))
    }

    fn shards_dir(&self, collection: &str) -> PathBuf {
        self.config.base_path.join(format!("{collection}_shards"))
    }

    fn shard_path(&self, collection: &str, shard_id: u32) -> PathBuf {
        self.shards_dir(collection)
            .join(format!("shard_{shard_id}.dat"))
    }

    async fn ensure_loaded(&self, collection: &str) -> Result<()> {
        if self.loaded.contains_key(collection) {
            return Ok(());
        }
        self.load_collection_state(collection).await
    }

    /// Load existing state from disk for a collection
    async fn load_collection_state(&self, collection: &str) -> Result<()> {
        let index_path = self.index_path(collection);
        if file_utils::exists(&index_path).await {
            let index: HashMap<String, IndexEntry> =
                file_utils::read_json(&index_path, "collection index").await?;
            for (id, entry) in index {
                self.index_cache.insert((collection.to_string(), id), entry);
            }
        }

        let shards_path = self.shards_dir(collection);
        if file_utils::exists(&shards_path).await {
            let mut entries = tokio::fs::read_dir(&shards_path)
                .await
                .map_err(|e| Error::io_with_source("Failed to read shards directory", e))?;

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| Error::io_with_source("Failed to read directory entry", e))?
            {
                let path = entry.path();
                if path.extension().and_then(|s| s.to_str()) == Some("meta") {
                    let metadata: ShardMetadata =
                        file_utils::read_json(&path, "shard metadata").await?;
                    self.shard_cache
                        .insert((collection.to_string(), metadata.shard_id), metadata);
                }
            }
        }

        self.loaded.insert(collection.to_string(), ());
        tracing::debug!(
            collection,
            vectors = self.count(collection),
            "Loaded filesystem collection state"
        );
        Ok(())
    }

    /// Save index and shard metadata for a collection
    async fn save_collection_state(&self, collection: &str) -> Result<()> {
        let index: HashMap<String, IndexEntry> = self
            .index_cache
            .iter()
            .filter(|r| r.key().0 == collection)
            .map(|r| (r.key().1.clone(), r.value().clone()))
            .collect();
        file_utils::write_json(&self.index_path(collection), &index, "collection index").await?;

        let shards: Vec<ShardMetadata> = self
            .shard_cache
            .iter()
            .filter(|r| r.key().0 == collection)
            .map(|r| r.value().clone())
            .collect();
        let shards_path = self.shards_dir(collection);
        for shard in shards {
            let meta_path = shards_path.join(format!("shard_{}.meta", shard.shard_id));
            file_utils::write_json(&meta_path, &shard, "shard metadata").await?;
        }
        Ok(())
    }

    fn count(&self, collection: &str) -> usize {
        self.index_cache
            .iter()
            .filter(|r| r.key().0 == collection)
            .count()
    }

    /// Pick the shard for the next vector: the emptiest one with room,
    /// otherwise a fresh shard id.
    fn find_optimal_shard(&self, collection: &str) -> u32 {
        let mut best: Option<(u32, usize)> = None;
        let mut max_id: Option<u32> = None;

        for r in self.shard_cache.iter() {
            let (c, shard_id) = r.key();
            if c != collection {
                continue;
            }
            max_id = Some(max_id.map_or(*shard_id, |m| m.max(*shard_id)));
            let count = r.value().vector_count;
            if count < self.config.max_vectors_per_shard
                && best.is_none_or(|(_, min)| count < min)
            {
                best = Some((*shard_id, count));
            }
        }

        match best {
            Some((shard_id, _)) => shard_id,
            None => max_id.map_or(0, |m| m + 1),
        }
    }

    /// Convert vector to bytes
    fn vector_to_bytes(vector: &[f32]) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(vector.len() * FILESYSTEM_BYTES_PER_DIMENSION);
        for &value in vector {
            bytes.extend_from_slice(&value.to_le_bytes());
        }
        bytes
    }

    fn encode_record(vector: &[f32], metadata: &HashMap<String, serde_json::Value>) -> Result<Vec<u8>> {
        let metadata_bytes = serde_json::to_vec(metadata)?;
        let metadata_len = u32::try_from(metadata_bytes.len())
            .map_err(|_| Error::vector_db("Chunk metadata too large for shard record"))?;
        let mut bytes = Self::vector_to_bytes(vector);
        bytes.extend_from_slice(&metadata_len.to_le_bytes());
        bytes.extend_from_slice(&metadata_bytes);
        Ok(bytes)
    }

    /// Append records to a shard file in one blocking call; returns their offsets
    async fn append_to_shard(&self, path: PathBuf, records: Vec<Vec<u8>>) -> Result<(Vec<u64>, u64)> {
        tokio::task::spawn_blocking(move || {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;

            let mut offset = file.metadata()?.len();
            let mut offsets = Vec::with_capacity(records.len());
            for record in &records {
                offsets.push(offset);
                file.write_all(record)?;
                offset += record.len() as u64;
            }
            file.flush()?;
            Ok::<_, std::io::Error>((offsets, offset))
        })
        .await
        .map_err(|e| Error::internal(format!("Blocking task failed: {e}")))?
        .map_err(|e| Error::io_with_source("Failed to write to shard", e))
    }

    /// Read every record of a shard, keyed by offset
    async fn read_shard(
        &self,
        collection: &str,
        shard_id: u32,
    ) -> Result<HashMap<u64, (Vec<f32>, HashMap<String, serde_json::Value>)>> {
        let shard_path = self.shard_path(collection, shard_id);
        let dimensions = self.config.dimensions;

        let bytes = tokio::fs::read(&shard_path).await.map_err(|e| {
            Error::index_corrupted(format!("Failed to read shard {}: {e}", shard_path.display()))
        })?;

        tokio::task::spawn_blocking(move || decode_shard(&bytes, dimensions))
            .await
            .map_err(|e| Error::internal(format!("Blocking task failed: {e}")))?
    }
}

/// Decode a whole shard buffer into `offset -> (vector, metadata)`
fn decode_shard(
    bytes: &[u8],
    dimensions: usize,
) -> Result<HashMap<u64, (Vec<f32>, HashMap<String, serde_json::Value>)>> {
    let vector_len = dimensions * FILESYSTEM_BYTES_PER_DIMENSION;
    let mut records = HashMap::new();
    let mut pos = 0usize;

    while pos < bytes.len() {
        let header_end = pos + vector_len + 4;
        if header_end > bytes.len() {
            return Err(Error::index_corrupted(format!(
                "Truncated shard record at offset {pos}"
            )));
        }
        let vector: Vec<f32> = bytes[pos..pos + vector_len]
            .chunks_exact(FILESYSTEM_BYTES_PER_DIMENSION)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        let len_bytes = &bytes[pos + vector_len..header_end];
        let metadata_len =
            u32::from_le_bytes([len_bytes[0], len_bytes[1], len_bytes[2], len_bytes[3]]) as usize;
        let end = header_end + metadata_len;
        if end > bytes.len() {
            return Err(Error::index_corrupted(format!(
                "Truncated shard metadata at offset {pos}"
            )));
        }
        let metadata: HashMap<String, serde_json::Value> =
            serde_json::from_slice(&bytes[header_end..end])
                .map_err(|e| Error::index_corrupted(format!("Invalid shard metadata: {e}")))?;
        records.insert(pos as u64, (vector, metadata));
        pos = end;
    }

    Ok(records)
}

#[async_trait]
impl VectorStoreAdmin for FilesystemVectorStore {
    async fn collection_exists(&self, name: &str) -> Result<bool> {
        Ok(file_utils::exists(&self.index_path(name)).await)
    }

    async fn get_stats(&self, collection: &str) -> Result<HashMap<String, serde_json::Value>> {
        self.ensure_loaded(collection).await?;

        let mut stats = HashMap::new();
        stats.insert("collection".to_string(), serde_json::json!(collection));
        stats.insert(
            "total_vectors".to_string(),
            serde_json::json!(self.count(collection)),
        );

        let (total_shards, total_size) = self
            .shard_cache
            .iter()
            .filter(|r| r.key().0 == collection)
            .fold((0usize, 0u64), |(n, size), r| (n + 1, size + r.value().vectors_size));
        stats.insert("total_shards".to_string(), serde_json::json!(total_shards));
        stats.insert(
            "dimensions".to_string(),
            serde_json::json!(self.config.dimensions),
        );
        stats.insert(
            "total_size_bytes".to_string(),
            serde_json::json!(total_size),
        );

        Ok(stats)
    }

    async fn flush(&self, collection: &str) -> Result<()> {
        self.save_collection_state(collection).await
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

#[async_trait]
impl VectorStoreProvider for FilesystemVectorStore {
    async fn create_collection(&self, name: &str, dimensions: usize) -> Result<()> {
        if dimensions != self.config.dimensions {
            return Err(Error::vector_db(format!(
                "Collection '{name}' requested {dimensions} dimensions, store is configured for {}",
                self.config.dimensions
            )));
        }

        if self.collection_exists(name).await? {
            self.load_collection_state(name).await
        } else {
            self.loaded.insert(name.to_string(), ());
            self.save_collection_state(name).await
        }
    }

    async fn delete_collection(&self, name: &str) -> Result<()> {
        let shards_path = self.shards_dir(name);
        if file_utils::exists(&shards_path).await {
            tokio::fs::remove_dir_all(&shards_path)
                .await
                .map_err(|e| Error::io_with_source("Failed to delete collection shards", e))?;
        }

        let index_path = self.index_path(name);
        if file_utils::exists(&index_path).await {
            tokio::fs::remove_file(index_path)
                .await
                .map_err(|e| Error::io_with_source("Failed to delete collection index", e))?;
        }

        self.index_cache.retain(|k, _| k.0 != name);
        self.shard_cache.retain(|k, _| k.0 != name);
        self.loaded.remove(name);

        Ok(())
    }

    async fn insert_vectors(
        &self,
        collection: &str,
        vectors: &[Embedding],
        metadata: Vec<HashMap<String, serde_json::Value>>,
    ) -> Result<Vec<String>> {
        if vectors.len() != metadata.len() {
            return Err(Error::invalid_argument(format!(
                "{} vectors but {} metadata entries",
                vectors.len(),
                metadata.len()
            )));
        }
        self.ensure_loaded(collection).await?;

        let mut seq = self.count(collection) as u64;
        let mut per_shard: HashMap<u32, Vec<PendingRecord>> = HashMap::new();
        let mut ids = Vec::with_capacity(vectors.len());

        for (vector, meta) in vectors.iter().zip(metadata.iter()) {
            if vector.vector.len() != self.config.dimensions {
                return Err(Error::vector_db(format!(
                    "Vector has {} dimensions, expected {}",
                    vector.vector.len(),
                    self.config.dimensions
                )));
            }

            let id = meta
                .opt_str("id")
                .map_or_else(|| format!("{collection}_{seq}"), str::to_string);

            // Reserve capacity now so the next pick sees this vector
            let shard_id = self.find_optimal_shard(collection);
            self.shard_cache
                .entry((collection.to_string(), shard_id))
                .or_insert_with(|| ShardMetadata {
                    shard_id,
                    vector_count: 0,
                    vectors_size: 0,
                    created_at: unix_secs(),
                })
                .vector_count += 1;

            per_shard.entry(shard_id).or_default().push(PendingRecord {
                id: id.clone(),
                bytes: Self::encode_record(&vector.vector, meta)?,
            });
            ids.push(id);
        }

        for (shard_id, records) in per_shard {
            let path = self.shard_path(collection, shard_id);
            let (record_ids, payloads): (Vec<String>, Vec<Vec<u8>>) =
                records.into_iter().map(|r| (r.id, r.bytes)).unzip();
            let (offsets, total_size) = self.append_to_shard(path, payloads).await?;

            for (id, offset) in record_ids.into_iter().zip(offsets) {
                let entry = IndexEntry {
                    shard_id,
                    offset,
                    seq,
                };
                seq += 1;
                self.index_cache.insert((collection.to_string(), id), entry);
            }
            if let Some(mut shard_meta) = self
                .shard_cache
                .get_mut(&(collection.to_string(), shard_id))
            {
                shard_meta.vectors_size = total_size;
            }
        }

        self.save_collection_state(collection).await?;
        tracing::debug!(collection, inserted = ids.len(), "Vectors written to shards");

        Ok(ids)
    }

    async fn search_similar(
        &self,
        collection: &str,
        query_vector: &[f32],
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        self.ensure_loaded(collection).await?;

        // Collect index entries first to avoid holding DashMap guards across awaits
        let mut entries: Vec<(String, IndexEntry)> = self
            .index_cache
            .iter()
            .filter(|r| r.key().0 == collection)
            .map(|r| (r.key().1.clone(), r.value().clone()))
            .collect();
        entries.sort_by_key(|(_, e)| e.seq);

        let mut shard_ids: Vec<u32> = entries.iter().map(|(_, e)| e.shard_id).collect();
        shard_ids.sort_unstable();
        shard_ids.dedup();

        let mut shards = HashMap::new();
        for shard_id in shard_ids {
            shards.insert(shard_id, self.read_shard(collection, shard_id).await?);
        }

        let mut top = TopK::new(limit);
        let mut candidates = Vec::with_capacity(entries.len());
        for (id, entry) in &entries {
            let record = shards
                .get(&entry.shard_id)
                .and_then(|records| records.get(&entry.offset))
                .ok_or_else(|| {
                    Error::index_corrupted(format!(
                        "Index entry '{id}' points outside shard {}",
                        entry.shard_id
                    ))
                })?;
            top.push(cosine_similarity(query_vector, &record.0), candidates.len());
            candidates.push((id, record));
        }

        Ok(top
            .into_sorted()
            .into_iter()
            .map(|item| {
                let (id, (_, metadata)) = candidates[item.index];
                metadata_to_search_result(id.clone(), metadata, item.score)
            })
            .collect())
    }
}

fn unix_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

