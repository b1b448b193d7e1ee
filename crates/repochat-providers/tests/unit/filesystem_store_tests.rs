//! Tests for the filesystem vector store

use std::collections::HashMap;

use repochat_domain::entities::{Document, TextChunk};
use repochat_domain::error::Error;
use repochat_domain::ports::providers::{VectorStoreAdmin, VectorStoreProvider};
use repochat_domain::value_objects::Embedding;
use repochat_providers::vector_store::{FilesystemVectorStore, FilesystemVectorStoreConfig};
use serde_json::Value;
use tempfile::TempDir;

const DIMS: usize = 3;

fn embedding(vector: [f32; DIMS]) -> Embedding {
    Embedding {
        vector: vector.to_vec(),
        model: "test".to_string(),
        dimensions: DIMS,
    }
}

fn chunk_metadata(path: &str, index: usize, content: &str) -> HashMap<String, Value> {
    let doc = Document::new(format!("sha-{path}"), path, content);
    TextChunk::new(&doc, index, content).metadata()
}

async fn store(dir: &TempDir) -> FilesystemVectorStore {
    FilesystemVectorStore::new(FilesystemVectorStoreConfig::new(dir.path(), DIMS))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_insert_and_search_ranks_by_cosine() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir).await;
    store.create_collection("chunks", DIMS).await.unwrap();

    let ids = store
        .insert_vectors(
            "chunks",
            &[
                embedding([1.0, 0.0, 0.0]),
                embedding([0.0, 1.0, 0.0]),
                embedding([0.7, 0.7, 0.0]),
            ],
            vec![
                chunk_metadata("a.py", 0, "alpha"),
                chunk_metadata("b.py", 0, "beta"),
                chunk_metadata("c.py", 0, "gamma"),
            ],
        )
        .await
        .unwrap();
    assert_eq!(ids, vec!["a.py:0", "b.py:0", "c.py:0"]);

    let hits = store
        .search_similar("chunks", &[1.0, 0.1, 0.0], 2)
        .await
        .unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].file_path, "a.py");
    assert_eq!(hits[0].content, "alpha");
    assert_eq!(hits[1].file_path, "c.py");
    assert!(hits[0].score >= hits[1].score);
}

#[tokio::test]
async fn test_reopen_restores_collection() {
    let dir = TempDir::new().unwrap();
    {
        let store = store(&dir).await;
        store.create_collection("chunks", DIMS).await.unwrap();
        store
            .insert_vectors(
                "chunks",
                &[embedding([0.0, 0.0, 1.0]), embedding([0.0, 1.0, 0.0])],
                vec![
                    chunk_metadata("README.md", 0, "hello world"),
                    chunk_metadata("main.py", 0, "print"),
                ],
            )
            .await
            .unwrap();
    }

    let reopened = store(&dir).await;
    assert!(reopened.collection_exists("chunks").await.unwrap());

    let hits = reopened
        .search_similar("chunks", &[0.0, 0.0, 1.0], 1)
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "README.md:0");
    assert_eq!(hits[0].as_context(), "file_path: README.md\n\nhello world");

    let stats = reopened.get_stats("chunks").await.unwrap();
    assert_eq!(stats.get("total_vectors"), Some(&serde_json::json!(2)));
}

#[tokio::test]
async fn test_small_shards_split_records() {
    let dir = TempDir::new().unwrap();
    let store = FilesystemVectorStore::new(FilesystemVectorStoreConfig {
        max_vectors_per_shard: 2,
        ..FilesystemVectorStoreConfig::new(dir.path(), DIMS)
    })
    .await
    .unwrap();
    store.create_collection("chunks", DIMS).await.unwrap();

    let vectors: Vec<Embedding> = (0..5)
        .map(|i| embedding([1.0, i as f32, 0.0]))
        .collect();
    let metadata = (0..5)
        .map(|i| chunk_metadata("big.md", i, &format!("part {i}")))
        .collect();
    store.insert_vectors("chunks", &vectors, metadata).await.unwrap();

    let stats = store.get_stats("chunks").await.unwrap();
    assert_eq!(stats.get("total_shards"), Some(&serde_json::json!(3)));

    let hits = store.search_similar("chunks", &[0.0, 1.0, 0.0], 5).await.unwrap();
    assert_eq!(hits.len(), 5);
    assert_eq!(hits[0].content, "part 4");
}

#[tokio::test]
async fn test_dimension_mismatch_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir).await;

    let err = store.create_collection("chunks", 384).await.unwrap_err();
    assert!(matches!(err, Error::VectorDb { .. }));

    store.create_collection("chunks", DIMS).await.unwrap();
    let err = store
        .insert_vectors(
            "chunks",
            &[Embedding {
                vector: vec![1.0; 4],
                model: "test".to_string(),
                dimensions: 4,
            }],
            vec![chunk_metadata("a.py", 0, "a")],
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::VectorDb { .. }));
}

#[tokio::test]
async fn test_corrupted_index_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("chunks_index.json"), "{not json").unwrap();

    let store = store(&dir).await;
    let err = store
        .search_similar("chunks", &[1.0, 0.0, 0.0], 2)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::IndexCorrupted { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_delete_collection_removes_files() {
    let dir = TempDir::new().unwrap();
    let store = store(&dir).await;
    store.create_collection("chunks", DIMS).await.unwrap();
    store
        .insert_vectors(
            "chunks",
            &[embedding([1.0, 0.0, 0.0])],
            vec![chunk_metadata("a.py", 0, "a")],
        )
        .await
        .unwrap();

    store.delete_collection("chunks").await.unwrap();

    assert!(!store.collection_exists("chunks").await.unwrap());
    assert!(!dir.path().join("chunks_shards").exists());
}
