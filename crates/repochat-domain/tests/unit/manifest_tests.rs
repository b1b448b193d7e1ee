//! Tests for the persisted index manifest

use chrono::Utc;
use repochat_domain::value_objects::{BackendChoice, IndexManifest, SearchResult};

#[test]
fn test_manifest_json_roundtrip_keeps_backend() {
    let manifest = IndexManifest {
        collection: "octocat_hello_world".to_string(),
        backend: BackendChoice::Local,
        embedding_provider: "fastembed".to_string(),
        embedding_model: "BAAI/bge-small-en-v1.5".to_string(),
        dimensions: 384,
        document_count: 2,
        chunk_count: 5,
        owner: "octocat".to_string(),
        repo: "Hello-World".to_string(),
        created_at: Utc::now(),
    };

    let json = serde_json::to_value(&manifest).unwrap();
    assert_eq!(json["backend"], "local");

    let parsed: IndexManifest = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, manifest);
}

#[test]
fn test_search_result_context_rendering() {
    let result = SearchResult {
        id: "a:0".to_string(),
        file_path: "src/lib.rs".to_string(),
        content: "pub fn answer() -> u8 { 42 }".to_string(),
        score: 0.9,
    };

    assert_eq!(
        result.as_context(),
        "file_path: src/lib.rs\n\npub fn answer() -> u8 { 42 }"
    );
}
