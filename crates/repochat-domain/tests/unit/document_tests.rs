//! Tests for documents, chunks and repository coordinates

use repochat_domain::entities::{Document, RepositoryCoordinates, TextChunk};
use serde_json::json;

#[test]
fn test_document_metadata_has_path_and_name() {
    let doc = Document::new("abc", "src/app/main.py", "print('hi')");

    assert_eq!(doc.metadata["file_path"], json!("src/app/main.py"));
    assert_eq!(doc.metadata["file_name"], json!("main.py"));
    assert_eq!(doc.extension(), Some("py"));
}

#[test]
fn test_document_extension_edge_cases() {
    assert_eq!(Document::new("1", ".gitignore", "").extension(), None);
    assert_eq!(Document::new("2", "Makefile", "").extension(), None);
    assert_eq!(Document::new("3", "docs/a.b/notes.md", "").extension(), Some("md"));
}

#[test]
fn test_chunk_ids_and_metadata() {
    let doc = Document::new("sha1", "README.md", "# Title");
    let chunk = TextChunk::new(&doc, 3, "# Title");

    assert_eq!(chunk.id, "README.md:3");
    assert_eq!(chunk.document_id, "sha1");

    let meta = chunk.metadata();
    assert_eq!(meta["file_path"], json!("README.md"));
    assert_eq!(meta["chunk_index"], json!(3));
    assert_eq!(meta["content"], json!("# Title"));
}

#[test]
fn test_repository_coordinates_default_branch() {
    let repo = RepositoryCoordinates::new("octocat", "Hello-World");
    assert_eq!(repo.branch, "main");
    assert_eq!(repo.to_string(), "octocat/Hello-World@main");

    let dev = repo.with_branch("dev");
    assert_eq!(dev.to_string(), "octocat/Hello-World@dev");
}
