//! Document splitting

use repochat_application::domain_services::TextSplitter;
use repochat_domain::entities::Document;

#[test]
fn test_chunks_keep_document_order_and_ids() {
    let splitter = TextSplitter::new(40, 0).unwrap();
    let documents = vec![
        Document::new("a1", "docs/guide.md", "First sentence here. Second sentence here."),
        Document::new("b2", "app.py", "import os"),
    ];

    let chunks = splitter.split_documents(&documents);

    let ids: Vec<_> = chunks.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["docs/guide.md:0", "docs/guide.md:1", "app.py:0"]);
    assert_eq!(chunks[1].file_path, "docs/guide.md");
    assert_eq!(chunks[1].chunk_index, 1);
    assert_eq!(chunks[1].content, "Second sentence here.");
    assert_eq!(chunks[2].document_id, "b2");
}

#[test]
fn test_empty_documents_produce_no_chunks() {
    let splitter = TextSplitter::default();
    let documents = vec![
        Document::new("empty", "empty.md", ""),
        Document::new("text", "notes.md", "Some notes."),
    ];

    let chunks = splitter.split_documents(&documents);

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].id, "notes.md:0");
}

#[test]
fn test_chunk_metadata_carries_source() {
    let document = Document::new("sha", "src/lib.ts", "export const x = 1;");
    let chunk = &TextSplitter::default().split_documents(&[document])[0];

    let metadata = chunk.metadata();
    assert_eq!(metadata["file_path"], "src/lib.ts");
    assert_eq!(metadata["document_id"], "sha");
    assert_eq!(metadata["chunk_index"], 0);
    assert_eq!(metadata["content"], "export const x = 1;");
}

#[test]
fn test_no_chunk_exceeds_chunk_size() {
    let splitter = TextSplitter::new(50, 10).unwrap();
    let text = "Sentence number one is here. ".repeat(20) + &"x".repeat(130);

    for chunk in splitter.split(&text) {
        assert!(chunk.chars().count() <= 50, "chunk too long: {chunk:?}");
    }
}
