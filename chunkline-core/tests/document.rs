use chunkline_core::{Document, Value};
use serde_json::json;

#[test]
fn document_roundtrip() {
    let doc = Document::new("doc-1", "hello")
        .with_metadata("source", "notes/hello.txt")
        .with_metadata("page", 3);

    let json = serde_json::to_string(&doc).unwrap();
    let parsed: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(doc, parsed);
}

#[test]
fn document_without_embedding_omits_field() {
    let doc = Document::new("doc-1", "hello");

    let json = serde_json::to_value(&doc).unwrap();
    assert!(json.get("embedding").is_none());
}

#[test]
fn document_deserializes_without_metadata() {
    let parsed: Document = serde_json::from_value(json!({
        "id": "doc-2",
        "content": "plain"
    }))
    .unwrap();

    assert!(parsed.metadata.is_empty());
    assert_eq!(parsed.embedding, None);
}

#[test]
fn document_source_reads_string_metadata_only() {
    let doc = Document::new("doc-1", "x").with_metadata("source", "a.md");
    assert_eq!(doc.source(), Some("a.md"));

    let numeric = Document::new("doc-2", "x").with_metadata("source", Value::from(7));
    assert_eq!(numeric.source(), None);
}
