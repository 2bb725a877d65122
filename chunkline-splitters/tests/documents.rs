use chunkline_core::{ChunklineError, Document};
use chunkline_splitters::{KeepSeparator, Language, RecursiveCharacterTextSplitter, SplitterConfig};
use serde_json::json;

#[test]
fn split_documents_propagates_metadata_and_indexes_chunks() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(5)
        .chunk_overlap(0)
        .build()
        .unwrap();

    let input = Document::new("doc-1", "one two three")
        .with_metadata("source", "unit-test.txt")
        .with_metadata("category", "test");

    let chunks = splitter.split_documents(&[input]);

    assert_eq!(chunks.len(), 3);
    for (index, doc) in chunks.iter().enumerate() {
        assert_eq!(doc.id, format!("doc-1:{index}"));
        assert_eq!(doc.metadata.get("source"), Some(&json!("unit-test.txt")));
        assert_eq!(doc.metadata.get("category"), Some(&json!("test")));
        assert_eq!(doc.metadata.get("chunk_index"), Some(&json!(index)));
        assert!(doc.metadata.get("start_index").is_none());
        assert!(doc.content.chars().count() <= 5);
    }
}

#[test]
fn split_documents_records_start_index_when_enabled() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(4)
        .chunk_overlap(0)
        .add_start_index(true)
        .build()
        .unwrap();

    let chunks = splitter.split_documents(&[Document::new("d", "abcd efgh")]);

    let starts: Vec<_> = chunks
        .iter()
        .map(|doc| doc.metadata.get("start_index").cloned())
        .collect();
    assert_eq!(starts, vec![Some(json!(0)), Some(json!(5))]);
}

#[test]
fn split_documents_flags_oversized_chunks() {
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(3)
        .chunk_overlap(0)
        .separators([" "])
        .build()
        .unwrap();

    let chunks = splitter.split_documents(&[Document::new("d", "ab abcdef")]);

    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].metadata.get("oversized").is_none());
    assert_eq!(chunks[1].metadata.get("oversized"), Some(&json!(true)));
    assert_eq!(chunks[1].content, "abcdef");
}

#[test]
fn create_documents_numbers_each_input_text() {
    let splitter = RecursiveCharacterTextSplitter::from_language(Language::Python, 50, 0).unwrap();

    let docs = splitter.create_documents(&["def a():\n    pass\n", "", "x = 1\n"]);

    let ids: Vec<&str> = docs.iter().map(|doc| doc.id.as_str()).collect();
    assert_eq!(ids, vec!["text-0:0", "text-2:0"]);
}

#[test]
fn splitter_config_loads_from_json() {
    let config = SplitterConfig::from_json(
        r#"{"chunk_size": 60, "chunk_overlap": 10, "language": "markdown", "add_start_index": true}"#,
    )
    .unwrap();

    assert_eq!(config.language, Some(Language::Markdown));
    assert_eq!(config.resolved_keep_separator(), KeepSeparator::Start);

    let splitter = RecursiveCharacterTextSplitter::from_config(config).unwrap();
    assert_eq!(splitter.chunk_size(), 60);
    assert_eq!(splitter.chunk_overlap(), 10);
    assert_eq!(splitter.separators()[0], "\n# ");
}

#[test]
fn splitter_config_json_defaults_and_validation() {
    let config = SplitterConfig::from_json("{}").unwrap();
    assert_eq!(config, SplitterConfig::default());
    assert_eq!(config.resolved_keep_separator(), KeepSeparator::Discard);

    let invalid = SplitterConfig::from_json(r#"{"chunk_size": 3, "chunk_overlap": 3}"#).unwrap_err();
    assert!(matches!(invalid, ChunklineError::InvalidConfig(_)));

    let unknown = SplitterConfig::from_json(r#"{"chunk_sise": 3}"#).unwrap_err();
    assert!(matches!(unknown, ChunklineError::Serde(_)));
}
