use std::fs;

use chunkline_retrieval::{
    ingest_directory, load_and_split, DirectoryLoader, HashEmbedder, InMemoryVectorStore, Indexer,
    Retriever,
};
use chunkline_splitters::{KeepSeparator, RecursiveCharacterTextSplitter};
use tempfile::tempdir;

#[tokio::test]
async fn load_and_split_ingests_txt_with_expected_metadata() {
    let dir = tempdir().expect("temp dir");
    let txt_path = dir.path().join("notes.txt");
    fs::write(
        &txt_path,
        "alpha beta gamma delta epsilon zeta eta theta iota kappa",
    )
    .expect("write temp text fixture");

    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(20)
        .chunk_overlap(5)
        .add_start_index(true)
        .build()
        .expect("splitter should build");

    let chunks = load_and_split(vec![txt_path.clone()], &splitter)
        .await
        .expect("ingestion and split should succeed");

    assert!(chunks.len() > 2);
    for chunk in &chunks {
        let source = chunk.source().expect("chunk source metadata");
        let chunk_index = chunk
            .metadata
            .get("chunk_index")
            .and_then(|value| value.as_u64())
            .expect("chunk index metadata");
        let start_index = chunk
            .metadata
            .get("start_index")
            .and_then(|value| value.as_u64())
            .expect("start index metadata") as usize;

        assert!(source.ends_with("notes.txt"));
        assert!(chunk.id.ends_with(&format!(":{chunk_index}")));
        assert!(chunk.content.chars().count() <= 20);
        assert_eq!(
            &"alpha beta gamma delta epsilon zeta eta theta iota kappa"[start_index..]
                [..chunk.content.len()],
            chunk.content
        );
    }
}

#[tokio::test]
async fn ingest_directory_makes_code_searchable() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("shapes.py"),
        "class Circle:\n    def area(self):\n        return 3.14 * self.r * self.r\n\n\
         class Square:\n    def area(self):\n        return self.side * self.side\n",
    )
    .expect("write python fixture");
    fs::write(
        dir.path().join("README.md"),
        "# Shapes\n\nGeometry helpers for circles and squares.\n",
    )
    .expect("write markdown fixture");

    let loader = DirectoryLoader::new(dir.path()).glob("**/*.py");
    let splitter = RecursiveCharacterTextSplitter::builder()
        .chunk_size(60)
        .chunk_overlap(0)
        .keep_separator(KeepSeparator::Start)
        .separators(RecursiveCharacterTextSplitter::separators_for_language(
            chunkline_splitters::Language::Python,
        ))
        .build()
        .expect("splitter should build");
    let embedder = HashEmbedder::new(1024);
    let store = InMemoryVectorStore::new();
    let indexer = Indexer::new(embedder.clone(), store.clone());

    let written = ingest_directory(&loader, &splitter, &indexer)
        .await
        .expect("ingest directory");
    assert!(written >= 2);
    assert_eq!(store.len().await, written);

    let results = Retriever::new(embedder, store)
        .retrieve("class Square", 1, None)
        .await
        .expect("retrieve");
    assert!(results[0].document.content.contains("Square"));
    assert!(results[0]
        .document
        .source()
        .is_some_and(|source| source.ends_with("shapes.py")));
}
