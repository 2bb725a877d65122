use chunkline_core::{Document, MetadataFilter, StoreError, VectorStore};
use chunkline_retrieval::InMemoryVectorStore;
use serde_json::json;

fn embedded(id: &str, content: &str, embedding: Vec<f32>) -> Document {
    let mut document = Document::new(id, content);
    document.embedding = Some(embedding);
    document
}

#[tokio::test]
async fn in_memory_store_ranks_by_cosine_similarity() {
    let store = InMemoryVectorStore::new();
    store
        .add(vec![
            embedded("a", "a", vec![1.0, 0.0, 0.0]),
            embedded("b", "b", vec![0.0, 1.0, 0.0]),
            embedded("c", "c", vec![0.7, 0.7, 0.0]),
        ])
        .await
        .unwrap();

    let results = store.search(&[1.0, 0.0, 0.0], 3, None).await.unwrap();
    let ids: Vec<_> = results.iter().map(|r| r.document.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c", "b"]);
    assert!(results[0].document.embedding.is_none());
}

#[tokio::test]
async fn in_memory_store_dimension_mismatch_on_add_and_search() {
    let store = InMemoryVectorStore::new();
    store
        .add(vec![embedded("a", "a", vec![1.0, 0.0])])
        .await
        .unwrap();

    let err = store
        .add(vec![embedded("b", "b", vec![1.0, 0.0, 0.0])])
        .await
        .unwrap_err();
    assert!(format!("{err}").contains("dimension mismatch"));

    let err = store.search(&[1.0, 0.0, 0.0], 1, None).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::DimensionMismatch {
            expected: 2,
            got: 3
        }
    ));
}

#[tokio::test]
async fn in_memory_store_rejects_missing_embedding_and_blank_id() {
    let store = InMemoryVectorStore::new();

    let err = store.add(vec![Document::new("a", "a")]).await.unwrap_err();
    assert!(matches!(err, StoreError::MissingEmbedding(id) if id == "a"));

    let err = store
        .add(vec![embedded(" ", "blank", vec![1.0])])
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidId(_)));
}

#[tokio::test]
async fn in_memory_store_duplicate_ids_overwrite_existing_doc() {
    let store = InMemoryVectorStore::new();
    store
        .add(vec![embedded("a", "first", vec![1.0, 0.0, 0.0])])
        .await
        .unwrap();
    store
        .add(vec![embedded("a", "second", vec![1.0, 0.0, 0.0])])
        .await
        .unwrap();

    let results = store.search(&[1.0, 0.0, 0.0], 5, None).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.content, "second");
}

#[tokio::test]
async fn in_memory_store_delete_keeps_remaining_entries_addressable() {
    let store = InMemoryVectorStore::new();
    store
        .add(vec![
            embedded("a", "a", vec![1.0, 0.0]),
            embedded("b", "b", vec![0.0, 1.0]),
            embedded("c", "c", vec![1.0, 1.0]),
        ])
        .await
        .unwrap();

    store
        .delete(&["a".to_string(), "missing".to_string()])
        .await
        .unwrap();
    assert_eq!(store.len().await, 2);

    // "c" moved into the slot freed by "a"; overwriting it must not duplicate it.
    store
        .add(vec![embedded("c", "c2", vec![1.0, 1.0])])
        .await
        .unwrap();
    let results = store.search(&[1.0, 1.0], 5, None).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].document.content, "c2");
}

#[tokio::test]
async fn in_memory_store_applies_metadata_filter() {
    let store = InMemoryVectorStore::new();
    store
        .add(vec![
            embedded("a", "a", vec![1.0, 0.0]).with_metadata("language", json!("python")),
            embedded("b", "b", vec![0.9, 0.1]).with_metadata("language", json!("rust")),
        ])
        .await
        .unwrap();

    let filter = MetadataFilter::eq("language", "rust");
    let results = store.search(&[1.0, 0.0], 5, Some(&filter)).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.id, "b");
}

#[tokio::test]
async fn in_memory_store_nan_scores_do_not_panic() {
    let store = InMemoryVectorStore::new();
    store
        .add(vec![
            embedded("a", "a", vec![f32::NAN, 0.0, 0.0]),
            embedded("b", "b", vec![0.0, 1.0, 0.0]),
        ])
        .await
        .unwrap();

    let results = store.search(&[1.0, 0.0, 0.0], 5, None).await.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1].document.id, "a");
}
