use async_trait::async_trait;
use chunkline_core::{Document, Embedding, EmbeddingError, VectorStore};
use chunkline_retrieval::{HashEmbedder, InMemoryVectorStore, Indexer, RetrievalError};

struct ShortEmbedder;

#[async_trait]
impl Embedding for ShortEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(vec![1.0])
    }

    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(vec![vec![1.0]])
    }

    fn dimension(&self) -> usize {
        1
    }
}

#[tokio::test]
async fn indexer_rejects_empty_id() {
    let indexer = Indexer::new(HashEmbedder::new(8), InMemoryVectorStore::new());

    let error = indexer
        .index(vec![Document::new("   ", "hello")])
        .await
        .unwrap_err();

    assert!(matches!(error, RetrievalError::InvalidId(id) if id.trim().is_empty()));
}

#[tokio::test]
async fn indexer_embeds_and_adds_documents() {
    let embedder = HashEmbedder::new(64);
    let query_embedder = embedder.clone();
    let store = InMemoryVectorStore::new();
    let indexer = Indexer::new(embedder, store.clone());

    let written = indexer
        .index(vec![
            Document::new("doc-1", "first document"),
            Document::new("doc-2", "second entry"),
        ])
        .await
        .unwrap();
    assert_eq!(written, 2);

    let query_embedding = query_embedder.embed("first document").await.unwrap();
    let results = store.search(&query_embedding, 1, None).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.id, "doc-1");
    assert_eq!(results[0].document.content, "first document");
}

#[tokio::test]
async fn indexer_writes_every_batch() {
    let store = InMemoryVectorStore::new();
    let indexer = Indexer::new(HashEmbedder::new(16), store.clone()).with_batch_size(3);

    let docs: Vec<_> = (0..10)
        .map(|index| Document::new(format!("doc-{index}"), format!("body {index}")))
        .collect();
    let written = indexer.index(docs).await.unwrap();

    assert_eq!(written, 10);
    assert_eq!(indexer.store().len().await, 10);
}

#[tokio::test]
async fn indexer_detects_embedding_count_mismatch() {
    let indexer = Indexer::new(ShortEmbedder, InMemoryVectorStore::new());

    let error = indexer
        .index(vec![Document::new("a", "one"), Document::new("b", "two")])
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        RetrievalError::EmbeddingCountMismatch {
            expected: 2,
            got: 1
        }
    ));
}
