use std::sync::Arc;

use async_trait::async_trait;
use chunkline_core::{
    Document, Embedding, EmbeddingError, MetadataFilter, SearchResult, StoreError, VectorStore,
};

struct ConstantEmbedding;

#[async_trait]
impl Embedding for ConstantEmbedding {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(vec![1.0])
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(vec![vec![1.0]; texts.len()])
    }

    fn dimension(&self) -> usize {
        1
    }
}

struct NullStore;

#[async_trait]
impl VectorStore for NullStore {
    async fn add(&self, _docs: Vec<Document>) -> Result<(), StoreError> {
        Ok(())
    }

    async fn search(
        &self,
        _query_embedding: &[f32],
        _top_k: usize,
        _filter: Option<&MetadataFilter>,
    ) -> Result<Vec<SearchResult>, StoreError> {
        Ok(Vec::new())
    }

    async fn delete(&self, _ids: &[String]) -> Result<(), StoreError> {
        Ok(())
    }
}

#[tokio::test]
async fn contracts_are_object_safe() {
    let embedding: Arc<dyn Embedding> = Arc::new(ConstantEmbedding);
    let store: Arc<dyn VectorStore> = Arc::new(NullStore);

    let vectors = embedding
        .embed_batch(&["a".to_string(), "b".to_string()])
        .await
        .unwrap();
    assert_eq!(vectors.len(), 2);
    assert_eq!(embedding.dimension(), 1);

    store.add(Vec::new()).await.unwrap();
    assert!(store.search(&vectors[0], 3, None).await.unwrap().is_empty());
}
