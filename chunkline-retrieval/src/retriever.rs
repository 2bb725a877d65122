use chunkline_core::{Embedding, MetadataFilter, SearchResult, VectorStore};

use crate::RetrievalError;

/// Answers a text query by embedding it and searching the store with the
/// same embedder used at indexing time.
pub struct Retriever<E, S> {
    embedder: E,
    store: S,
}

impl<E, S> Retriever<E, S>
where
    E: Embedding,
    S: VectorStore,
{
    pub fn new(embedder: E, store: S) -> Self {
        Self { embedder, store }
    }

    pub async fn retrieve(
        &self,
        query: &str,
        top_k: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<SearchResult>, RetrievalError> {
        let embedding = self.embedder.embed(query).await?;
        let results = self.store.search(&embedding, top_k, filter).await?;
        Ok(results)
    }
}
