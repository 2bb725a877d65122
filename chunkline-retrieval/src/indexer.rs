use chunkline_core::{Document, Embedding, VectorStore};

use crate::RetrievalError;

/// Embeds documents in batches and writes them to a store.
pub struct Indexer<E, S> {
    embedder: E,
    store: S,
    batch_size: usize,
}

impl<E, S> Indexer<E, S>
where
    E: Embedding,
    S: VectorStore,
{
    pub fn new(embedder: E, store: S) -> Self {
        Self {
            embedder,
            store,
            batch_size: 64,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the number of documents written.
    pub async fn index(&self, docs: Vec<Document>) -> Result<usize, RetrievalError> {
        if let Some(doc) = docs.iter().find(|doc| doc.id.trim().is_empty()) {
            return Err(RetrievalError::InvalidId(doc.id.clone()));
        }

        let total = docs.len();
        let mut remaining = docs.into_iter().peekable();
        while remaining.peek().is_some() {
            let batch: Vec<Document> = remaining.by_ref().take(self.batch_size).collect();
            let texts: Vec<String> = batch.iter().map(|doc| doc.content.clone()).collect();
            let embeddings = self.embedder.embed_batch(&texts).await?;
            if embeddings.len() != batch.len() {
                return Err(RetrievalError::EmbeddingCountMismatch {
                    expected: batch.len(),
                    got: embeddings.len(),
                });
            }

            let embedded = batch
                .into_iter()
                .zip(embeddings)
                .map(|(mut doc, embedding)| {
                    doc.embedding = Some(embedding);
                    doc
                })
                .collect();
            self.store.add(embedded).await?;
        }

        tracing::debug!(documents = total, "indexed documents");
        Ok(total)
    }
}
