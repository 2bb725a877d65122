use std::collections::HashMap;
use std::sync::Arc;

use chunkline_core::{Document, MetadataFilter, SearchResult, StoreError, VectorStore};
use tokio::sync::RwLock;

struct Entry {
    document: Document,
    embedding: Vec<f32>,
}

#[derive(Default)]
struct StoreInner {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
    dimension: Option<usize>,
}

/// Brute-force cosine-similarity store kept entirely in memory.
///
/// Clones share the same underlying data.
#[derive(Clone, Default)]
pub struct InMemoryVectorStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn add(&self, docs: Vec<Document>) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        for mut document in docs {
            if document.id.trim().is_empty() {
                return Err(StoreError::InvalidId(document.id));
            }

            let embedding = document
                .embedding
                .take()
                .ok_or_else(|| StoreError::MissingEmbedding(document.id.clone()))?;
            match inner.dimension {
                Some(expected) if expected != embedding.len() => {
                    return Err(StoreError::DimensionMismatch {
                        expected,
                        got: embedding.len(),
                    });
                }
                None => inner.dimension = Some(embedding.len()),
                _ => {}
            }

            let entry = Entry {
                document,
                embedding,
            };
            if let Some(&position) = inner.index.get(&entry.document.id) {
                inner.entries[position] = entry;
            } else {
                let position = inner.entries.len();
                inner.index.insert(entry.document.id.clone(), position);
                inner.entries.push(entry);
            }
        }
        Ok(())
    }

    async fn search(
        &self,
        query_embedding: &[f32],
        top_k: usize,
        filter: Option<&MetadataFilter>,
    ) -> Result<Vec<SearchResult>, StoreError> {
        let inner = self.inner.read().await;
        let expected = inner.dimension.unwrap_or(query_embedding.len());
        if expected != query_embedding.len() {
            return Err(StoreError::DimensionMismatch {
                expected,
                got: query_embedding.len(),
            });
        }

        let mut scored: Vec<SearchResult> = inner
            .entries
            .iter()
            .filter(|entry| filter.map_or(true, |filter| filter.matches(&entry.document.metadata)))
            .map(|entry| {
                let score = cosine_similarity(query_embedding, &entry.embedding);
                SearchResult {
                    document: entry.document.clone(),
                    score: if score.is_nan() {
                        f32::NEG_INFINITY
                    } else {
                        score
                    },
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(top_k);
        Ok(scored)
    }

    async fn delete(&self, ids: &[String]) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        for id in ids {
            let Some(position) = inner.index.remove(id) else {
                continue;
            };
            inner.entries.swap_remove(position);
            if let Some(moved) = inner.entries.get(position) {
                let moved_id = moved.document.id.clone();
                inner.index.insert(moved_id, position);
            }
        }
        Ok(())
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
