use std::{error::Error as StdError, fmt, time::Duration};

use thiserror::Error;

/// Workspace-level error that component errors convert into with `?`.
#[derive(Debug, Error)]
pub enum ChunklineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("Vector store failed: {0}")]
    Store(#[from] StoreError),
    #[error("Serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors an [`Embedding`](crate::Embedding) backend reports.
///
/// The bundled hashing embedder never fails; these variants are the surface
/// for remote or model-backed implementations outside this workspace.
#[derive(Debug)]
pub enum EmbeddingError {
    InvalidResponse(String),
    RateLimited { retry_after: Option<Duration> },
    Provider(String),
    Other(Box<dyn StdError + Send + Sync>),
}

impl fmt::Display for EmbeddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbeddingError::InvalidResponse(message) => {
                write!(f, "invalid embedding response: {message}")
            }
            EmbeddingError::RateLimited { retry_after } => match retry_after {
                Some(duration) => write!(f, "rate limited (retry_after={duration:?})"),
                None => write!(f, "rate limited (retry_after=unknown)"),
            },
            EmbeddingError::Provider(message) => write!(f, "embedding provider error: {message}"),
            EmbeddingError::Other(error) => write!(f, "embedding error: {error}"),
        }
    }
}

impl StdError for EmbeddingError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            EmbeddingError::Other(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

/// Errors a [`VectorStore`](crate::VectorStore) reports.
///
/// The in-memory store raises the first three; `Internal` wraps backend
/// failures of external store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("invalid document id: {0}")]
    InvalidId(String),
    #[error("document '{0}' is missing an embedding")]
    MissingEmbedding(String),
    #[error("store error: {0}")]
    Internal(#[source] Box<dyn StdError + Send + Sync>),
}
