use std::path::PathBuf;

use chunkline_core::{EmbeddingError, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {reason}", .path.display())]
    Decode { path: PathBuf, reason: String },
    #[error("failed to parse {}: {reason}", .path.display())]
    Parse { path: PathBuf, reason: String },
    #[error("unsupported file extension '{extension}' for {}", .path.display())]
    UnsupportedExtension { path: PathBuf, extension: String },
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("failed to walk {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("invalid document id: {0}")]
    InvalidId(String),
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("ingestion error: {0}")]
    Ingestion(#[from] IngestionError),
    #[error("embedder returned {got} vectors for {expected} documents")]
    EmbeddingCountMismatch { expected: usize, got: usize },
}
