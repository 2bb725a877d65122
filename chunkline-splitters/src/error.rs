use chunkline_core::ChunklineError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitterConfigError {
    #[error("chunk_size must be greater than zero")]
    ChunkSizeMustBeGreaterThanZero,
    #[error("chunk_overlap ({chunk_overlap}) must be smaller than chunk_size ({chunk_size})")]
    OverlapNotSmallerThanChunkSize {
        chunk_size: usize,
        chunk_overlap: usize,
    },
    #[error("separator list must not be empty")]
    EmptySeparators,
    #[error("set either a language preset or custom separators, not both")]
    ConflictingSeparators,
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),
}

impl From<SplitterConfigError> for ChunklineError {
    fn from(value: SplitterConfigError) -> Self {
        ChunklineError::InvalidConfig(value.to_string())
    }
}
