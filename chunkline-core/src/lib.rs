//! Shared types for chunkline: documents, metadata values, error enums and the
//! async contracts that downstream embedding and storage backends implement.

mod document;
mod embedding;
mod error;
mod metadata_filter;
mod value;
mod vector_store;

pub use document::Document;
pub use embedding::Embedding;
pub use error::{ChunklineError, EmbeddingError, StoreError};
pub use metadata_filter::MetadataFilter;
pub use value::{Metadata, Value};
pub use vector_store::{SearchResult, VectorStore};
