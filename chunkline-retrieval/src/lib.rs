//! Loading, indexing and retrieval around the chunkline splitters.

mod directory;
mod encoding;
mod error;
mod hash_embedder;
mod in_memory;
mod indexer;
mod loader;
mod retriever;

use std::path::PathBuf;

use chunkline_core::{Document, Embedding, VectorStore};
use chunkline_splitters::RecursiveCharacterTextSplitter;

pub use directory::DirectoryLoader;
pub use error::{IngestionError, RetrievalError};
pub use hash_embedder::HashEmbedder;
pub use in_memory::InMemoryVectorStore;
pub use indexer::Indexer;
pub use loader::{
    load_file, load_file_async, load_file_async_with, load_files_async, LoadOptions, PdfLoader,
    TextLoader,
};
pub use retriever::Retriever;

pub async fn load_and_split(
    paths: Vec<PathBuf>,
    splitter: &RecursiveCharacterTextSplitter,
) -> Result<Vec<Document>, IngestionError> {
    let documents = load_files_async(paths).await?;
    Ok(splitter.split_documents(&documents))
}

/// Loads a directory, splits it and indexes the chunks; returns the number of
/// chunks written.
pub async fn ingest_directory<E, S>(
    loader: &DirectoryLoader,
    splitter: &RecursiveCharacterTextSplitter,
    indexer: &Indexer<E, S>,
) -> Result<usize, RetrievalError>
where
    E: Embedding,
    S: VectorStore,
{
    let documents = loader.load_async().await?;
    let chunks = splitter.split_documents(&documents);
    tracing::info!(
        documents = documents.len(),
        chunks = chunks.len(),
        "ingesting directory"
    );
    indexer.index(chunks).await
}
