use std::io::Write;

use chunkline_retrieval::{HashEmbedder, InMemoryVectorStore, Indexer, Retriever};

use crate::cli::QueryArgs;
use crate::commands::load_paths;
use crate::config::{ResolvedSplitting, SplitterPool};

pub async fn run<W: Write>(args: QueryArgs, out: &mut W) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.dir.is_dir(),
        "{} is not a directory",
        args.dir.display()
    );

    let resolved = ResolvedSplitting::from_args(&args.splitter)?;
    let mut pool = SplitterPool::new(resolved)?;

    let documents = load_paths(std::slice::from_ref(&args.dir), &args.load).await?;
    let chunks = pool.split(&documents)?;

    let embedder = HashEmbedder::new(args.dimension);
    let store = InMemoryVectorStore::new();
    let indexed = Indexer::new(embedder.clone(), store.clone())
        .index(chunks)
        .await?;
    tracing::info!(documents = documents.len(), chunks = indexed, "indexed directory");

    let results = Retriever::new(embedder, store)
        .retrieve(&args.question, args.top_k, None)
        .await?;
    for result in results {
        writeln!(out, "{:.4}\t{}", result.score, result.document.id)?;
        writeln!(out, "{}", result.document.content)?;
        writeln!(out)?;
    }
    Ok(())
}
