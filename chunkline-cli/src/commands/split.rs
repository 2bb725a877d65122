use std::io::Write;

use chunkline_core::Document;

use crate::cli::{OutputFormat, SplitArgs};
use crate::commands::load_paths;
use crate::config::{ResolvedSplitting, SplitterPool};

pub async fn run<W: Write>(args: SplitArgs, out: &mut W) -> anyhow::Result<()> {
    let resolved = ResolvedSplitting::from_args(&args.splitter)?;
    let mut pool = SplitterPool::new(resolved)?;

    let documents = load_paths(&args.paths, &args.load).await?;
    let chunks = pool.split(&documents)?;
    tracing::info!(
        documents = documents.len(),
        chunks = chunks.len(),
        "split documents"
    );

    for chunk in &chunks {
        write_chunk(chunk, args.format, out)?;
    }
    Ok(())
}

fn write_chunk<W: Write>(chunk: &Document, format: OutputFormat, out: &mut W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, chunk)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "--- {} ({} chars)", chunk.id, chunk.content.chars().count())?;
            writeln!(out, "{}", chunk.content)?;
        }
    }
    Ok(())
}
