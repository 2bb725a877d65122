pub mod languages;
pub mod query;
pub mod separators;
pub mod split;

use std::path::PathBuf;

use anyhow::Context;
use chunkline_core::Document;
use chunkline_retrieval::{load_file_async_with, DirectoryLoader, LoadOptions};

use crate::cli::LoadArgs;

pub(crate) fn directory_loader(root: PathBuf, args: &LoadArgs) -> DirectoryLoader {
    DirectoryLoader::new(root)
        .glob(args.glob.clone())
        .silent_errors(args.silent_errors)
        .autodetect_encoding(args.autodetect_encoding)
        .use_multithreading(args.multithreading)
        .include_hidden(args.include_hidden)
}

/// Loads each argument: directories through the glob, files directly.
pub(crate) async fn load_paths(paths: &[PathBuf], args: &LoadArgs) -> anyhow::Result<Vec<Document>> {
    let options = LoadOptions {
        autodetect_encoding: args.autodetect_encoding,
        force_text: false,
    };

    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            let loaded = directory_loader(path.clone(), args).load_async().await?;
            documents.extend(loaded);
            continue;
        }

        match load_file_async_with(path.clone(), options).await {
            Ok(loaded) => documents.extend(loaded),
            Err(error) if args.silent_errors => {
                tracing::warn!(%error, "skipping file that failed to load");
            }
            Err(error) => {
                return Err(error).with_context(|| format!("failed to load {}", path.display()))
            }
        }
    }
    Ok(documents)
}
