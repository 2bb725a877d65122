use std::path::{Path, PathBuf};

use chunkline_core::Document;
use glob::{MatchOptions, Pattern};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::loader::{load_file, LoadOptions};
use crate::IngestionError;

const DEFAULT_GLOB: &str = "**/*";

/// Loads every matching file under a root directory.
///
/// Files are matched on their path relative to the root, visited in sorted
/// order, and returned in that order even when loaded in parallel. Matched
/// files whose extension has no loader are skipped unless `force_text` is set.
#[derive(Clone, Debug)]
pub struct DirectoryLoader {
    root: PathBuf,
    glob: String,
    silent_errors: bool,
    use_multithreading: bool,
    max_depth: Option<usize>,
    include_hidden: bool,
    options: LoadOptions,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            glob: DEFAULT_GLOB.to_string(),
            silent_errors: false,
            use_multithreading: false,
            max_depth: None,
            include_hidden: false,
            options: LoadOptions::default(),
        }
    }

    pub fn glob(mut self, pattern: impl Into<String>) -> Self {
        self.glob = pattern.into();
        self
    }

    /// Log and skip files that fail to load instead of aborting.
    pub fn silent_errors(mut self, value: bool) -> Self {
        self.silent_errors = value;
        self
    }

    pub fn autodetect_encoding(mut self, value: bool) -> Self {
        self.options.autodetect_encoding = value;
        self
    }

    /// Load every matched file as text, whatever its extension.
    pub fn force_text(mut self, value: bool) -> Self {
        self.options.force_text = value;
        self
    }

    pub fn use_multithreading(mut self, value: bool) -> Self {
        self.use_multithreading = value;
        self
    }

    pub fn max_depth(mut self, value: Option<usize>) -> Self {
        self.max_depth = value;
        self
    }

    pub fn include_hidden(mut self, value: bool) -> Self {
        self.include_hidden = value;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files under the root that match the glob, sorted by path.
    pub fn matching_paths(&self) -> Result<Vec<PathBuf>, IngestionError> {
        if !self.root.is_dir() {
            return Err(IngestionError::MissingDirectory(self.root.clone()));
        }

        let pattern = Pattern::new(&self.glob).map_err(|source| IngestionError::InvalidPattern {
            pattern: self.glob.clone(),
            source,
        })?;
        let match_options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let mut walker = WalkDir::new(&self.root).sort_by_file_name();
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let include_hidden = self.include_hidden;
        let root = self.root.clone();
        let mut paths = Vec::new();
        for entry in walker
            .into_iter()
            .filter_entry(|entry| include_hidden || entry.depth() == 0 || !is_hidden(entry.path()))
        {
            let entry = entry.map_err(|source| IngestionError::Walk {
                root: root.clone(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            if pattern.matches_path_with(relative, match_options) {
                paths.push(entry.into_path());
            }
        }

        paths.sort();
        Ok(paths)
    }

    pub fn load(&self) -> Result<Vec<Document>, IngestionError> {
        let span = tracing::info_span!("directory_load", root = %self.root.display(), glob = %self.glob);
        let _entered = span.enter();

        let paths = self.matching_paths()?;
        let results: Vec<Result<Vec<Document>, IngestionError>> = if self.use_multithreading {
            paths
                .par_iter()
                .map(|path| load_file(path, self.options))
                .collect()
        } else {
            paths
                .iter()
                .map(|path| load_file(path, self.options))
                .collect()
        };

        let mut documents = Vec::new();
        let mut skipped = 0usize;
        let mut unsupported = 0usize;
        for result in results {
            match result {
                Ok(loaded) => documents.extend(loaded),
                Err(IngestionError::UnsupportedExtension { path, extension }) => {
                    unsupported += 1;
                    tracing::debug!(path = %path.display(), %extension, "skipping file without a loader");
                }
                Err(error) if self.silent_errors => {
                    skipped += 1;
                    tracing::warn!(%error, "skipping file that failed to load");
                }
                Err(error) => return Err(error),
            }
        }

        tracing::info!(
            files = paths.len(),
            documents = documents.len(),
            skipped,
            unsupported,
            "loaded directory"
        );
        Ok(documents)
    }

    /// Runs [`DirectoryLoader::load`] on the blocking pool.
    pub async fn load_async(&self) -> Result<Vec<Document>, IngestionError> {
        let loader = self.clone();
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || loader.load())
            .await
            .map_err(|err| IngestionError::Read {
                path: root,
                source: std::io::Error::new(std::io::ErrorKind::Other, err.to_string()),
            })?
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
