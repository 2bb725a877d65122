use std::fs;
use std::path::{Path, PathBuf};

use chunkline_core::Document;
use chunkline_splitters::Language;

use crate::encoding::decode_text;
use crate::IngestionError;

/// Extensions loaded as plain text besides the ones with a separator preset.
const PLAIN_TEXT_EXTENSIONS: &[&str] = &[
    "txt", "text", "log", "csv", "tsv", "json", "jsonl", "xml", "yaml", "yml", "toml", "ini",
    "cfg", "sql", "sh",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Detect the charset of files that are not valid UTF-8.
    pub autodetect_encoding: bool,
    /// Load every file as text regardless of its extension.
    pub force_text: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FileKind {
    Text,
    Pdf,
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn classify(path: &Path, options: LoadOptions) -> Result<FileKind, IngestionError> {
    if options.force_text {
        return Ok(FileKind::Text);
    }

    let extension = extension_of(path);
    if extension == "pdf" {
        return Ok(FileKind::Pdf);
    }
    if PLAIN_TEXT_EXTENSIONS.contains(&extension.as_str())
        || Language::from_extension(&extension).is_some()
    {
        return Ok(FileKind::Text);
    }

    Err(IngestionError::UnsupportedExtension {
        path: path.to_path_buf(),
        extension,
    })
}

/// Builds the single document a file loader yields: the id and `source` are the
/// path, and `language` is set when the extension maps to a splitter preset.
pub(crate) fn document_for(path: &Path, content: String) -> Document {
    let source = path.to_string_lossy().into_owned();
    let document = Document::new(source.clone(), content).with_metadata("source", source);

    match Language::from_extension(&extension_of(path)) {
        Some(language) => document.with_metadata("language", language.as_str()),
        None => document,
    }
}

pub struct TextLoader {
    path: PathBuf,
    autodetect_encoding: bool,
}

impl TextLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            autodetect_encoding: false,
        }
    }

    pub fn autodetect_encoding(mut self, value: bool) -> Self {
        self.autodetect_encoding = value;
        self
    }

    pub fn load(&self) -> Result<Vec<Document>, IngestionError> {
        let bytes = fs::read(&self.path).map_err(|source| IngestionError::Read {
            path: self.path.clone(),
            source,
        })?;
        let content = decode_text(bytes, self.autodetect_encoding).map_err(|reason| {
            IngestionError::Decode {
                path: self.path.clone(),
                reason,
            }
        })?;

        Ok(vec![document_for(&self.path, content)])
    }
}

pub struct PdfLoader {
    path: PathBuf,
}

impl PdfLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(feature = "pdf")]
    pub fn load(&self) -> Result<Vec<Document>, IngestionError> {
        let bytes = fs::read(&self.path).map_err(|source| IngestionError::Read {
            path: self.path.clone(),
            source,
        })?;
        let content =
            pdf_extract::extract_text_from_mem(&bytes).map_err(|err| IngestionError::Parse {
                path: self.path.clone(),
                reason: err.to_string(),
            })?;

        Ok(vec![document_for(&self.path, content)])
    }

    #[cfg(not(feature = "pdf"))]
    pub fn load(&self) -> Result<Vec<Document>, IngestionError> {
        Err(IngestionError::Parse {
            path: self.path.clone(),
            reason: "pdf support is disabled; rebuild with the `pdf` feature".to_string(),
        })
    }
}

/// Loads one file, picking the loader from its extension.
pub fn load_file(path: &Path, options: LoadOptions) -> Result<Vec<Document>, IngestionError> {
    match classify(path, options)? {
        FileKind::Text => TextLoader::new(path)
            .autodetect_encoding(options.autodetect_encoding)
            .load(),
        FileKind::Pdf => PdfLoader::new(path).load(),
    }
}

pub async fn load_file_async(path: PathBuf) -> Result<Vec<Document>, IngestionError> {
    load_file_async_with(path, LoadOptions::default()).await
}

pub async fn load_file_async_with(
    path: PathBuf,
    options: LoadOptions,
) -> Result<Vec<Document>, IngestionError> {
    match classify(&path, options)? {
        FileKind::Text => {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|source| IngestionError::Read {
                    path: path.clone(),
                    source,
                })?;
            let content = decode_text(bytes, options.autodetect_encoding)
                .map_err(|reason| IngestionError::Decode {
                    path: path.clone(),
                    reason,
                })?;
            Ok(vec![document_for(&path, content)])
        }
        FileKind::Pdf => {
            let task_path = path.clone();
            tokio::task::spawn_blocking(move || PdfLoader::new(task_path).load())
                .await
                .map_err(|err| IngestionError::Parse {
                    path,
                    reason: format!("pdf loader task failed: {err}"),
                })?
        }
    }
}

/// Loads every path concurrently; documents come back in input order.
pub async fn load_files_async(paths: Vec<PathBuf>) -> Result<Vec<Document>, IngestionError> {
    let loaded = futures::future::try_join_all(paths.into_iter().map(load_file_async)).await?;
    Ok(loaded.into_iter().flatten().collect())
}
