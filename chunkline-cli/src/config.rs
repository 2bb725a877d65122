use std::collections::HashMap;
use std::fs;

use anyhow::Context;
use chunkline_core::Document;
use chunkline_splitters::{Language, RecursiveCharacterTextSplitter, SplitterConfig};

use crate::cli::{LanguageChoice, SplitterArgs};

/// Splitter settings after layering the config file, environment and flags.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSplitting {
    pub config: SplitterConfig,
    /// Choose a language preset per document from its `language` metadata.
    pub auto_language: bool,
}

impl ResolvedSplitting {
    pub fn from_args(args: &SplitterArgs) -> anyhow::Result<Self> {
        let mut config = match &args.config {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path.display()))?;
                serde_json::from_str::<SplitterConfig>(&raw)
                    .with_context(|| format!("invalid splitter config {}", path.display()))?
            }
            None => SplitterConfig::default(),
        };

        if let Some(chunk_size) = args.chunk_size {
            config.chunk_size = chunk_size;
        }
        if let Some(chunk_overlap) = args.chunk_overlap {
            config.chunk_overlap = chunk_overlap;
        }
        if !args.separators.is_empty() {
            config.separators = Some(args.separators.iter().map(|sep| unescape(sep)).collect());
            config.language = None;
        }
        if let Some(keep) = args.keep_separator {
            config.keep_separator = Some(keep.into());
        }
        if args.add_start_index {
            config.add_start_index = true;
        }

        let auto_language = match args.language {
            Some(LanguageChoice::Auto) => {
                config.language = None;
                true
            }
            Some(LanguageChoice::Fixed(language)) => {
                config.language = Some(language);
                config.separators = None;
                false
            }
            None => false,
        };

        config.validate()?;
        Ok(Self {
            config,
            auto_language,
        })
    }
}

/// Builds splitters lazily, one per language preset in use.
pub struct SplitterPool {
    resolved: ResolvedSplitting,
    splitters: HashMap<Option<Language>, RecursiveCharacterTextSplitter>,
}

impl SplitterPool {
    pub fn new(resolved: ResolvedSplitting) -> anyhow::Result<Self> {
        let default = RecursiveCharacterTextSplitter::from_config(resolved.config.clone())?;
        let mut splitters = HashMap::new();
        splitters.insert(None, default);
        Ok(Self {
            resolved,
            splitters,
        })
    }

    pub fn splitter_for(
        &mut self,
        document: &Document,
    ) -> anyhow::Result<&RecursiveCharacterTextSplitter> {
        let language = if self.resolved.auto_language {
            document
                .metadata
                .get("language")
                .and_then(|value| value.as_str())
                .and_then(|name| name.parse::<Language>().ok())
        } else {
            None
        };

        if !self.splitters.contains_key(&language) {
            let config = SplitterConfig {
                language,
                separators: None,
                ..self.resolved.config.clone()
            };
            tracing::debug!(?language, "building splitter for language preset");
            let splitter = RecursiveCharacterTextSplitter::from_config(config)?;
            self.splitters.insert(language, splitter);
        }

        self.splitters
            .get(&language)
            .context("splitter cache lost an entry")
    }

    pub fn split(&mut self, documents: &[Document]) -> anyhow::Result<Vec<Document>> {
        let mut chunks = Vec::new();
        for document in documents {
            let splitter = self.splitter_for(document)?;
            chunks.extend(splitter.split_documents(std::slice::from_ref(document)));
        }
        Ok(chunks)
    }
}

/// Turns `\n`, `\t`, `\r` and `\\` typed on a command line into the
/// characters they name.
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
