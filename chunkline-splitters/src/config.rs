use chunkline_core::ChunklineError;
use serde::{Deserialize, Serialize};

use crate::{Language, RecursiveCharacterTextSplitter, SplitterConfigError};

pub const DEFAULT_CHUNK_SIZE: usize = 4_000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

/// Where a matched separator ends up once the text is cut on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeepSeparator {
    /// Separators on a chunk boundary are dropped.
    #[default]
    Discard,
    /// Kept as the prefix of the piece that follows it.
    Start,
    /// Kept as the suffix of the piece that precedes it.
    End,
}

/// Serializable splitter settings.
///
/// `separators` and `language` are mutually exclusive; with neither set the
/// paragraph / line / word / character preset is used. When `keep_separator`
/// is unset, language presets keep separators at the start of the following
/// piece (so keywords such as `def` or `fn` survive) and everything else
/// discards them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitterConfig {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separators: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_separator: Option<KeepSeparator>,
    pub add_start_index: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            separators: None,
            language: None,
            keep_separator: None,
            add_start_index: false,
        }
    }
}

impl SplitterConfig {
    /// Parses a JSON config and validates it.
    pub fn from_json(raw: &str) -> Result<Self, ChunklineError> {
        let config: SplitterConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SplitterConfigError> {
        if self.chunk_size == 0 {
            return Err(SplitterConfigError::ChunkSizeMustBeGreaterThanZero);
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(SplitterConfigError::OverlapNotSmallerThanChunkSize {
                chunk_size: self.chunk_size,
                chunk_overlap: self.chunk_overlap,
            });
        }
        self.resolved_separators().map(|_| ())
    }

    pub fn resolved_keep_separator(&self) -> KeepSeparator {
        match (self.keep_separator, self.language) {
            (Some(keep), _) => keep,
            (None, Some(_)) => KeepSeparator::Start,
            (None, None) => KeepSeparator::Discard,
        }
    }

    pub fn resolved_separators(&self) -> Result<Vec<String>, SplitterConfigError> {
        let separators = match (&self.separators, self.language) {
            (Some(_), Some(_)) => return Err(SplitterConfigError::ConflictingSeparators),
            (Some(custom), None) => custom.clone(),
            (None, Some(language)) => to_owned(language.separators()),
            (None, None) => to_owned(&DEFAULT_SEPARATORS),
        };
        if separators.is_empty() {
            return Err(SplitterConfigError::EmptySeparators);
        }
        Ok(separators)
    }
}

fn to_owned(separators: &[&str]) -> Vec<String> {
    separators.iter().map(|separator| separator.to_string()).collect()
}

#[derive(Clone, Debug, Default)]
pub struct RecursiveSplitterBuilder {
    config: SplitterConfig,
}

impl RecursiveSplitterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: SplitterConfig) -> Self {
        Self { config }
    }

    pub fn chunk_size(mut self, value: usize) -> Self {
        self.config.chunk_size = value;
        self
    }

    pub fn chunk_overlap(mut self, value: usize) -> Self {
        self.config.chunk_overlap = value;
        self
    }

    pub fn separators<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.separators = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.config.language = Some(language);
        self
    }

    pub fn keep_separator(mut self, value: KeepSeparator) -> Self {
        self.config.keep_separator = Some(value);
        self
    }

    pub fn add_start_index(mut self, value: bool) -> Self {
        self.config.add_start_index = value;
        self
    }

    pub fn build(self) -> Result<RecursiveCharacterTextSplitter, SplitterConfigError> {
        RecursiveCharacterTextSplitter::from_config(self.config)
    }
}
