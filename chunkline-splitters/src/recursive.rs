use std::ops::Range;

use chunkline_core::{Document, Value};

use crate::chunk::{resolve_spans, ChunkSpan, TextChunk};
use crate::merge::Merger;
use crate::split::{char_len, choose_separator, split_span};
use crate::{KeepSeparator, Language, RecursiveSplitterBuilder, SplitterConfig, SplitterConfigError};

/// Splits text on an ordered list of literal separators, recursing into
/// oversized pieces with the finer separators that follow, then packs the
/// pieces back into chunks of at most `chunk_size` characters.
///
/// Chunks are always slices of the input. With [`KeepSeparator::Start`] or
/// [`KeepSeparator::End`] no character is lost: stripping each chunk's overlap
/// with its predecessor and concatenating yields the input again.
#[derive(Clone, Debug)]
pub struct RecursiveCharacterTextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
    keep_separator: KeepSeparator,
    add_start_index: bool,
}

impl RecursiveCharacterTextSplitter {
    pub fn builder() -> RecursiveSplitterBuilder {
        RecursiveSplitterBuilder::new()
    }

    pub fn from_config(config: SplitterConfig) -> Result<Self, SplitterConfigError> {
        config.validate()?;
        let separators = config.resolved_separators()?;

        Ok(Self {
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
            separators,
            keep_separator: config.resolved_keep_separator(),
            add_start_index: config.add_start_index,
        })
    }

    pub fn from_language(
        language: Language,
        chunk_size: usize,
        chunk_overlap: usize,
    ) -> Result<Self, SplitterConfigError> {
        Self::builder()
            .language(language)
            .chunk_size(chunk_size)
            .chunk_overlap(chunk_overlap)
            .build()
    }

    pub fn separators_for_language(language: Language) -> Vec<String> {
        language
            .separators()
            .iter()
            .map(|separator| separator.to_string())
            .collect()
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    pub fn keep_separator(&self) -> KeepSeparator {
        self.keep_separator
    }

    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.split_chunks(text)
            .into_iter()
            .map(|chunk| chunk.text.to_string())
            .collect()
    }

    pub fn split_chunks<'a>(&self, text: &'a str) -> Vec<TextChunk<'a>> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut spans = Vec::new();
        self.split_recursive(text, 0..text.len(), &self.separators, &mut spans);

        tracing::debug!(
            input_chars = text.chars().count(),
            chunks = spans.len(),
            oversized = spans.iter().filter(|span| span.oversized).count(),
            chunk_size = self.chunk_size,
            chunk_overlap = self.chunk_overlap,
            "split text"
        );

        resolve_spans(text, spans)
    }

    /// Splits raw texts into documents with ids `text-{i}:{chunk_index}`.
    pub fn create_documents<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Document> {
        let documents: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(index, text)| Document::new(format!("text-{index}"), text.as_ref()))
            .collect();
        self.split_documents(&documents)
    }

    /// Splits each document into chunk documents that inherit its metadata.
    ///
    /// Chunk ids are `{document_id}:{chunk_index}`; `chunk_index` is also
    /// recorded in the metadata, with `start_index` when enabled and
    /// `oversized: true` on chunks that exceed `chunk_size`.
    pub fn split_documents(&self, documents: &[Document]) -> Vec<Document> {
        let mut chunked = Vec::new();

        for document in documents {
            for (index, chunk) in self.split_chunks(&document.content).into_iter().enumerate() {
                let mut metadata = document.metadata.clone();
                metadata.insert("chunk_index".to_string(), Value::from(index));
                if self.add_start_index {
                    metadata.insert("start_index".to_string(), Value::from(chunk.start_index));
                }
                if chunk.oversized {
                    metadata.insert("oversized".to_string(), Value::Bool(true));
                }

                chunked.push(Document {
                    id: format!("{}:{index}", document.id),
                    content: chunk.text.to_string(),
                    metadata,
                    embedding: None,
                });
            }
        }

        chunked
    }

    fn split_recursive(
        &self,
        text: &str,
        span: Range<usize>,
        separators: &[String],
        out: &mut Vec<ChunkSpan>,
    ) {
        let (separator, finer) = choose_separator(&text[span.clone()], separators);
        let merger = Merger::new(text, self.chunk_size, self.chunk_overlap);
        let mut fitting: Vec<Range<usize>> = Vec::new();

        for piece in split_span(text, span, separator, self.keep_separator) {
            let piece_len = char_len(text, piece.clone());
            if piece_len <= self.chunk_size {
                fitting.push(piece);
                continue;
            }

            if !fitting.is_empty() {
                merger.merge(&fitting, out);
                fitting.clear();
            }

            if finer.is_empty() {
                tracing::warn!(
                    byte_offset = piece.start,
                    piece_chars = piece_len,
                    chunk_size = self.chunk_size,
                    "piece cannot be split further; emitting oversized chunk"
                );
                out.push(ChunkSpan::oversized(piece));
            } else {
                self.split_recursive(text, piece, finer, out);
            }
        }

        if !fitting.is_empty() {
            merger.merge(&fitting, out);
        }
    }
}
