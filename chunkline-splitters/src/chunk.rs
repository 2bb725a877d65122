use std::ops::Range;

/// A chunk borrowed from the text it was cut from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextChunk<'a> {
    pub text: &'a str,
    /// Byte offsets into the source text.
    pub byte_range: Range<usize>,
    /// Character offset of the first character in the source text.
    pub start_index: usize,
    /// Set when an atomic piece larger than `chunk_size` had to be emitted whole.
    pub oversized: bool,
}

impl TextChunk<'_> {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ChunkSpan {
    pub(crate) range: Range<usize>,
    pub(crate) oversized: bool,
}

impl ChunkSpan {
    pub(crate) fn fitting(range: Range<usize>) -> Self {
        Self {
            range,
            oversized: false,
        }
    }

    pub(crate) fn oversized(range: Range<usize>) -> Self {
        Self {
            range,
            oversized: true,
        }
    }
}

/// Resolves spans into chunks, tracking char offsets incrementally.
/// Spans arrive ordered by start offset.
pub(crate) fn resolve_spans(text: &str, spans: Vec<ChunkSpan>) -> Vec<TextChunk<'_>> {
    let mut byte_cursor = 0usize;
    let mut char_cursor = 0usize;

    spans
        .into_iter()
        .map(|span| {
            debug_assert!(span.range.start >= byte_cursor);
            char_cursor += text[byte_cursor..span.range.start].chars().count();
            byte_cursor = span.range.start;

            TextChunk {
                text: &text[span.range.clone()],
                byte_range: span.range,
                start_index: char_cursor,
                oversized: span.oversized,
            }
        })
        .collect()
}
