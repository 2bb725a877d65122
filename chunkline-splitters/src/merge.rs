use std::collections::VecDeque;
use std::ops::Range;

use crate::chunk::ChunkSpan;
use crate::split::char_len;

/// Packs ordered pieces of one split level into chunks of at most
/// `chunk_size` characters, carrying up to `chunk_overlap` characters of
/// trailing pieces into the next chunk.
///
/// Every piece passed in must already fit in `chunk_size`. Lengths are measured
/// on the source slice spanned by the window, so any separator left between two
/// pieces counts toward the chunk.
pub(crate) struct Merger<'a> {
    text: &'a str,
    chunk_size: usize,
    chunk_overlap: usize,
}

impl<'a> Merger<'a> {
    pub(crate) fn new(text: &'a str, chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            text,
            chunk_size,
            chunk_overlap,
        }
    }

    pub(crate) fn merge(&self, pieces: &[Range<usize>], out: &mut Vec<ChunkSpan>) {
        let mut window: VecDeque<Range<usize>> = VecDeque::new();
        let mut total = 0usize;

        for piece in pieces {
            if !window.is_empty() && total + self.growth(&window, piece) > self.chunk_size {
                out.push(Self::span_of(&window));

                while let Some(front) = window.front().cloned() {
                    if total <= self.chunk_overlap
                        && total + self.growth(&window, piece) <= self.chunk_size
                    {
                        break;
                    }
                    window.pop_front();
                    total = match window.front() {
                        Some(next) => total - char_len(self.text, front.start..next.start),
                        None => 0,
                    };
                }
            }

            total += self.growth(&window, piece);
            window.push_back(piece.clone());
        }

        if !window.is_empty() {
            out.push(Self::span_of(&window));
        }
    }

    /// Characters added to the window by appending `piece`, including any gap
    /// between the window's last piece and it.
    fn growth(&self, window: &VecDeque<Range<usize>>, piece: &Range<usize>) -> usize {
        match window.back() {
            Some(last) => char_len(self.text, last.end..piece.end),
            None => char_len(self.text, piece.clone()),
        }
    }

    fn span_of(window: &VecDeque<Range<usize>>) -> ChunkSpan {
        let start = window.front().map_or(0, |piece| piece.start);
        let end = window.back().map_or(start, |piece| piece.end);
        ChunkSpan::fitting(start..end)
    }
}
