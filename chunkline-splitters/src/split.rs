use std::ops::Range;

use crate::KeepSeparator;

pub(crate) fn char_len(text: &str, range: Range<usize>) -> usize {
    text[range].chars().count()
}

/// Picks the first separator that is empty or occurs in `text`, returning it
/// together with the finer separators left for oversized pieces.
///
/// The empty separator is terminal: nothing follows a character-level split.
pub(crate) fn choose_separator<'s>(text: &str, separators: &'s [String]) -> (&'s str, &'s [String]) {
    for (index, separator) in separators.iter().enumerate() {
        if separator.is_empty() {
            return ("", &[]);
        }
        if text.contains(separator.as_str()) {
            return (separator, &separators[index + 1..]);
        }
    }

    match separators.last() {
        Some(last) => (last, &[]),
        None => ("", &[]),
    }
}

/// Cuts `text[span]` on a literal separator and returns non-empty byte ranges
/// into `text`, in order.
pub(crate) fn split_span(
    text: &str,
    span: Range<usize>,
    separator: &str,
    keep: KeepSeparator,
) -> Vec<Range<usize>> {
    let base = span.start;
    let slice = &text[span];

    if separator.is_empty() {
        return slice
            .char_indices()
            .map(|(offset, ch)| base + offset..base + offset + ch.len_utf8())
            .collect();
    }

    let mut pieces = Vec::new();
    let mut cursor = 0usize;
    for (offset, _) in slice.match_indices(separator) {
        let after = offset + separator.len();
        match keep {
            KeepSeparator::Discard => {
                pieces.push(cursor..offset);
                cursor = after;
            }
            KeepSeparator::Start => {
                pieces.push(cursor..offset);
                cursor = offset;
            }
            KeepSeparator::End => {
                pieces.push(cursor..after);
                cursor = after;
            }
        }
    }
    pieces.push(cursor..slice.len());

    pieces
        .into_iter()
        .filter(|piece| !piece.is_empty())
        .map(|piece| base + piece.start..base + piece.end)
        .collect()
}
