//! Text edits and the read-only line view the planners work against.
//!
//! Planners never mutate anything. They read lines through [`LineSource`] and describe the result
//! as a batch of [`TextEdit`]s whose positions all refer to the document *before* the batch is
//! applied. A host applies the batch in one go (see
//! [`TextHost::apply_edits`](crate::TextHost::apply_edits)).

use crate::error::EditError;
use crate::region::{Position, TextRegion};
use std::borrow::Cow;

/// Read access to a document's logical lines.
pub trait LineSource {
    /// Number of logical lines (an empty document has one empty line).
    fn line_count(&self) -> usize;

    /// Text of line `index` without its terminator, or `None` past the last line.
    fn line(&self, index: usize) -> Option<Cow<'_, str>>;
}

impl<S: AsRef<str>> LineSource for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.get(index).map(|line| Cow::Borrowed(line.as_ref()))
    }
}

/// A single edit expressed against the pre-edit document.
///
/// - insertion: `start == end`, non-empty `text`
/// - replacement: `start < end`, any `text`
/// - deletion: `start < end`, empty `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Inclusive start of the replaced span.
    pub start: Position,
    /// Exclusive end of the replaced span.
    pub end: Position,
    /// Text written in place of the span.
    pub text: String,
}

impl TextEdit {
    /// Insert `text` at `at`.
    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self {
            start: at,
            end: at,
            text: text.into(),
        }
    }

    /// Replace the span `start..end` with `text`.
    pub fn replace(start: Position, end: Position, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Delete the span `start..end`.
    pub fn delete(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            text: String::new(),
        }
    }
}

/// Sort a batch by start position and reject overlapping spans.
///
/// The sort is stable, so insertions sharing a position keep their relative order. An insertion
/// may touch the boundary of a replaced span but not fall inside it.
pub fn normalize_batch(mut edits: Vec<TextEdit>) -> Result<Vec<TextEdit>, EditError> {
    edits.sort_by_key(|edit| edit.start);
    for pair in edits.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.start < prev.end {
            return Err(EditError::OverlappingEdits {
                first: prev.start,
                second: next.start,
            });
        }
    }
    Ok(edits)
}

pub(crate) fn line_text<L: LineSource + ?Sized>(
    source: &L,
    line: usize,
) -> Result<Cow<'_, str>, EditError> {
    source
        .line(line)
        .ok_or(EditError::InvalidPosition { line, column: 0 })
}

pub(crate) fn line_len<L: LineSource + ?Sized>(source: &L, line: usize) -> Result<usize, EditError> {
    Ok(line_text(source, line)?.chars().count())
}

/// Clamp a position's column to the length of its line.
pub(crate) fn clamp_position<L: LineSource + ?Sized>(
    source: &L,
    pos: Position,
) -> Result<Position, EditError> {
    let len = line_len(source, pos.line).map_err(|_| EditError::InvalidPosition {
        line: pos.line,
        column: pos.column,
    })?;
    Ok(Position::new(pos.line, pos.column.min(len)))
}

/// Clamp both ends of a region.
pub(crate) fn clamp_region<L: LineSource + ?Sized>(
    source: &L,
    region: TextRegion,
) -> Result<TextRegion, EditError> {
    Ok(TextRegion {
        start: clamp_position(source, region.start)?,
        end: clamp_position(source, region.end)?,
    })
}

/// Widen a region to cover its lines from the first column to the last line's end.
pub(crate) fn full_line_region<L: LineSource + ?Sized>(
    source: &L,
    region: TextRegion,
) -> Result<TextRegion, EditError> {
    let end_len = line_len(source, region.end.line)?;
    line_text(source, region.start.line)?;
    Ok(TextRegion {
        start: Position::new(region.start.line, 0),
        end: Position::new(region.end.line, end_len),
    })
}

/// Text covered by an already-clamped region, with lines joined by `'\n'`.
pub(crate) fn region_text<L: LineSource + ?Sized>(
    source: &L,
    region: TextRegion,
) -> Result<String, EditError> {
    let (start, end) = (region.start, region.end);
    if start.line == end.line {
        let line = line_text(source, start.line)?;
        return Ok(slice_chars(&line, start.column, end.column).to_string());
    }

    let mut out = String::new();
    let first = line_text(source, start.line)?;
    out.push_str(slice_chars(&first, start.column, usize::MAX));
    for index in start.line + 1..end.line {
        out.push('\n');
        out.push_str(&line_text(source, index)?);
    }
    out.push('\n');
    let last = line_text(source, end.line)?;
    out.push_str(slice_chars(&last, 0, end.column));
    Ok(out)
}

/// End of a blank-line deletion starting on `line`: the start of the next line, or the end of
/// `line` when it is the last one.
pub(crate) fn delete_through_line_end<L: LineSource + ?Sized>(
    source: &L,
    line: usize,
) -> Result<Position, EditError> {
    if line + 1 < source.line_count() {
        Ok(Position::new(line + 1, 0))
    } else {
        Ok(Position::new(line, line_len(source, line)?))
    }
}

/// Position reached after walking over `text` from `from`.
pub(crate) fn advance(from: Position, text: &str) -> Position {
    let mut pos = from;
    for ch in text.chars() {
        if ch == '\n' {
            pos.line += 1;
            pos.column = 0;
        } else {
            pos.column += 1;
        }
    }
    pos
}

/// Substring between two character columns; out-of-range bounds are clamped.
pub(crate) fn slice_chars(text: &str, start: usize, end: usize) -> &str {
    let byte_at = |column: usize| {
        text.char_indices()
            .nth(column)
            .map(|(byte, _)| byte)
            .unwrap_or(text.len())
    };
    let start_byte = byte_at(start);
    let end_byte = byte_at(end).max(start_byte);
    &text[start_byte..end_byte]
}
