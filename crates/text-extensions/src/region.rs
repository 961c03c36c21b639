//! Positions, regions and selection expansion.
//!
//! A host hands the editor an ordered list of [`TextRegion`]s, one per selected line. This module
//! holds the coordinate types and the helpers adapters use to expand a stream or rectangular
//! selection into that list.

use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One editable span of a selection.
///
/// `start <= end` always holds; [`TextRegion::new`] swaps the endpoints of a backward selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRegion {
    /// Inclusive start position.
    pub start: Position,
    /// Exclusive end position.
    pub end: Position,
}

impl TextRegion {
    /// Create a region from two endpoints in any order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// An empty region at `pos` (a caret).
    pub fn caret(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// A region on a single line between two columns.
    pub fn on_line(line: usize, start_column: usize, end_column: usize) -> Self {
        Self::new(
            Position::new(line, start_column),
            Position::new(line, end_column),
        )
    }

    /// Returns `true` if the region covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the region spans more than one line.
    pub fn is_multiline(&self) -> bool {
        self.start.line != self.end.line
    }
}

/// Expand a stream selection into one region per line.
///
/// `line_len` returns the length in characters of a line. The first region starts at
/// `start.column`, the last ends at `end.column`, and every line in between is covered fully.
/// When a multi-line selection ends at column 0 the empty slice on the last line is dropped,
/// so selecting whole lines does not pull in the line after them.
pub fn stream_regions(
    start: Position,
    end: Position,
    line_len: impl Fn(usize) -> usize,
) -> Vec<TextRegion> {
    let region = TextRegion::new(start, end);
    if !region.is_multiline() {
        return vec![region];
    }

    let (start, end) = (region.start, region.end);
    let mut regions = Vec::with_capacity(end.line - start.line + 1);
    regions.push(TextRegion::on_line(
        start.line,
        start.column,
        line_len(start.line).max(start.column),
    ));
    for line in start.line + 1..end.line {
        regions.push(TextRegion::on_line(line, 0, line_len(line)));
    }
    if end.column > 0 {
        regions.push(TextRegion::on_line(end.line, 0, end.column));
    }
    regions
}

/// Expand a rectangular (box/column) selection into one region per line.
///
/// Every line between the anchor and the active corner contributes the same column slice.
/// Columns past the end of a line are clamped later, when the region's text is read.
pub fn rect_regions(anchor: Position, active: Position) -> Vec<TextRegion> {
    let start_line = anchor.line.min(active.line);
    let end_line = anchor.line.max(active.line);
    let left = anchor.column.min(active.column);
    let right = anchor.column.max(active.column);

    (start_line..=end_line)
        .map(|line| TextRegion::on_line(line, left, right))
        .collect()
}
