//! Line-set planners.
//!
//! Each planner reads the selected regions through a [`LineSource`] and returns the edit batch
//! that implements one command. Positions in the batch refer to the pre-edit document, the batch
//! is sorted by start position, and no two edits overlap.
//!
//! | Planner | Span used per region | Effect |
//! |---|---|---|
//! | [`plan_paste_append`] | full lines | insert after the last non-blank character |
//! | [`plan_paste_prepend`] | full lines | insert before the first non-blank character |
//! | [`plan_paste_replace`] | exact span | replace the span |
//! | [`plan_sort_lines`] | full lines | sort trimmed lines, re-indent, drop blanks |
//! | [`plan_sort_selection`] | exact span | sort trimmed spans, drop blanks |
//! | [`plan_change_case`] | exact span | case conversion |

use crate::case::{CaseConversion, convert_case};
use crate::edit::{
    LineSource, TextEdit, advance, clamp_region, delete_through_line_end, full_line_region,
    line_len, normalize_batch, region_text,
};
use crate::error::EditError;
use crate::region::{Position, TextRegion};
use crate::replacement::ReplacementSource;

/// Which span of a region a sort works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortScope {
    /// Expand every region to its full lines and re-indent the output.
    FullLines,
    /// Use each region's exact span.
    Exact,
}

/// Append clipboard line `i mod N` to the end of the line(s) under region `i`.
///
/// On a line with content the text lands right after the last non-whitespace character, so
/// trailing whitespace ends up behind the pasted text. On a blank line it lands at the line end.
pub fn plan_paste_append<L: LineSource + ?Sized>(
    source: &L,
    regions: &[TextRegion],
    replacement: &ReplacementSource,
) -> Result<Vec<TextEdit>, EditError> {
    let mut edits = Vec::with_capacity(regions.len());
    for (index, region) in regions.iter().enumerate() {
        let span = full_line_region(source, *region)?;
        let text = region_text(source, span)?;
        let at = if text.trim().is_empty() {
            span.end
        } else {
            advance(span.start, text.trim_end())
        };
        edits.push(TextEdit::insert(at, replacement.line_for(index)));
    }
    normalize_batch(edits)
}

/// Prepend clipboard line `i mod N` to the line(s) under region `i`, after any indentation.
pub fn plan_paste_prepend<L: LineSource + ?Sized>(
    source: &L,
    regions: &[TextRegion],
    replacement: &ReplacementSource,
) -> Result<Vec<TextEdit>, EditError> {
    let mut edits = Vec::with_capacity(regions.len());
    for (index, region) in regions.iter().enumerate() {
        let span = full_line_region(source, *region)?;
        let text = region_text(source, span)?;
        let at = if text.trim().is_empty() {
            span.start
        } else {
            advance(span.start, leading_whitespace(&text))
        };
        edits.push(TextEdit::insert(at, replacement.line_for(index)));
    }
    normalize_batch(edits)
}

/// Replace the exact span of region `i` with clipboard line `i mod N`.
///
/// Only well defined when each region sits on its own line. Regions that overlap make the batch
/// fail with [`EditError::OverlappingEdits`].
pub fn plan_paste_replace<L: LineSource + ?Sized>(
    source: &L,
    regions: &[TextRegion],
    replacement: &ReplacementSource,
) -> Result<Vec<TextEdit>, EditError> {
    let mut edits = Vec::with_capacity(regions.len());
    for (index, region) in regions.iter().enumerate() {
        let span = clamp_region(source, *region)?;
        edits.push(TextEdit::replace(
            span.start,
            span.end,
            replacement.line_for(index),
        ));
    }
    normalize_batch(edits)
}

/// Sort the full lines under the regions.
///
/// Blank lines are deleted. The leading whitespace of the first non-blank line becomes the
/// indentation of every output line. Trimmed lines are compared by code point and written back
/// into the retained line slots in their original order.
pub fn plan_sort_lines<L: LineSource + ?Sized>(
    source: &L,
    regions: &[TextRegion],
) -> Result<Vec<TextEdit>, EditError> {
    plan_sort(source, regions, SortScope::FullLines)
}

/// Sort the exact spans of the regions, for column selections.
///
/// No indentation is carried over. A blank span is deleted together with the rest of its line
/// and the line break after it (or before it, on the last line).
pub fn plan_sort_selection<L: LineSource + ?Sized>(
    source: &L,
    regions: &[TextRegion],
) -> Result<Vec<TextEdit>, EditError> {
    plan_sort(source, regions, SortScope::Exact)
}

fn plan_sort<L: LineSource + ?Sized>(
    source: &L,
    regions: &[TextRegion],
    scope: SortScope,
) -> Result<Vec<TextEdit>, EditError> {
    let mut edits = Vec::new();
    let mut slots: Vec<(TextRegion, String)> = Vec::with_capacity(regions.len());
    let mut keys: Vec<String> = Vec::with_capacity(regions.len());
    let mut indentation: Option<String> = None;

    for region in regions {
        let span = match scope {
            SortScope::FullLines => full_line_region(source, *region)?,
            SortScope::Exact => clamp_region(source, *region)?,
        };
        let text = region_text(source, span)?;
        let trimmed = text.trim();

        if trimmed.is_empty() {
            let end = delete_through_line_end(source, span.end.line)?;
            let start = if end.line == span.end.line {
                // Last line: there is no break after it, so take the one before it.
                join_with_previous_line(source, span.start, &mut edits)?
            } else {
                span.start
            };
            if end != start {
                tracing::trace!(line = span.start.line, "dropping blank line from sort");
                edits.push(TextEdit::delete(start, end));
            }
            continue;
        }

        if scope == SortScope::FullLines && indentation.is_none() {
            indentation = Some(leading_whitespace(&text).to_string());
        }
        keys.push(trimmed.to_string());
        slots.push((span, text));
    }

    keys.sort();
    let indentation = indentation.unwrap_or_default();

    for ((span, old), key) in slots.into_iter().zip(keys) {
        let new = format!("{indentation}{key}");
        if new != old {
            edits.push(TextEdit::replace(span.start, span.end, new));
        }
    }
    normalize_batch(edits)
}

/// Move a deletion starting at column 0 back over the preceding line break.
///
/// Blank-line deletions planned for the lines directly above are merged into it, so a trailing
/// run of blank lines is removed together with the break that precedes the run.
fn join_with_previous_line<L: LineSource + ?Sized>(
    source: &L,
    mut start: Position,
    edits: &mut Vec<TextEdit>,
) -> Result<Position, EditError> {
    while start.column == 0 && start.line > 0 {
        match edits.last() {
            Some(prev) if prev.text.is_empty() && prev.end == start => {
                start = prev.start;
                edits.pop();
            }
            _ => {
                let above = start.line - 1;
                return Ok(Position::new(above, line_len(source, above)?));
            }
        }
    }
    Ok(start)
}

/// Apply a case conversion to the exact span of every region.
///
/// Spans that would not change produce no edit.
pub fn plan_change_case<L: LineSource + ?Sized>(
    source: &L,
    regions: &[TextRegion],
    conversion: CaseConversion,
) -> Result<Vec<TextEdit>, EditError> {
    let mut edits = Vec::with_capacity(regions.len());
    for region in regions {
        let span = clamp_region(source, *region)?;
        let text = region_text(source, span)?;
        let converted = convert_case(&text, conversion);
        if converted != text {
            edits.push(TextEdit::replace(span.start, span.end, converted));
        }
    }
    normalize_batch(edits)
}

fn leading_whitespace(text: &str) -> &str {
    &text[..text.len() - text.trim_start().len()]
}
