//! Clipboard lines used by the paste commands.

use regex::Regex;
use std::sync::LazyLock;

static LINE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\r|\n").expect("line separator pattern is valid"));

/// An ordered, non-empty list of lines to paste, one per selection region.
///
/// When the selection has more regions than the source has lines, the lines repeat: region `i`
/// receives line `i mod len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementSource {
    lines: Vec<String>,
}

impl ReplacementSource {
    /// Split clipboard text on `\r\n`, `\r` and `\n`, dropping empty lines.
    ///
    /// Returns `None` if nothing is left, which makes every paste command a no-op.
    pub fn from_clipboard(text: &str) -> Option<Self> {
        let lines: Vec<String> = LINE_SEPARATOR
            .split(text)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::from_lines(lines)
    }

    /// Build a source from already-split lines. Returns `None` for an empty list.
    pub fn from_lines<I, S>(lines: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line assigned to region `index`.
    pub fn line_for(&self, index: usize) -> &str {
        &self.lines[index % self.lines.len()]
    }

    /// The distinct lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
