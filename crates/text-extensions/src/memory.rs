//! In-memory host.
//!
//! [`MemoryDocument`] implements [`TextHost`] over a [`Rope`]. It keeps a selection (caret,
//! stream, rectangular or explicit regions), a clipboard slot and an undo/redo history grouped by
//! undo scope, which is everything the line-set commands need from an editor.

use crate::edit::{LineSource, TextEdit, normalize_batch};
use crate::error::EditError;
use crate::host::{TargetState, TextHost};
use crate::line_ending::{LineEnding, normalize_to_lf};
use crate::region::{Position, TextRegion, rect_regions, stream_regions};
use ropey::Rope;
use std::borrow::Cow;

/// Label of the undo group created for edits applied outside any scope.
const UNSCOPED_LABEL: &str = "Edit";

/// Options for a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Refuse edits and report [`TargetState::ReadOnly`].
    pub read_only: bool,
    /// Maximum number of undo groups kept; older groups are discarded.
    pub max_undo: usize,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            read_only: false,
            max_undo: 1000,
        }
    }
}

/// One rope mutation in application order, in char offsets.
#[derive(Debug, Clone)]
struct AppliedEdit {
    start: usize,
    deleted_text: String,
    inserted_text: String,
}

impl AppliedEdit {
    fn deleted_len(&self) -> usize {
        self.deleted_text.chars().count()
    }

    fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }
}

#[derive(Debug, Clone)]
struct UndoGroup {
    label: &'static str,
    edits: Vec<AppliedEdit>,
    before_regions: Vec<TextRegion>,
    after_regions: Vec<TextRegion>,
}

impl UndoGroup {
    fn new(label: &'static str, regions: &[TextRegion]) -> Self {
        Self {
            label,
            edits: Vec::new(),
            before_regions: regions.to_vec(),
            after_regions: regions.to_vec(),
        }
    }
}

#[derive(Debug)]
struct UndoHistory {
    undo_stack: Vec<UndoGroup>,
    redo_stack: Vec<UndoGroup>,
    max_undo: usize,
    open: Option<UndoGroup>,
}

impl UndoHistory {
    fn new(max_undo: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_undo,
            open: None,
        }
    }

    fn push(&mut self, group: UndoGroup) {
        if group.edits.is_empty() {
            return;
        }
        self.redo_stack.clear();
        if self.max_undo == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_undo {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(group);
    }
}

/// A text document held in memory.
///
/// # Example
///
/// ```rust
/// use text_extensions::{MemoryDocument, Position};
///
/// let mut doc = MemoryDocument::new("one\r\ntwo\r\n");
/// doc.set_selection(Position::new(0, 0), Position::new(1, 3));
///
/// assert_eq!(doc.text(), "one\ntwo\n");
/// assert_eq!(doc.text_with_line_ending(), "one\r\ntwo\r\n");
/// assert_eq!(doc.region_text(1).as_deref(), Some("two"));
/// ```
pub struct MemoryDocument {
    rope: Rope,
    line_ending: LineEnding,
    options: DocumentOptions,
    regions: Vec<TextRegion>,
    clipboard: Option<String>,
    history: UndoHistory,
}

impl MemoryDocument {
    /// Load `text` with default options.
    pub fn new(text: &str) -> Self {
        Self::with_options(text, DocumentOptions::default())
    }

    /// Load `text`. Line endings are folded to LF; the original style is remembered.
    pub fn with_options(text: &str, options: DocumentOptions) -> Self {
        Self {
            rope: Rope::from_str(&normalize_to_lf(text)),
            line_ending: LineEnding::detect(text),
            options,
            regions: vec![TextRegion::caret(Position::default())],
            clipboard: None,
            history: UndoHistory::new(options.max_undo),
        }
    }

    /// Document text with LF line endings.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Document text using the line ending it was loaded with.
    pub fn text_with_line_ending(&self) -> String {
        self.line_ending.restore(&self.text())
    }

    /// Line ending detected on load.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Options the document was created with.
    pub fn options(&self) -> DocumentOptions {
        self.options
    }

    /// Toggle read-only mode.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.options.read_only = read_only;
    }

    /// Place a caret and drop any selection.
    pub fn set_caret(&mut self, pos: Position) {
        self.regions = vec![TextRegion::caret(self.clamp(pos))];
    }

    /// Select the stream of text between two positions; it is reported one region per line.
    pub fn set_selection(&mut self, start: Position, end: Position) {
        let (start, end) = (self.clamp(start), self.clamp(end));
        self.regions = stream_regions(start, end, |line| self.line_len(line));
    }

    /// Select a column block between two corners, one region per line.
    pub fn set_rect_selection(&mut self, anchor: Position, active: Position) {
        let last_line = self.rope.len_lines().saturating_sub(1);
        let anchor = Position::new(anchor.line.min(last_line), anchor.column);
        let active = Position::new(active.line.min(last_line), active.column);
        self.regions = rect_regions(anchor, active);
    }

    /// Replace the selection with explicit regions, kept in the given order.
    pub fn set_regions(&mut self, regions: Vec<TextRegion>) {
        self.regions = regions;
    }

    /// Text of selected region `index`, with columns clamped to the line.
    pub fn region_text(&self, index: usize) -> Option<String> {
        let region = self.regions.get(index)?;
        let start = self.to_char_offset(self.clamp(region.start)).ok()?;
        let end = self.to_char_offset(self.clamp(region.end)).ok()?;
        Some(self.rope.slice(start..end.max(start)).to_string())
    }

    /// Put text on the clipboard.
    pub fn set_clipboard(&mut self, text: impl Into<String>) {
        self.clipboard = Some(text.into());
    }

    /// Empty the clipboard.
    pub fn clear_clipboard(&mut self) {
        self.clipboard = None;
    }

    /// Can undo
    pub fn can_undo(&self) -> bool {
        !self.history.undo_stack.is_empty()
    }

    /// Can redo
    pub fn can_redo(&self) -> bool {
        !self.history.redo_stack.is_empty()
    }

    /// Number of undo groups.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_stack.len()
    }

    /// Number of redo groups.
    pub fn redo_depth(&self) -> usize {
        self.history.redo_stack.len()
    }

    /// Label of the group the next [`MemoryDocument::undo`] would revert.
    pub fn undo_label(&self) -> Option<&'static str> {
        self.history.undo_stack.last().map(|group| group.label)
    }

    /// Label of the scope currently open, if any.
    pub fn open_scope(&self) -> Option<&'static str> {
        self.history.open.as_ref().map(|group| group.label)
    }

    /// Revert the most recent undo group and restore the selection it started with.
    ///
    /// An open scope is closed first.
    pub fn undo(&mut self) -> Result<&'static str, EditError> {
        self.end_undo_scope();
        let group = self
            .history
            .undo_stack
            .pop()
            .ok_or(EditError::NothingToUndo)?;

        for edit in group.edits.iter().rev() {
            self.rope.remove(edit.start..edit.start + edit.inserted_len());
            self.rope.insert(edit.start, &edit.deleted_text);
        }
        self.regions = group.before_regions.clone();
        let label = group.label;
        self.history.redo_stack.push(group);
        tracing::debug!(label, "undo");
        Ok(label)
    }

    /// Reapply the most recently undone group.
    pub fn redo(&mut self) -> Result<&'static str, EditError> {
        self.end_undo_scope();
        let group = self
            .history
            .redo_stack
            .pop()
            .ok_or(EditError::NothingToRedo)?;

        for edit in &group.edits {
            self.rope.remove(edit.start..edit.start + edit.deleted_len());
            self.rope.insert(edit.start, &edit.inserted_text);
        }
        self.regions = group.after_regions.clone();
        let label = group.label;
        self.history.undo_stack.push(group);
        tracing::debug!(label, "redo");
        Ok(label)
    }

    fn line_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    fn clamp(&self, pos: Position) -> Position {
        let last_line = self.rope.len_lines().saturating_sub(1);
        if pos.line > last_line {
            return Position::new(last_line, self.line_len(last_line));
        }
        Position::new(pos.line, pos.column.min(self.line_len(pos.line)))
    }

    fn to_char_offset(&self, pos: Position) -> Result<usize, EditError> {
        if pos.line >= self.rope.len_lines() || pos.column > self.line_len(pos.line) {
            return Err(EditError::InvalidPosition {
                line: pos.line,
                column: pos.column,
            });
        }
        Ok(self.rope.line_to_char(pos.line) + pos.column)
    }

    fn clamp_regions_to_text(&mut self) {
        let line_count = self.rope.len_lines();
        let regions = std::mem::take(&mut self.regions);
        self.regions = regions
            .into_iter()
            .filter(|region| region.start.line < line_count)
            .map(|region| TextRegion::new(self.clamp(region.start), self.clamp(region.end)))
            .collect();
        if self.regions.is_empty() {
            let end = self.clamp(Position::new(usize::MAX, usize::MAX));
            self.regions.push(TextRegion::caret(end));
        }
    }
}

impl LineSource for MemoryDocument {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        if index >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(index);
        let text: String = line.chars().filter(|&ch| ch != '\n').collect();
        Some(Cow::Owned(text))
    }
}

impl TextHost for MemoryDocument {
    fn target_state(&self) -> TargetState {
        if self.options.read_only {
            TargetState::ReadOnly
        } else {
            TargetState::Writable
        }
    }

    fn regions(&self) -> Vec<TextRegion> {
        self.regions.clone()
    }

    fn clipboard_text(&self) -> Option<String> {
        self.clipboard.clone()
    }

    fn apply_edits(&mut self, edits: &[TextEdit]) -> Result<(), EditError> {
        if self.options.read_only {
            return Err(EditError::ReadOnly);
        }

        // Resolve every position before touching the rope so a bad batch changes nothing.
        let edits = normalize_batch(edits.to_vec())?;
        let mut resolved = Vec::with_capacity(edits.len());
        for edit in &edits {
            let start = self.to_char_offset(edit.start)?;
            let end = self.to_char_offset(edit.end)?;
            resolved.push((start, end, normalize_to_lf(&edit.text)));
        }

        let mut applied = Vec::with_capacity(resolved.len());
        for (start, end, text) in resolved.into_iter().rev() {
            let deleted_text = self.rope.slice(start..end).to_string();
            self.rope.remove(start..end);
            self.rope.insert(start, &text);
            tracing::trace!(start, deleted = end - start, inserted = %text, "edit applied");
            applied.push(AppliedEdit {
                start,
                deleted_text,
                inserted_text: text,
            });
        }

        let before_regions = self.regions.clone();
        self.clamp_regions_to_text();

        match self.history.open.as_mut() {
            Some(group) => {
                group.edits.extend(applied);
                group.after_regions = self.regions.clone();
            }
            None => {
                let mut group = UndoGroup::new(UNSCOPED_LABEL, &before_regions);
                group.edits = applied;
                group.after_regions = self.regions.clone();
                self.history.push(group);
            }
        }
        Ok(())
    }

    fn begin_undo_scope(&mut self, label: &'static str) -> Result<(), EditError> {
        if let Some(open) = &self.history.open {
            return Err(EditError::UndoScopeAlreadyOpen {
                open: open.label,
                requested: label,
            });
        }
        self.history.open = Some(UndoGroup::new(label, &self.regions));
        Ok(())
    }

    fn end_undo_scope(&mut self) {
        if let Some(group) = self.history.open.take() {
            self.history.push(group);
        }
    }
}
