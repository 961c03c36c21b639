//! The capability set a host editor exposes to the line-set commands.
//!
//! A host answers selection queries, hands out clipboard text, applies edit batches and brackets
//! them in named undo scopes. [`MemoryDocument`](crate::MemoryDocument) is the in-crate
//! implementation; editor integrations provide their own.

use crate::edit::{LineSource, TextEdit};
use crate::error::EditError;
use crate::region::TextRegion;
use crate::replacement::ReplacementSource;
use std::ops::{Deref, DerefMut};

/// Whether the host currently has a document that commands may edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// No active document.
    Missing,
    /// A document is active but refuses edits.
    ReadOnly,
    /// A document is active and editable.
    Writable,
}

/// Editor services used by [`LineSetEditor`](crate::LineSetEditor).
pub trait TextHost: LineSource {
    /// State of the active document.
    fn target_state(&self) -> TargetState;

    /// Current selection as one region per line, in selection order.
    ///
    /// A caret with no selection is reported as a single empty region.
    fn regions(&self) -> Vec<TextRegion>;

    /// Raw clipboard text, if any.
    fn clipboard_text(&self) -> Option<String>;

    /// Apply a batch of edits whose positions all refer to the document before the batch.
    ///
    /// The batch is sorted by start position and free of overlaps.
    fn apply_edits(&mut self, edits: &[TextEdit]) -> Result<(), EditError>;

    /// Open a named undo scope. Every edit until [`TextHost::end_undo_scope`] undoes as one step.
    fn begin_undo_scope(&mut self, label: &'static str) -> Result<(), EditError>;

    /// Close the scope opened by [`TextHost::begin_undo_scope`].
    fn end_undo_scope(&mut self);
}

/// `true` when there is an editable document.
pub fn has_active_target<H: TextHost + ?Sized>(host: &H) -> bool {
    host.target_state() == TargetState::Writable
}

/// `true` when there is an editable document and the clipboard holds at least one non-empty line.
pub fn can_paste<H: TextHost + ?Sized>(host: &H) -> bool {
    has_active_target(host) && replacement_source(host).is_some()
}

/// `true` when there is an editable document and more than one selected region.
pub fn can_sort<H: TextHost + ?Sized>(host: &H) -> bool {
    has_active_target(host) && host.regions().len() > 1
}

/// `true` when there is an editable document and at least one selected region.
pub fn has_selection<H: TextHost + ?Sized>(host: &H) -> bool {
    has_active_target(host) && !host.regions().is_empty()
}

pub(crate) fn replacement_source<H: TextHost + ?Sized>(host: &H) -> Option<ReplacementSource> {
    host.clipboard_text()
        .as_deref()
        .and_then(ReplacementSource::from_clipboard)
}

/// An open undo scope. Dropping the guard closes the scope.
///
/// The scope is released on every exit path, including early `?` returns and unwinding, so a
/// failed command never leaves the host with a dangling scope.
pub struct UndoScope<'a, H: TextHost + ?Sized> {
    host: &'a mut H,
    label: &'static str,
}

impl<'a, H: TextHost + ?Sized> UndoScope<'a, H> {
    /// Open `label` on `host`.
    pub fn open(host: &'a mut H, label: &'static str) -> Result<Self, EditError> {
        host.begin_undo_scope(label)?;
        Ok(Self { host, label })
    }

    /// Label the scope was opened with.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<H: TextHost + ?Sized> Deref for UndoScope<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        &*self.host
    }
}

impl<H: TextHost + ?Sized> DerefMut for UndoScope<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        &mut *self.host
    }
}

impl<H: TextHost + ?Sized> Drop for UndoScope<'_, H> {
    fn drop(&mut self) {
        self.host.end_undo_scope();
        tracing::trace!(label = self.label, "undo scope closed");
    }
}
