//! Error type shared by the planners, the command executor and host adapters.

use crate::region::Position;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced while planning or applying a line-set edit.
///
/// Unmet preconditions (no document, read-only target, empty clipboard, too few regions) are not
/// errors: commands report them as [`CommandResult::Skipped`](crate::CommandResult::Skipped).
pub enum EditError {
    #[error("invalid position: line {line}, column {column}")]
    /// A region or edit referenced a line that does not exist.
    InvalidPosition {
        /// Zero-based line index.
        line: usize,
        /// Column in characters.
        column: usize,
    },

    #[error("overlapping edits at {first:?} and {second:?}")]
    /// Two edits in the same batch cover overlapping spans.
    OverlappingEdits {
        /// Start of the earlier edit.
        first: Position,
        /// Start of the edit that overlaps it.
        second: Position,
    },

    #[error("undo scope '{requested}' requested while '{open}' is still open")]
    /// The host does not support nested undo scopes.
    UndoScopeAlreadyOpen {
        /// Label of the scope that is still open.
        open: &'static str,
        /// Label of the scope that was requested.
        requested: &'static str,
    },

    #[error("document is read-only")]
    /// The target refused a mutation.
    ReadOnly,

    #[error("nothing to undo")]
    /// The undo stack is empty.
    NothingToUndo,

    #[error("nothing to redo")]
    /// The redo stack is empty.
    NothingToRedo,

    #[error("host error: {0}")]
    /// An adapter-specific failure reported by the host.
    Host(String),
}
