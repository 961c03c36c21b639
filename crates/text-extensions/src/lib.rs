#![warn(missing_docs)]
//! Text Extensions - line-set editing commands for any editor
//!
//! # Overview
//!
//! `text-extensions` implements a small family of editor commands over a selection made of one
//! region per line:
//!
//! - **Paste append / prepend / replace**: clipboard line `i` goes onto selected line `i`,
//!   cycling through the clipboard when the selection is longer
//! - **Sort lines**: sort whole lines, drop blank ones, keep the first line's indentation
//! - **Sort selection**: sort the spans of a column selection
//! - **Case conversion**: capitalize, lower-case or upper-case every selected span
//!
//! The crate does not own a text buffer. It talks to the editor through [`TextHost`], which
//! reports the selection, hands out clipboard text, applies edit batches and brackets them in a
//! named undo scope. [`MemoryDocument`] is a complete in-memory host.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  LineSetEditor / run_command                │  ← feasibility, undo scope
//! ├─────────────────────────────────────────────┤
//! │  line_ops planners                          │  ← pure: regions → edit batch
//! ├─────────────────────────────────────────────┤
//! │  TextHost (MemoryDocument or an editor)     │  ← selection, clipboard, undo
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use text_extensions::{CaseConversion, LineSetCommand, LineSetEditor, MemoryDocument, Position};
//!
//! let mut doc = MemoryDocument::new("alpha\nbeta\ngamma");
//! doc.set_selection(Position::new(0, 0), Position::new(2, 5));
//! doc.set_clipboard("1. \n2. ");
//!
//! let mut editor = LineSetEditor::new(doc);
//! editor
//!     .execute(LineSetCommand::ChangeCase(CaseConversion::Capitalize))
//!     .unwrap();
//! editor.execute(LineSetCommand::PastePrepend).unwrap();
//!
//! assert_eq!(editor.host().text(), "1. Alpha\n2. Beta\n1. Gamma");
//! ```
//!
//! # Module Description
//!
//! - [`commands`] - command enum and executor
//! - [`line_ops`] - pure planners for every command
//! - [`host`] - the host capability trait, feasibility predicates and the undo scope guard
//! - [`memory`] - rope-backed in-memory host
//! - [`edit`] - edit batches and the read-only line view
//! - [`region`] - positions, regions and selection expansion
//! - [`replacement`] - clipboard line splitting
//! - [`case`] - case conversion

pub mod case;
pub mod commands;
pub mod edit;
pub mod error;
pub mod host;
pub mod line_ending;
pub mod line_ops;
pub mod memory;
pub mod region;
pub mod replacement;

pub use case::{CaseConversion, convert_case};
pub use commands::{CommandResult, LineSetCommand, LineSetEditor, run_command};
pub use edit::{LineSource, TextEdit, normalize_batch};
pub use error::EditError;
pub use host::{
    TargetState, TextHost, UndoScope, can_paste, can_sort, has_active_target, has_selection,
};
pub use line_ending::LineEnding;
pub use line_ops::{
    plan_change_case, plan_paste_append, plan_paste_prepend, plan_paste_replace, plan_sort_lines,
    plan_sort_selection,
};
pub use memory::{DocumentOptions, MemoryDocument};
pub use region::{Position, TextRegion, rect_regions, stream_regions};
pub use replacement::ReplacementSource;
