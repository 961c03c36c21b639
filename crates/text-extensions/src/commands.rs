//! Command interface.
//!
//! [`LineSetEditor`] runs a [`LineSetCommand`] against a [`TextHost`]:
//!
//! 1. the command's feasibility predicate is checked; if it fails the command is skipped
//! 2. an undo scope named after the command is opened
//! 3. the selection is planned into an edit batch (see [`crate::line_ops`]) and applied
//! 4. the scope is closed, whether step 3 succeeded or not
//!
//! # Example
//!
//! ```rust
//! use text_extensions::{LineSetCommand, LineSetEditor, MemoryDocument, Position};
//!
//! let mut doc = MemoryDocument::new("pear\n  apple\n\nfig");
//! doc.set_selection(Position::new(0, 0), Position::new(3, 3));
//!
//! let mut editor = LineSetEditor::new(doc);
//! editor.execute(LineSetCommand::SortLines).unwrap();
//! assert_eq!(editor.host().text(), "apple\nfig\npear");
//! ```

use crate::case::CaseConversion;
use crate::edit::TextEdit;
use crate::error::EditError;
use crate::host::{TextHost, UndoScope, can_paste, can_sort, has_selection, replacement_source};
use crate::line_ops::{
    plan_change_case, plan_paste_append, plan_paste_prepend, plan_paste_replace, plan_sort_lines,
    plan_sort_selection,
};
use crate::region::TextRegion;
use crate::replacement::ReplacementSource;

/// The text commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSetCommand {
    /// Append clipboard lines to the selected lines, cycling through the clipboard.
    PasteAppend,
    /// Prepend clipboard lines to the selected lines, after their indentation.
    PastePrepend,
    /// Replace each selected span with a clipboard line.
    PasteReplace,
    /// Sort the selected lines, dropping blank ones and re-indenting.
    SortLines,
    /// Sort the selected spans of a column selection.
    SortSelection,
    /// Change the case of every selected span.
    ChangeCase(CaseConversion),
}

impl LineSetCommand {
    /// Name of the undo scope the command runs in.
    pub fn undo_label(self) -> &'static str {
        match self {
            Self::PasteAppend => "PasteAppend",
            Self::PastePrepend => "PastePrepend",
            Self::PasteReplace => "PasteReplace",
            Self::SortLines => "SortLines",
            Self::SortSelection => "SortSelection",
            Self::ChangeCase(CaseConversion::Capitalize) => "SelectionCapitalize",
            Self::ChangeCase(CaseConversion::Lower) => "SelectionToLower",
            Self::ChangeCase(CaseConversion::Upper) => "SelectionToUpper",
        }
    }

    /// Whether the command can run against `host` right now.
    pub fn is_feasible<H: TextHost + ?Sized>(self, host: &H) -> bool {
        match self {
            Self::PasteAppend | Self::PastePrepend | Self::PasteReplace => can_paste(host),
            Self::SortLines | Self::SortSelection => can_sort(host),
            Self::ChangeCase(_) => has_selection(host),
        }
    }
}

/// Command execution result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// The feasibility predicate failed; nothing was touched and no undo scope was opened.
    Skipped,
    /// The command ran inside its undo scope.
    Applied {
        /// Number of edits in the applied batch (0 when the text was already in shape).
        edits: usize,
    },
}

/// Run `command` against a borrowed host.
///
/// This is what [`LineSetEditor::execute`] does; it is exposed for hosts that are not owned by an
/// editor value.
pub fn run_command<H: TextHost + ?Sized>(
    host: &mut H,
    command: LineSetCommand,
) -> Result<CommandResult, EditError> {
    let label = command.undo_label();
    if !command.is_feasible(host) {
        tracing::debug!(command = label, "precondition not met, skipping");
        return Ok(CommandResult::Skipped);
    }

    let regions = host.regions();
    let mut scope = UndoScope::open(host, label)?;
    let result = plan(&*scope, command, &regions).and_then(|edits| {
        if !edits.is_empty() {
            scope.apply_edits(&edits)?;
        }
        Ok(edits.len())
    });

    match result {
        Ok(edits) => {
            tracing::debug!(
                command = scope.label(),
                regions = regions.len(),
                edits,
                "command applied"
            );
            Ok(CommandResult::Applied { edits })
        }
        Err(err) => {
            tracing::warn!(command = scope.label(), error = %err, "command failed");
            Err(err)
        }
    }
}

fn plan<H: TextHost + ?Sized>(
    host: &H,
    command: LineSetCommand,
    regions: &[TextRegion],
) -> Result<Vec<TextEdit>, EditError> {
    match command {
        LineSetCommand::PasteAppend => plan_paste_append(host, regions, &clipboard_lines(host)?),
        LineSetCommand::PastePrepend => plan_paste_prepend(host, regions, &clipboard_lines(host)?),
        LineSetCommand::PasteReplace => plan_paste_replace(host, regions, &clipboard_lines(host)?),
        LineSetCommand::SortLines => plan_sort_lines(host, regions),
        LineSetCommand::SortSelection => plan_sort_selection(host, regions),
        LineSetCommand::ChangeCase(conversion) => plan_change_case(host, regions, conversion),
    }
}

fn clipboard_lines<H: TextHost + ?Sized>(host: &H) -> Result<ReplacementSource, EditError> {
    replacement_source(host).ok_or_else(|| EditError::Host("clipboard has no lines".to_string()))
}

/// Executes line-set commands against an owned host.
///
/// # Example
///
/// ```rust
/// use text_extensions::{LineSetCommand, LineSetEditor, MemoryDocument, Position};
///
/// let mut doc = MemoryDocument::new("let a\nlet b");
/// doc.set_rect_selection(Position::new(0, 0), Position::new(1, 0));
/// doc.set_clipboard(";");
///
/// let mut editor = LineSetEditor::new(doc);
/// editor.execute(LineSetCommand::PasteAppend).unwrap();
/// assert_eq!(editor.host().text(), "let a;\nlet b;");
/// ```
pub struct LineSetEditor<H: TextHost> {
    host: H,
}

impl<H: TextHost> LineSetEditor<H> {
    /// Wrap a host.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Execute command
    pub fn execute(&mut self, command: LineSetCommand) -> Result<CommandResult, EditError> {
        run_command(&mut self.host, command)
    }

    /// Execute commands in order, stopping at the first error.
    pub fn execute_batch(
        &mut self,
        commands: impl IntoIterator<Item = LineSetCommand>,
    ) -> Result<Vec<CommandResult>, EditError> {
        commands
            .into_iter()
            .map(|command| self.execute(command))
            .collect()
    }

    /// Get a reference to the host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Get a mutable reference to the host
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Release the host.
    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_labels_are_distinct() {
        let commands = [
            LineSetCommand::PasteAppend,
            LineSetCommand::PastePrepend,
            LineSetCommand::PasteReplace,
            LineSetCommand::SortLines,
            LineSetCommand::SortSelection,
            LineSetCommand::ChangeCase(CaseConversion::Capitalize),
            LineSetCommand::ChangeCase(CaseConversion::Lower),
            LineSetCommand::ChangeCase(CaseConversion::Upper),
        ];
        let mut labels: Vec<&str> = commands.iter().map(|c| c.undo_label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), commands.len());
    }
}
