use pretty_assertions::assert_eq;
use text_extensions::{
    CaseConversion, CommandResult, LineSetCommand, LineSetEditor, MemoryDocument, Position,
};

const TO_UPPER: LineSetCommand = LineSetCommand::ChangeCase(CaseConversion::Upper);
const TO_LOWER: LineSetCommand = LineSetCommand::ChangeCase(CaseConversion::Lower);
const CAPITALIZE: LineSetCommand = LineSetCommand::ChangeCase(CaseConversion::Capitalize);

#[test]
fn test_to_upper_only_touches_rect_slice() {
    let mut doc = MemoryDocument::new("hello world\nfoo bar");
    doc.set_rect_selection(Position::new(0, 0), Position::new(1, 3));
    let mut ex = LineSetEditor::new(doc);

    ex.execute(TO_UPPER).unwrap();

    assert_eq!(ex.host().text(), "HELlo world\nFOO bar");
    assert_eq!(ex.host().undo_label(), Some("SelectionToUpper"));
}

#[test]
fn test_upper_then_lower_ends_lowercase() {
    let mut doc = MemoryDocument::new("MiXeD\ncase Text");
    doc.set_selection(Position::new(0, 0), Position::new(1, 9));
    let mut ex = LineSetEditor::new(doc);

    ex.execute(TO_UPPER).unwrap();
    assert_eq!(ex.host().text(), "MIXED\nCASE TEXT");

    ex.execute(TO_LOWER).unwrap();
    assert_eq!(ex.host().text(), "mixed\ncase text");
    assert_eq!(ex.host().undo_depth(), 2);
}

#[test]
fn test_capitalize_partial_line_selection() {
    let mut doc = MemoryDocument::new("the QUICK brown");
    doc.set_selection(Position::new(0, 4), Position::new(0, 15));
    let mut ex = LineSetEditor::new(doc);

    ex.execute(CAPITALIZE).unwrap();

    assert_eq!(ex.host().text(), "the Quick Brown");
    assert_eq!(ex.host().undo_label(), Some("SelectionCapitalize"));
}

#[test]
fn test_case_change_on_caret_changes_nothing() {
    let mut doc = MemoryDocument::new("abc");
    doc.set_caret(Position::new(0, 1));
    let mut ex = LineSetEditor::new(doc);

    assert_eq!(
        ex.execute(TO_UPPER).unwrap(),
        CommandResult::Applied { edits: 0 }
    );
    assert_eq!(ex.host().text(), "abc");
    assert!(!ex.host().can_undo());
}

#[test]
fn test_case_change_needs_a_region() {
    let mut doc = MemoryDocument::new("abc");
    doc.set_regions(Vec::new());
    let mut ex = LineSetEditor::new(doc);

    for command in [TO_UPPER, TO_LOWER, CAPITALIZE] {
        assert_eq!(ex.execute(command).unwrap(), CommandResult::Skipped);
    }
}

#[test]
fn test_case_change_skipped_on_read_only() {
    let mut doc = MemoryDocument::new("abc");
    doc.set_selection(Position::new(0, 0), Position::new(0, 3));
    doc.set_read_only(true);
    let mut ex = LineSetEditor::new(doc);

    assert_eq!(ex.execute(TO_UPPER).unwrap(), CommandResult::Skipped);
    assert_eq!(ex.host().text(), "abc");
}

#[test]
fn test_upper_can_grow_the_span() {
    let mut doc = MemoryDocument::new("maß\nx");
    doc.set_selection(Position::new(0, 0), Position::new(0, 3));
    let mut ex = LineSetEditor::new(doc);

    ex.execute(TO_UPPER).unwrap();

    assert_eq!(ex.host().text(), "MASS\nx");
}
