use pretty_assertions::assert_eq;
use text_extensions::{
    CommandResult, DocumentOptions, EditError, LineSetCommand, LineSetEditor, MemoryDocument,
    Position, TextHost, TextRegion,
};

fn editor_with(text: &str, clipboard: &str) -> LineSetEditor<MemoryDocument> {
    let mut doc = MemoryDocument::new(text);
    doc.set_clipboard(clipboard);
    LineSetEditor::new(doc)
}

#[test]
fn test_paste_append_cycles_clipboard_lines() {
    let mut ex = editor_with("a\nb\nc\nd\ne", "x\ny");
    ex.host_mut()
        .set_rect_selection(Position::new(0, 0), Position::new(4, 0));

    let result = ex.execute(LineSetCommand::PasteAppend).unwrap();

    assert_eq!(result, CommandResult::Applied { edits: 5 });
    assert_eq!(ex.host().text(), "ax\nby\ncx\ndy\nex");
}

#[test]
fn test_paste_append_treats_form_feed_as_line_content() {
    let mut ex = editor_with("a\u{c}b\nc", "1\n2");
    ex.host_mut()
        .set_selection(Position::new(0, 0), Position::new(1, 1));
    assert_eq!(ex.host().regions().len(), 2);

    ex.execute(LineSetCommand::PasteAppend).unwrap();

    assert_eq!(ex.host().text(), "a\u{c}b1\nc2");
}

#[test]
fn test_paste_append_lands_before_trailing_whitespace() {
    let mut ex = editor_with("foo  \n   \nbar", "X");
    ex.host_mut()
        .set_selection(Position::new(0, 0), Position::new(2, 3));

    ex.execute(LineSetCommand::PasteAppend).unwrap();

    // Blank lines take the text at their very end.
    assert_eq!(ex.host().text(), "fooX  \n   X\nbarX");
}

#[test]
fn test_paste_append_on_caret_uses_the_whole_line() {
    let mut ex = editor_with("  hello  ", "!");
    ex.host_mut().set_caret(Position::new(0, 3));

    ex.execute(LineSetCommand::PasteAppend).unwrap();

    assert_eq!(ex.host().text(), "  hello!  ");
}

#[test]
fn test_paste_prepend_keeps_indentation() {
    let mut ex = editor_with("  foo\n\tbar\n", "X");
    ex.host_mut()
        .set_selection(Position::new(0, 0), Position::new(1, 4));

    ex.execute(LineSetCommand::PastePrepend).unwrap();

    assert_eq!(ex.host().text(), "  Xfoo\n\tXbar\n");
}

#[test]
fn test_paste_prepend_on_blank_line_inserts_at_line_start() {
    let mut ex = editor_with("a\n   \nb", "1\n2\n3");
    ex.host_mut()
        .set_rect_selection(Position::new(0, 0), Position::new(2, 0));

    ex.execute(LineSetCommand::PastePrepend).unwrap();

    assert_eq!(ex.host().text(), "1a\n2   \n3b");
}

#[test]
fn test_paste_replace_rect_slices() {
    let mut ex = editor_with("abcd\nefgh\nijkl", "XY\nZ");
    ex.host_mut()
        .set_rect_selection(Position::new(0, 1), Position::new(2, 3));

    ex.execute(LineSetCommand::PasteReplace).unwrap();

    assert_eq!(ex.host().text(), "aXYd\neZh\niXYl");
}

#[test]
fn test_paste_replace_reads_back_exact_text() {
    let mut ex = editor_with("abcd\nefgh", " XY \n");
    ex.host_mut()
        .set_rect_selection(Position::new(0, 0), Position::new(1, 4));

    ex.execute(LineSetCommand::PasteReplace).unwrap();

    let doc = ex.host();
    assert_eq!(doc.region_text(0).as_deref(), Some(" XY "));
    assert_eq!(doc.region_text(1).as_deref(), Some(" XY "));
}

#[test]
fn test_paste_replace_overlapping_regions_fails_without_editing() {
    let mut ex = editor_with("abcdef", "Z");
    ex.host_mut().set_regions(vec![
        TextRegion::on_line(0, 0, 3),
        TextRegion::on_line(0, 2, 5),
    ]);

    let err = ex.execute(LineSetCommand::PasteReplace).unwrap_err();

    assert!(matches!(err, EditError::OverlappingEdits { .. }));
    assert_eq!(ex.host().text(), "abcdef");
    assert_eq!(ex.host().open_scope(), None);
    assert!(!ex.host().can_undo());
}

#[test]
fn test_paste_is_skipped_without_clipboard_lines() {
    for clipboard in [None, Some(""), Some("\r\n\n\r")] {
        let mut doc = MemoryDocument::new("a\nb");
        doc.set_rect_selection(Position::new(0, 0), Position::new(1, 0));
        if let Some(text) = clipboard {
            doc.set_clipboard(text);
        }
        let mut ex = LineSetEditor::new(doc);

        for command in [
            LineSetCommand::PasteAppend,
            LineSetCommand::PastePrepend,
            LineSetCommand::PasteReplace,
        ] {
            assert_eq!(ex.execute(command).unwrap(), CommandResult::Skipped);
        }
        assert_eq!(ex.host().text(), "a\nb");
        assert!(!ex.host().can_undo());
    }
}

#[test]
fn test_paste_is_skipped_on_read_only_document() {
    let options = DocumentOptions {
        read_only: true,
        ..DocumentOptions::default()
    };
    let mut doc = MemoryDocument::with_options("a", options);
    doc.set_clipboard("x");
    let mut ex = LineSetEditor::new(doc);

    assert_eq!(
        ex.execute(LineSetCommand::PasteAppend).unwrap(),
        CommandResult::Skipped
    );
    assert_eq!(ex.host().text(), "a");
}

#[test]
fn test_paste_preserves_crlf_document() {
    let mut ex = editor_with("a\r\nb\r\n", "1\r\n2\r\n");
    ex.host_mut()
        .set_selection(Position::new(0, 0), Position::new(1, 1));

    ex.execute(LineSetCommand::PasteAppend).unwrap();

    assert_eq!(ex.host().text_with_line_ending(), "a1\r\nb2\r\n");
}

#[test]
fn test_paste_append_undoes_as_one_step() {
    let mut ex = editor_with("a\nb\nc", "x");
    ex.host_mut()
        .set_rect_selection(Position::new(0, 0), Position::new(2, 0));
    let regions_before = ex.host().regions();

    ex.execute(LineSetCommand::PasteAppend).unwrap();
    assert_eq!(ex.host().undo_depth(), 1);
    assert_eq!(ex.host().undo_label(), Some("PasteAppend"));

    let doc = ex.host_mut();
    assert_eq!(doc.undo().unwrap(), "PasteAppend");
    assert_eq!(doc.text(), "a\nb\nc");
    assert_eq!(doc.regions(), regions_before);

    assert_eq!(doc.redo().unwrap(), "PasteAppend");
    assert_eq!(doc.text(), "ax\nbx\ncx");
}
