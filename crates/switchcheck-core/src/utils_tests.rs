use crate::{LineCol, LineIndex};

fn lc(line: u32, column: u32) -> LineCol {
    LineCol { line, column }
}

#[test]
fn first_character_is_one_one() {
    let text = "enum E { A }";
    let index = LineIndex::new(text);

    assert_eq!(index.line_col(text, 0), lc(1, 1));
    assert_eq!(index.line_col(text, 5), lc(1, 6));
}

#[test]
fn offsets_after_newline_start_next_line() {
    let text = "a\nbc\n\nd";
    let index = LineIndex::new(text);

    assert_eq!(index.line_count(), 4);
    assert_eq!(index.line_col(text, 1), lc(1, 2));
    assert_eq!(index.line_col(text, 2), lc(2, 1));
    assert_eq!(index.line_col(text, 5), lc(3, 1));
    assert_eq!(index.line_col(text, 6), lc(4, 1));
}

#[test]
fn columns_count_characters_not_bytes() {
    let text = "// é\nx";
    let index = LineIndex::new(text);

    // `é` is two bytes; the offset after it is column 5.
    assert_eq!(index.line_col(text, 5), lc(1, 5));
    assert_eq!(index.line_col(text, 6), lc(2, 1));
}

#[test]
fn offset_past_end_clamps() {
    let text = "ab";
    let index = LineIndex::new(text);

    assert_eq!(index.line_col(text, 99), lc(1, 3));
}

#[test]
fn crlf_keeps_carriage_return_on_previous_line() {
    let text = "a\r\nb";
    let index = LineIndex::new(text);

    assert_eq!(index.line_col(text, 3), lc(2, 1));
}
