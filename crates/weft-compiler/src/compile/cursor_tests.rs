//! Unit tests for cursor arithmetic.

use weft_ir::{ColumnExpr, LineExpr};

use super::cursor::{CursorDelta, advance};

#[test]
fn literal_without_breaks_advances_column() {
    assert_eq!(CursorDelta::of_literal("ab"), CursorDelta::Column(2));
    assert_eq!(CursorDelta::of_literal(""), CursorDelta::Column(0));
}

#[test]
fn literal_with_break_resets_column() {
    assert_eq!(
        CursorDelta::of_literal("a\nbc"),
        CursorDelta::Line { lines: 1, column: 3 }
    );
    assert_eq!(
        CursorDelta::of_literal("\n\nxyz\n"),
        CursorDelta::Line { lines: 3, column: 1 }
    );
}

#[test]
fn columns_count_bytes() {
    assert_eq!(CursorDelta::of_literal("é"), CursorDelta::Column(2));
}

#[test]
fn single_line_segment() {
    let (line, column) = advance(&[CursorDelta::of_literal("ab")]);
    assert_eq!(line, LineExpr::Incoming);
    assert_eq!(column, ColumnExpr::Advance(2));
    assert_eq!((line.apply(1), column.apply(1)), (1, 3));
}

#[test]
fn embedded_newline_ignores_incoming_column() {
    let (line, column) = advance(&[CursorDelta::of_literal("a\nbc")]);
    assert_eq!(line, LineExpr::Advance(1));
    assert_eq!(column, ColumnExpr::Reset(3));
    assert_eq!((line.apply(1), column.apply(5)), (2, 3));
}

#[test]
fn columns_after_a_break_stay_absolute() {
    let (line, column) = advance(&[
        CursorDelta::Column(4),
        CursorDelta::Line { lines: 1, column: 2 },
        CursorDelta::Column(1),
        CursorDelta::Column(1),
    ]);
    assert_eq!(line, LineExpr::Advance(1));
    assert_eq!(column, ColumnExpr::Reset(4));
}

#[test]
fn later_break_discards_earlier_columns() {
    let (line, column) = advance(&[
        CursorDelta::Line { lines: 2, column: 7 },
        CursorDelta::Column(3),
        CursorDelta::Line { lines: 1, column: 2 },
    ]);
    assert_eq!(line, LineExpr::Advance(3));
    assert_eq!(column, ColumnExpr::Reset(2));
}

#[test]
fn no_deltas_leave_cursor_unchanged() {
    assert_eq!(advance(&[]), (LineExpr::Incoming, ColumnExpr::Advance(0)));
}
