//! Cursor arithmetic for fused segments.

use weft_ir::{ColumnExpr, LineExpr};

/// Cursor movement caused by one matched combinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CursorDelta {
    /// Advance the column.
    Column(u32),
    /// Cross `lines` line breaks, landing on absolute `column`.
    Line { lines: u32, column: u32 },
}

impl CursorDelta {
    /// Movement for matching `text`; columns count bytes.
    pub(crate) fn of_literal(text: &str) -> Self {
        let breaks = text.bytes().filter(|&b| b == b'\n').count();
        match text.rsplit_once('\n') {
            None => Self::Column(saturate(text.len())),
            Some((_, last_line)) => Self::Line {
                lines: saturate(breaks),
                column: saturate(last_line.len()).saturating_add(1),
            },
        }
    }
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Fold `deltas` left to right into the successor's line and column.
///
/// Columns accumulate relative to the incoming column until a line break,
/// after which they are absolute.
pub(crate) fn advance(deltas: &[CursorDelta]) -> (LineExpr, ColumnExpr) {
    let mut lines = 0u32;
    let mut column = 0u32;
    let mut saw_break = false;

    for delta in deltas {
        match *delta {
            CursorDelta::Column(n) => column = column.saturating_add(n),
            CursorDelta::Line {
                lines: n,
                column: reset,
            } => {
                lines = lines.saturating_add(n);
                column = reset;
                saw_break = true;
            }
        }
    }

    let line = if lines == 0 {
        LineExpr::Incoming
    } else {
        LineExpr::Advance(lines)
    };
    let column = if saw_break {
        ColumnExpr::Reset(column)
    } else {
        ColumnExpr::Advance(column)
    };
    (line, column)
}
