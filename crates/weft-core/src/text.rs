//! Text rendering shared by dumps and failure messages.

use crate::combinator::Range;

/// Quote `text` as a double-quoted literal with escapes.
///
/// # Examples
/// ```
/// use weft_core::text::quote_literal;
/// assert_eq!(quote_literal("foo"), r#""foo""#);
/// assert_eq!(quote_literal("a\nb"), r#""a\nb""#);
/// ```
pub fn quote_literal(text: &str) -> String {
    format!("{text:?}")
}

/// Whether `value` is a printable ASCII code (space through tilde).
pub fn is_printable(value: i64) -> bool {
    (32..=126).contains(&value)
}

/// Render a range as `'a'..'z'` when both bounds are printable, else `0..31`.
pub fn render_range(range: Range) -> String {
    match (printable_char(range.min), printable_char(range.max)) {
        (Some(min), Some(max)) => format!("'{min}'..'{max}'"),
        _ => format!("{}..{}", range.min, range.max),
    }
}

fn printable_char(value: i64) -> Option<char> {
    if !is_printable(value) {
        return None;
    }
    u8::try_from(value).ok().map(char::from)
}
