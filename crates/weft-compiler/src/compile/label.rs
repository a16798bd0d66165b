//! Failure messages for bound segments.

use weft_core::text::{quote_literal, render_range};
use weft_core::{CaptureShape, Combinator};

const FOLLOWED_BY: &str = ", followed by ";

/// `"expected " + labels joined by ", followed by "`.
pub(crate) fn expected(used: &[&Combinator]) -> String {
    format!("expected {}", join(used.iter().copied()))
}

/// Label of one combinator; empty when it describes nothing (an empty inner sequence).
pub(crate) fn describe(combinator: &Combinator) -> String {
    match combinator {
        Combinator::Literal(text) => format!("a literal {}", quote_literal(text)),
        Combinator::Label { label, .. } => label.clone(),
        Combinator::ByteRange { ranges, modifiers } => {
            let unit = if CaptureShape::from_modifiers(modifiers).utf8 {
                "a utf8 codepoint"
            } else {
                "a byte"
            };
            if ranges.is_empty() {
                return unit.to_string();
            }
            let ranges: Vec<String> = ranges.iter().map(|r| render_range(*r)).collect();
            format!("{unit} in the range {}", ranges.join(", "))
        }
        Combinator::Traverse { inner, .. } | Combinator::CompileTraverse { inner, .. } => {
            join(inner.iter())
        }
    }
}

fn join<'c>(combinators: impl Iterator<Item = &'c Combinator>) -> String {
    let labels: Vec<String> = combinators
        .map(describe)
        .filter(|label| !label.is_empty())
        .collect();
    labels.join(FOLLOWED_BY)
}
