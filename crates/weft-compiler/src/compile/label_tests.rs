//! Unit tests for failure messages.

use weft_core::{CompileFn, Combinator, Range, RuntimeFn};

use super::label::{describe, expected};

#[test]
fn literal_then_range() {
    let foo = Combinator::literal("foo");
    let digit = Combinator::byte_range([b'0'..=b'9']);
    assert_eq!(
        expected(&[&foo, &digit]),
        r#"expected a literal "foo", followed by a byte in the range '0'..'9'"#
    );
}

#[test]
fn literal_is_quoted_with_escapes() {
    assert_eq!(
        describe(&Combinator::literal("a\n\"b\"")),
        r#"a literal "a\n\"b\"""#
    );
}

#[test]
fn any_byte() {
    assert_eq!(describe(&Combinator::byte()), "a byte");
}

#[test]
fn several_ranges() {
    let c = Combinator::byte_range([Range::new(65, 90), Range::new(0, 31)]);
    assert_eq!(describe(&c), "a byte in the range 'A'..'Z', 0..31");
}

#[test]
fn utf8_ranges() {
    assert_eq!(
        describe(&Combinator::utf8_range(['a'..='z'])),
        "a utf8 codepoint in the range 'a'..'z'"
    );
}

#[test]
fn label_replaces_inner_description() {
    let c = Combinator::label([Combinator::literal("x")], "an identifier");
    assert_eq!(describe(&c), "an identifier");
}

#[test]
fn traversals_describe_their_inner_sequence() {
    let inner = [Combinator::literal("a"), Combinator::byte()];
    let runtime = Combinator::traverse(inner.clone(), RuntimeFn::new("f", |v| v));
    let folded = Combinator::compile_traverse(inner, CompileFn::new("g", |t| t));
    assert_eq!(describe(&runtime), r#"a literal "a", followed by a byte"#);
    assert_eq!(describe(&folded), r#"a literal "a", followed by a byte"#);
}

#[test]
fn empty_descriptions_are_skipped() {
    let constant = Combinator::compile_traverse(Vec::new(), CompileFn::new("k", |t| t));
    let a = Combinator::literal("a");
    assert_eq!(expected(&[&constant, &a]), r#"expected a literal "a""#);
}
