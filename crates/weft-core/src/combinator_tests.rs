use crate::{CaptureShape, Combinator, Modifier, Range, Term, Value};

#[test]
fn range_orders_reversed_bounds() {
    assert_eq!(Range::new(90, 65).ordered(), (65, 90));
    assert!(Range::new(90, 65).contains(70));
    assert!(!Range::new(90, 65).contains(91));
    assert!(Range::exactly(97).contains(97));
}

#[test]
fn range_from_std_ranges() {
    assert_eq!(Range::from(b'0'..=b'9'), Range::new(48, 57));
    assert_eq!(Range::from('a'..='z'), Range::new(97, 122));
}

#[test]
fn capture_shape_defaults_to_unsigned_byte() {
    let shape = CaptureShape::from_modifiers(&[]);
    assert!(shape.is_default());
    assert_eq!(shape.width(), 1);
    assert_eq!(shape.to_string(), "");
}

#[test]
fn capture_shape_later_modifiers_win() {
    let shape = CaptureShape::from_modifiers(&[
        Modifier::Size(16),
        Modifier::Signed,
        Modifier::Little,
        Modifier::Unsigned,
    ]);
    assert_eq!(shape.bits, 16);
    assert!(!shape.signed);
    assert!(shape.little);
    assert_eq!(shape.to_string(), "::16-little");
}

#[test]
fn capture_shape_rounds_odd_sizes() {
    assert_eq!(CaptureShape::from_modifiers(&[Modifier::Size(12)]).bits, 8);
    assert_eq!(CaptureShape::from_modifiers(&[Modifier::Size(200)]).bits, 64);
}

#[test]
fn capture_shape_utf8() {
    let shape = CaptureShape::from_modifiers(&[Modifier::Utf8]);
    assert_eq!(shape.to_string(), "::utf8");
}

#[test]
fn with_modifiers_only_touches_byte_ranges() {
    let c = Combinator::byte().with_modifiers([Modifier::Signed]);
    assert_eq!(
        c,
        Combinator::ByteRange {
            ranges: vec![],
            modifiers: vec![Modifier::Signed],
        }
    );
    assert_eq!(
        Combinator::literal("a").with_modifiers([Modifier::Signed]),
        Combinator::literal("a")
    );
}

#[test]
fn kinds() {
    assert_eq!(Combinator::literal("a").kind(), "literal");
    assert_eq!(Combinator::utf8_range(['a'..='z']).kind(), "byte_range");
    assert_eq!(Combinator::label(Vec::new(), "x").kind(), "label");
}

#[test]
fn term_resolves_captures() {
    let term = Term::List(vec![Term::Capture(1), Term::Str("a".into()), Term::Int(3)]);
    let lookup = |var: u32| (var == 1).then_some(65);
    assert_eq!(
        term.resolve(&lookup),
        Some(Value::List(vec![Value::Int(65), Value::from("a"), Value::Int(3)]))
    );
    assert_eq!(Term::Capture(0).resolve(&lookup), None);
}

#[test]
fn term_display() {
    let term = Term::List(vec![Term::Capture(0), Term::Str("a\"b".into())]);
    assert_eq!(term.to_string(), r#"[x0, "a\"b"]"#);
}
