//! Greedy bound-segment extraction.
//!
//! Scans a combinator sequence from the front and fuses the longest prefix
//! that can be matched by one procedure with no runtime branching.

use weft_core::{CaptureShape, Combinator, Term};
use weft_ir::{Guard, Pattern};

use super::cursor::CursorDelta;

/// Merged match of a fused run of combinators.
#[derive(Debug)]
pub(crate) struct Segment<'c> {
    /// Number of leading combinators fused.
    pub consumed: usize,
    pub inputs: Vec<Pattern>,
    /// Conjoined by the emitted procedure.
    pub guards: Vec<Guard>,
    /// Most-recent-first, ready to prepend to the accumulator.
    pub outputs: Vec<Term>,
    /// Applied left to right.
    pub deltas: Vec<CursorDelta>,
    /// The fused combinators themselves, for the failure message.
    pub used: Vec<&'c Combinator>,
    /// Next free capture variable.
    pub next_var: u32,
}

impl<'c> Segment<'c> {
    fn empty(next_var: u32) -> Self {
        Self {
            consumed: 0,
            inputs: Vec::new(),
            guards: Vec::new(),
            outputs: Vec::new(),
            deltas: Vec::new(),
            used: Vec::new(),
            next_var,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.consumed == 0
    }

    /// Whether the segment matches any input (and so can fail).
    pub fn matches_input(&self) -> bool {
        !self.inputs.is_empty()
    }

    /// Fuse `combinator` onto the end of the segment, or report it unbound.
    fn absorb(&mut self, combinator: &'c Combinator) -> bool {
        match combinator {
            Combinator::Literal(text) => {
                self.inputs.push(Pattern::literal(text.clone()));
                self.outputs.insert(0, Term::Str(text.clone()));
                self.deltas.push(CursorDelta::of_literal(text));
            }
            Combinator::ByteRange { ranges, modifiers } => {
                let var = self.next_var;
                self.next_var += 1;
                self.inputs
                    .push(Pattern::capture(var, CaptureShape::from_modifiers(modifiers)));
                let checks = ranges.iter().map(|r| Guard::range(var, *r)).collect();
                if let Some(guard) = Guard::any(checks) {
                    self.guards.push(guard);
                }
                self.outputs.insert(0, Term::Capture(var));
                self.deltas.push(CursorDelta::Column(1));
            }
            Combinator::Label { inner, .. } => {
                let Some(nested) = extract_all(inner, self.next_var) else {
                    return false;
                };
                self.merge(nested, |outputs| outputs);
            }
            Combinator::CompileTraverse { inner, transform } => {
                let Some(nested) = extract_all(inner, self.next_var) else {
                    return false;
                };
                self.merge(nested, |mut outputs| {
                    outputs.reverse();
                    let mut rewritten = transform.apply(outputs);
                    rewritten.reverse();
                    rewritten
                });
            }
            Combinator::Traverse { .. } => return false,
        }
        self.used.push(combinator);
        self.consumed += 1;
        true
    }

    /// Append a fully fused nested segment, rewriting its outputs with `map`.
    fn merge(&mut self, nested: Segment<'_>, map: impl FnOnce(Vec<Term>) -> Vec<Term>) {
        self.inputs.extend(nested.inputs);
        self.guards.extend(nested.guards);
        let mut outputs = map(nested.outputs);
        outputs.append(&mut self.outputs);
        self.outputs = outputs;
        self.deltas.extend(nested.deltas);
        self.next_var = nested.next_var;
    }
}

/// Fuse the longest bound prefix of `combinators`, numbering captures from `next_var`.
pub(crate) fn extract(combinators: &[Combinator], next_var: u32) -> Segment<'_> {
    let mut segment = Segment::empty(next_var);
    for combinator in combinators {
        if !segment.absorb(combinator) {
            break;
        }
    }
    segment
}

/// Fuse all of `combinators`, or `None` if any of them is unbound.
fn extract_all(combinators: &[Combinator], next_var: u32) -> Option<Segment<'_>> {
    let segment = extract(combinators, next_var);
    (segment.consumed == combinators.len()).then_some(segment)
}
