//! Procedure definitions with symbolic successor names.
//!
//! Every procedure takes the same five slots: remaining input, accumulator,
//! stack, line and column. A bound procedure additionally destructures the
//! input with `Params::input` before binding the remainder, and a traverse
//! exit destructures the stack to recover the saved accumulator.
//!
//! The accumulator is kept most-recent-first. `Body::Ok` reverses it.

use weft_core::{CaptureShape, RuntimeFn, Term};

use crate::guard::Guard;
use crate::name::ProcName;

/// One element of a procedure's input pattern.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pattern {
    /// Exact bytes.
    Literal { text: String },
    /// One unit bound to `x<var>`, extracted per `shape`.
    Capture { var: u32, shape: CaptureShape },
}

impl Pattern {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal { text: text.into() }
    }

    pub fn capture(var: u32, shape: CaptureShape) -> Self {
        Self::Capture { var, shape }
    }
}

/// How a procedure binds the stack slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StackPattern {
    /// Binds the whole stack as `stack`.
    #[default]
    Any,
    /// Binds `[saved | stack]`; does not match an empty stack.
    Saved,
}

/// Parameter slots of a procedure.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Params {
    /// Patterns matched in order against the front of the input; the rest binds `rest`.
    pub input: Vec<Pattern>,
    pub stack: StackPattern,
}

/// New accumulator passed to the successor.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AccExpr {
    /// `acc`
    Keep,
    /// `[t0, t1, ..] ++ acc`, terms most-recent-first.
    Prepend(Vec<Term>),
    /// `[]`
    Empty,
    /// `f(acc) ++ saved`: the transform sees and returns matched order.
    Merge(RuntimeFn),
}

impl AccExpr {
    pub fn prepend(terms: Vec<Term>) -> Self {
        if terms.is_empty() {
            Self::Keep
        } else {
            Self::Prepend(terms)
        }
    }
}

/// New stack passed to the successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StackExpr {
    /// `stack`
    Keep,
    /// `[acc | stack]`
    Push,
    /// `stack` with the saved frame consumed by `StackPattern::Saved`.
    Pop,
}

/// Line passed to the successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "by", rename_all = "snake_case")]
pub enum LineExpr {
    /// `line`
    Incoming,
    /// `line + n`
    Advance(u32),
}

impl LineExpr {
    pub fn apply(self, line: u32) -> u32 {
        match self {
            Self::Incoming => line,
            Self::Advance(n) => line + n,
        }
    }
}

/// Column passed to the successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "to", rename_all = "snake_case")]
pub enum ColumnExpr {
    /// `column + n`; `Advance(0)` is the incoming column.
    Advance(u32),
    /// Absolute column after a line break.
    Reset(u32),
}

impl ColumnExpr {
    pub fn apply(self, column: u32) -> u32 {
        match self {
            Self::Advance(n) => column + n,
            Self::Reset(n) => n,
        }
    }
}

/// What a procedure does once its parameters and guard match.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Body {
    /// Tail-call `target` with `rest` and the given slot values.
    Invoke {
        target: ProcName,
        acc: AccExpr,
        stack: StackExpr,
        line: LineExpr,
        column: ColumnExpr,
    },
    /// Success: reversed accumulator, remainder, line, column.
    Ok,
    /// Failure with a human-readable reason at the incoming position.
    Error { reason: String },
}

impl Body {
    /// Invoke `target` without moving the cursor.
    pub fn invoke(target: ProcName, acc: AccExpr, stack: StackExpr) -> Self {
        Self::Invoke {
            target,
            acc,
            stack,
            line: LineExpr::Incoming,
            column: ColumnExpr::Advance(0),
        }
    }

    /// Set the cursor update of an `Invoke`. No-op on terminal bodies.
    pub fn advancing(mut self, line_expr: LineExpr, column_expr: ColumnExpr) -> Self {
        if let Self::Invoke { line, column, .. } = &mut self {
            *line = line_expr;
            *column = column_expr;
        }
        self
    }

    pub fn target(&self) -> Option<&ProcName> {
        match self {
            Self::Invoke { target, .. } => Some(target),
            Self::Ok | Self::Error { .. } => None,
        }
    }
}

/// One generated procedure.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ProcedureDef {
    pub name: ProcName,
    pub params: Params,
    pub guard: Guard,
    pub body: Body,
    /// Procedure to run instead when the input pattern or guard does not match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<ProcName>,
}

impl ProcedureDef {
    /// Procedure accepting any input.
    pub fn new(name: ProcName, body: Body) -> Self {
        Self {
            name,
            params: Params::default(),
            guard: Guard::Always,
            body,
            fallback: None,
        }
    }

    pub fn matching(mut self, input: Vec<Pattern>) -> Self {
        self.params.input = input;
        self
    }

    pub fn guarded(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    pub fn saved_stack(mut self) -> Self {
        self.params.stack = StackPattern::Saved;
        self
    }

    pub fn fallback(mut self, name: ProcName) -> Self {
        self.fallback = Some(name);
        self
    }

    /// Whether this procedure can refuse its input.
    pub fn is_partial(&self) -> bool {
        !self.params.input.is_empty()
            || !self.guard.is_always()
            || self.params.stack == StackPattern::Saved
    }
}

/// Public entry point of a compiled program.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Entrypoint {
    pub target: ProcName,
    /// Starting cursor; accumulator and stack start empty.
    pub line: u32,
    pub column: u32,
}

/// Output of one compilation: procedures in emission order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Program {
    pub name: String,
    pub entry: Entrypoint,
    pub procedures: Vec<ProcedureDef>,
}

impl Program {
    pub fn get(&self, name: &ProcName) -> Option<&ProcedureDef> {
        self.procedures.iter().find(|def| &def.name == name)
    }

    /// Names in emission order.
    pub fn names(&self) -> impl Iterator<Item = &ProcName> + '_ {
        self.procedures.iter().map(|def| &def.name)
    }

    /// Chain links only, in emission order.
    pub fn links(&self) -> impl Iterator<Item = &ProcedureDef> + '_ {
        self.procedures.iter().filter(|def| !def.name.is_catch_all())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
