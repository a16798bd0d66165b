//! Human-readable dump of compiled programs.
//!
//! Each procedure renders as a head line and an indented body line:
//!
//! ```text
//! num__0(<<x0, rest::binary>>, acc, stack, line, column) when 48 <= x0 <= 57 else num__0__error
//!   -> num__1(rest, [x0] ++ acc, stack, line, column + 1)
//! ```

use std::fmt::Write as _;

use weft_core::Colors;
use weft_core::text::quote_literal;

use crate::ir::{
    AccExpr, Body, ColumnExpr, LineExpr, Pattern, ProcedureDef, Program, StackExpr, StackPattern,
};

/// Configuration for dump output.
#[derive(Clone, Copy, Debug, Default)]
pub struct DumpConfig {
    pub colors: Colors,
}

impl DumpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }
}

/// Render the whole program: entry line, then every procedure in emission order.
pub fn dump(program: &Program, config: DumpConfig) -> String {
    let c = &config.colors;
    let mut out = String::new();
    let entry = &program.entry;
    writeln!(
        out,
        "entry {}({}, {}) {} {}",
        program.name,
        entry.line,
        entry.column,
        c.dim("->"),
        c.name(&entry.target)
    )
    .unwrap();
    for def in &program.procedures {
        out.push_str(&dump_procedure(def, config));
    }
    out
}

/// Render one procedure as two lines.
pub fn dump_procedure(def: &ProcedureDef, config: DumpConfig) -> String {
    let c = &config.colors;
    let mut out = String::new();

    write!(
        out,
        "{}({}, acc, {}, line, column)",
        c.name(&def.name),
        render_input(&def.params.input, c),
        render_stack_pattern(def.params.stack)
    )
    .unwrap();
    if !def.guard.is_always() {
        write!(out, " {} {}", c.dim("when"), def.guard).unwrap();
    }
    if let Some(fallback) = &def.fallback {
        write!(out, " {} {}", c.dim("else"), c.name(fallback)).unwrap();
    }
    out.push('\n');

    writeln!(out, "  {} {}", c.dim("->"), render_body(&def.body, c)).unwrap();
    out
}

fn render_input(patterns: &[Pattern], c: &Colors) -> String {
    if patterns.is_empty() {
        return "rest".to_string();
    }
    let mut parts: Vec<String> = patterns
        .iter()
        .map(|p| match p {
            Pattern::Literal { text } => c.literal(quote_literal(text)),
            Pattern::Capture { var, shape } => format!("x{var}{shape}"),
        })
        .collect();
    parts.push("rest::binary".to_string());
    format!("<<{}>>", parts.join(", "))
}

fn render_stack_pattern(stack: StackPattern) -> &'static str {
    match stack {
        StackPattern::Any => "stack",
        StackPattern::Saved => "[saved | stack]",
    }
}

fn render_body(body: &Body, c: &Colors) -> String {
    match body {
        Body::Invoke {
            target,
            acc,
            stack,
            line,
            column,
        } => format!(
            "{}(rest, {}, {}, {}, {})",
            c.name(target),
            render_acc(acc),
            render_stack(*stack),
            render_line(*line),
            render_column(*column)
        ),
        Body::Ok => "ok(reverse(acc), rest, line, column)".to_string(),
        Body::Error { reason } => {
            format!("error({}, rest, line, column)", c.literal(quote_literal(reason)))
        }
    }
}

fn render_acc(acc: &AccExpr) -> String {
    match acc {
        AccExpr::Keep => "acc".to_string(),
        AccExpr::Empty => "[]".to_string(),
        AccExpr::Prepend(terms) => {
            let terms: Vec<String> = terms.iter().map(ToString::to_string).collect();
            format!("[{}] ++ acc", terms.join(", "))
        }
        AccExpr::Merge(transform) => format!("{}(acc) ++ saved", transform.name()),
    }
}

fn render_stack(stack: StackExpr) -> &'static str {
    match stack {
        StackExpr::Keep | StackExpr::Pop => "stack",
        StackExpr::Push => "[acc | stack]",
    }
}

fn render_line(line: LineExpr) -> String {
    match line {
        LineExpr::Incoming => "line".to_string(),
        LineExpr::Advance(n) => format!("line + {n}"),
    }
}

fn render_column(column: ColumnExpr) -> String {
    match column {
        ColumnExpr::Advance(0) => "column".to_string(),
        ColumnExpr::Advance(n) => format!("column + {n}"),
        ColumnExpr::Reset(n) => n.to_string(),
    }
}
