//! Tracing infrastructure for observing a compilation.
//!
//! # Design: Zero-Cost Abstraction
//!
//! The compiler is generic over `CompileTracer`. With `NoopTracer` every hook
//! is an empty `#[inline(always)]` function and the calls vanish. `PrintTracer`
//! records one human-readable line per event, for debugging fusion decisions.

use weft_core::Colors;
use weft_ir::{Body, ProcName, ProcedureDef};

/// Shape of a fused bound segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentSummary {
    /// Top-level combinators consumed.
    pub consumed: usize,
    pub inputs: usize,
    pub guards: usize,
    pub outputs: usize,
    /// Whether a catch-all procedure was emitted.
    pub catch_all: bool,
}

/// Tracer trait for compiler instrumentation.
///
/// - `trace_segment` - a bound segment was fused into `name`
/// - `trace_label_fallback` - a non-fusable label was unwrapped
/// - `trace_unbound` - an unbound expansion starts at `name`
/// - `trace_procedure` - a definition was emitted
pub trait CompileTracer {
    fn trace_segment(&mut self, name: &ProcName, summary: SegmentSummary);

    fn trace_label_fallback(&mut self, label: &str, inner_len: usize);

    fn trace_unbound(&mut self, name: &ProcName, kind: &'static str);

    fn trace_procedure(&mut self, def: &ProcedureDef);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl CompileTracer for NoopTracer {
    #[inline(always)]
    fn trace_segment(&mut self, _name: &ProcName, _summary: SegmentSummary) {}

    #[inline(always)]
    fn trace_label_fallback(&mut self, _label: &str, _inner_len: usize) {}

    #[inline(always)]
    fn trace_unbound(&mut self, _name: &ProcName, _kind: &'static str) {}

    #[inline(always)]
    fn trace_procedure(&mut self, _def: &ProcedureDef) {}
}

/// Tracer that collects formatted lines.
#[derive(Default)]
pub struct PrintTracer {
    lines: Vec<String>,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(colors: Colors) -> Self {
        Self {
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with newlines.
    pub fn output(&self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

impl CompileTracer for PrintTracer {
    fn trace_segment(&mut self, name: &ProcName, summary: SegmentSummary) {
        let c = &self.colors;
        let catch_all = if summary.catch_all { " +catch-all" } else { "" };
        self.lines.push(format!(
            "segment {} {}",
            c.name(name),
            c.dim(format!(
                "combinators={} inputs={} guards={} outputs={}{catch_all}",
                summary.consumed, summary.inputs, summary.guards, summary.outputs
            ))
        ));
    }

    fn trace_label_fallback(&mut self, label: &str, inner_len: usize) {
        let c = &self.colors;
        self.lines.push(format!(
            "unwrap  {} {}",
            c.literal(weft_core::text::quote_literal(label)),
            c.dim(format!("inner={inner_len}"))
        ));
    }

    fn trace_unbound(&mut self, name: &ProcName, kind: &'static str) {
        let c = &self.colors;
        self.lines
            .push(format!("unbound {} {}", c.name(name), c.dim(kind)));
    }

    fn trace_procedure(&mut self, def: &ProcedureDef) {
        let c = &self.colors;
        let what = match &def.body {
            Body::Invoke { target, .. } => format!("-> {target}"),
            Body::Ok => "ok".to_string(),
            Body::Error { .. } => "error".to_string(),
        };
        self.lines
            .push(format!("emit    {} {}", c.name(&def.name), c.dim(what)));
    }
}
