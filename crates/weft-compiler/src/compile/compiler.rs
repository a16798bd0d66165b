//! Chain driver and entry points.

use std::sync::Arc;

use weft_core::Combinator;
use weft_ir::{AccExpr, Body, Entrypoint, Guard, ProcName, ProcedureDef, Program, StackExpr};

use super::cursor;
use super::extract::{Segment, extract};
use super::label;
use super::verify::verify;
use crate::config::Config;
use crate::error::{CompileError, Result};
use crate::trace::{CompileTracer, NoopTracer, SegmentSummary};

/// Compile `combinators` into a program named `name` with default configuration.
pub fn compile(name: &str, combinators: &[Combinator]) -> Result<Program> {
    Compiler::new(name).compile(combinators)
}

/// Reusable compiler front: a program name plus configuration.
///
/// Holds no state between calls; every compilation gets a fresh step counter.
#[derive(Clone, Debug)]
pub struct Compiler {
    name: Arc<str>,
    config: Config,
}

impl Compiler {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            config: Config::default(),
        }
    }

    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compile(&self, combinators: &[Combinator]) -> Result<Program> {
        self.compile_traced(combinators, &mut NoopTracer)
    }

    /// Compile, reporting fusion decisions and emitted procedures to `tracer`.
    pub fn compile_traced<T: CompileTracer>(
        &self,
        combinators: &[Combinator],
        tracer: &mut T,
    ) -> Result<Program> {
        if combinators.is_empty() {
            return Err(CompileError::EmptySequence {
                name: self.name.to_string(),
            });
        }

        let mut ctx = CompileCtx::new(Arc::clone(&self.name), tracer);
        let entry = ctx.next_name();
        let last = ctx.compile_sequence(combinators, entry.clone())?;
        ctx.emit(ProcedureDef::new(last, Body::Ok));

        let program = Program {
            name: self.name.to_string(),
            entry: Entrypoint {
                target: entry,
                line: self.config.start_line,
                column: self.config.start_column,
            },
            procedures: ctx.procedures,
        };
        if self.config.verify {
            verify(&program)?;
        }
        Ok(program)
    }
}

/// State of one compilation call.
pub(super) struct CompileCtx<'t, T: CompileTracer> {
    pub(super) name: Arc<str>,
    pub(super) tracer: &'t mut T,
    pub(super) procedures: Vec<ProcedureDef>,
    next_step: u32,
}

impl<'t, T: CompileTracer> CompileCtx<'t, T> {
    fn new(name: Arc<str>, tracer: &'t mut T) -> Self {
        Self {
            name,
            tracer,
            procedures: Vec::new(),
            next_step: 0,
        }
    }

    /// Allocate the next chain link name.
    pub(super) fn next_name(&mut self) -> ProcName {
        let name = ProcName::link(Arc::clone(&self.name), self.next_step);
        self.next_step += 1;
        name
    }

    pub(super) fn emit(&mut self, def: ProcedureDef) {
        self.tracer.trace_procedure(&def);
        self.procedures.push(def);
    }

    /// Compile `combinators` as a chain starting at `current`.
    ///
    /// Returns the name the chain ends on, which the caller must define.
    pub(super) fn compile_sequence(
        &mut self,
        combinators: &[Combinator],
        mut current: ProcName,
    ) -> Result<ProcName> {
        let mut rest = combinators;
        while let Some((head, tail)) = rest.split_first() {
            let segment = extract(rest, 0);
            if !segment.is_empty() {
                rest = &rest[segment.consumed..];
                current = self.compile_bound(segment, current);
                continue;
            }

            // A label whose inner run does not fully fuse loses its scope:
            // its elements are spliced in place and extraction restarts at the first.
            if let Combinator::Label { inner, label } = head {
                self.tracer.trace_label_fallback(label, inner.len());
                let spliced: Vec<Combinator> = inner.iter().chain(tail).cloned().collect();
                return self.compile_sequence(&spliced, current);
            }

            current = self.compile_unbound(head, current)?;
            rest = tail;
        }
        Ok(current)
    }

    /// Emit the match procedure for `segment` at `current`, plus its catch-all
    /// when the segment reads input.
    fn compile_bound(&mut self, segment: Segment<'_>, current: ProcName) -> ProcName {
        let next = self.next_name();
        let catch_all = segment.matches_input();
        self.tracer.trace_segment(
            &current,
            SegmentSummary {
                consumed: segment.consumed,
                inputs: segment.inputs.len(),
                guards: segment.guards.len(),
                outputs: segment.outputs.len(),
                catch_all,
            },
        );

        let (line, column) = cursor::advance(&segment.deltas);
        let body = Body::invoke(next.clone(), AccExpr::prepend(segment.outputs), StackExpr::Keep)
            .advancing(line, column);
        let mut def = ProcedureDef::new(current.clone(), body)
            .matching(segment.inputs)
            .guarded(Guard::all(segment.guards));

        if !catch_all {
            self.emit(def);
            return next;
        }

        let fallback = current.catch_all();
        def = def.fallback(fallback.clone());
        self.emit(def);
        self.emit(ProcedureDef::new(
            fallback,
            Body::Error {
                reason: label::expected(&segment.used),
            },
        ));
        next
    }
}
