//! Expansion of combinators that cannot be fused.
//!
//! A runtime traverse is compiled as continuation passing over an explicit
//! stack:
//!
//! ```text
//! entry:  current(rest, acc, stack, ..)          -> inner(rest, [], [acc | stack], ..)
//! inner:  chain compiled from the inner combinators
//! exit:   last(rest, acc, [saved | stack], ..)   -> next(rest, f(acc) ++ saved, stack, ..)
//! ```
//!
//! No catch-all is emitted here; failures surface from the inner chain.

use weft_core::Combinator;
use weft_ir::{AccExpr, Body, ProcName, ProcedureDef, StackExpr};

use super::compiler::CompileCtx;
use crate::error::{CompileError, Result};
use crate::trace::CompileTracer;

impl<T: CompileTracer> CompileCtx<'_, T> {
    /// Expand one unbound combinator at `current`; returns the successor name.
    pub(super) fn compile_unbound(
        &mut self,
        combinator: &Combinator,
        current: ProcName,
    ) -> Result<ProcName> {
        match combinator {
            Combinator::Traverse { inner, transform } => {
                self.tracer.trace_unbound(&current, combinator.kind());

                let inner_entry = self.next_name();
                self.emit(ProcedureDef::new(
                    current,
                    Body::invoke(inner_entry.clone(), AccExpr::Empty, StackExpr::Push),
                ));

                let last = self.compile_sequence(inner, inner_entry)?;

                let next = self.next_name();
                self.emit(
                    ProcedureDef::new(
                        last,
                        Body::invoke(
                            next.clone(),
                            AccExpr::Merge(transform.clone()),
                            StackExpr::Pop,
                        ),
                    )
                    .saved_stack(),
                );
                Ok(next)
            }
            // Bound forms land here only when their inner run is not fusable.
            Combinator::CompileTraverse { .. }
            | Combinator::Literal(_)
            | Combinator::ByteRange { .. }
            | Combinator::Label { .. } => Err(CompileError::UnsupportedCombinator {
                name: self.name.to_string(),
                combinator: format!("{combinator:?}"),
            }),
        }
    }
}
