//! Weft compiler: combinator sequences to chained matching procedures.
//!
//! This crate turns an ordered sequence of parsing combinators into a
//! forward chain of procedure definitions:
//! - `compile` - bound-segment fusion, unbound expansion, chain assembly
//! - `trace` - compile-time instrumentation
//!
//! Output is the `weft_ir::Program` IR; rendering it into executable code is
//! left to a downstream renderer.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
mod config;
mod error;
pub mod trace;

#[cfg(test)]
pub mod test_utils;

pub use compile::{Compiler, compile, verify};
pub use config::Config;
pub use error::{CompileError, Result};
pub use trace::{CompileTracer, NoopTracer, PrintTracer, SegmentSummary};
