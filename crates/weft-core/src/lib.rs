#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by weft front-ends and the procedure compiler.
//!
//! - `Combinator`: one declarative parsing step, as produced by a front-end DSL
//! - `Value` / `Term`: runtime values and the compile-time expressions that build them
//! - `Transform`: named handles for user-supplied transforms
//! - `Colors`, `text`: presentation helpers used by dumps and error messages

mod colors;
mod combinator;
pub mod text;
mod transform;
mod value;

#[cfg(test)]
mod combinator_tests;

pub use colors::Colors;
pub use combinator::{CaptureShape, Combinator, Modifier, Range};
pub use transform::{CompileFn, RuntimeFn, Transform};
pub use value::{Term, Value};
