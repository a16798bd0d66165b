//! Combinator-to-procedure compilation.
//!
//! The driver walks the combinator sequence front to back. At each step it
//! fuses the longest bound prefix into one matching procedure (plus its
//! catch-all), or hands a single unbound combinator to the expander, and
//! chains the results by generated name.
//!
//! # Module Organization
//!
//! - `extract`: greedy bound-segment extraction
//! - `cursor`: line/column arithmetic for a fused segment
//! - `compiler`: chain driver and bound compiler step
//! - `unbound`: save/restore expansion of runtime transforms
//! - `label`: "expected ..." failure messages
//! - `verify`: chain invariant checks

mod compiler;
mod cursor;
mod extract;
mod label;
mod unbound;
mod verify;

#[cfg(test)]
mod cursor_tests;
#[cfg(test)]
mod label_tests;

pub use compiler::{Compiler, compile};
pub use verify::verify;
