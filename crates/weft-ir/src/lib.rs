//! Procedure IR emitted by the weft compiler.
//!
//! This crate contains:
//! - The `ProcedureDef` IR and its closed set of node kinds
//! - Generated procedure names (`ProcName`)
//! - The runtime result contract (`Outcome`) renderers must honor
//! - A human-readable dump and JSON export

mod dump;
mod guard;
mod ir;
mod name;
mod outcome;


pub use dump::{DumpConfig, dump, dump_procedure};
pub use guard::Guard;
pub use ir::{
    AccExpr, Body, ColumnExpr, Entrypoint, LineExpr, Params, Pattern, ProcedureDef, Program,
    StackExpr, StackPattern,
};
pub use name::{ProcName, Role};
pub use outcome::Outcome;
