//! Result shapes returned by generated procedures.
//!
//! The compiler never produces these; they are the contract a renderer's
//! output must honor when it runs.

use weft_core::Value;

/// Terminal result of running a compiled program.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Every segment matched. `values` are in left-to-right order.
    Ok {
        values: Vec<Value>,
        remainder: Vec<u8>,
        line: u32,
        column: u32,
    },
    /// A segment failed to match. Position is the start of that segment.
    Error {
        reason: String,
        remainder: Vec<u8>,
        line: u32,
        column: u32,
    },
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Final `(line, column)`.
    pub fn position(&self) -> (u32, u32) {
        match self {
            Self::Ok { line, column, .. } | Self::Error { line, column, .. } => (*line, *column),
        }
    }

    pub fn remainder(&self) -> &[u8] {
        match self {
            Self::Ok { remainder, .. } | Self::Error { remainder, .. } => remainder,
        }
    }
}
