//! Compile-time errors.
//!
//! Runtime parse failures are not errors here: they are `Body::Error`
//! procedures emitted into the program.

/// Error that aborts a compilation. No partial program is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// The caller supplied no combinators.
    #[error("cannot compile `{name}` with an empty combinator sequence")]
    EmptySequence { name: String },

    /// A combinator that can be neither fused nor expanded at runtime.
    #[error("cannot compile `{name}`: unsupported combinator {combinator}")]
    UnsupportedCombinator { name: String, combinator: String },

    /// Emitted procedures violate the chain invariants.
    #[error("compiled chain for `{name}` is broken: {reason}")]
    BrokenChain { name: String, reason: String },
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;
