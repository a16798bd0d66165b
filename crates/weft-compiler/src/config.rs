//! Compiler configuration.

/// Configuration for a compilation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Check chain invariants on the finished program.
    pub(crate) verify: bool,
    /// Cursor the entry point starts from.
    pub(crate) start_line: u32,
    pub(crate) start_column: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verify: cfg!(debug_assertions),
            start_line: 1,
            start_column: 1,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to verify chain invariants after compiling.
    pub fn verify(mut self, value: bool) -> Self {
        self.verify = value;
        self
    }

    /// Set the starting line and column of the entry point.
    pub fn start(mut self, line: u32, column: u32) -> Self {
        self.start_line = line;
        self.start_column = column;
        self
    }
}
