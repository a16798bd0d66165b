//! ANSI color codes for procedure dumps and compile traces.
//!
//! Three semantic colors with orthogonal dim modifier:
//! - Blue: procedure names
//! - Green: literal text and failure reasons
//! - Dim: parameter plumbing, arrows, keywords
//! - Reset: return to default

/// ANSI color palette for textual output.
///
/// Uses only standard 16-color ANSI codes so it reads in light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub name: &'static str,
    pub literal: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        name: "\x1b[34m",
        literal: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        name: "",
        literal: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.name.is_empty()
    }

    /// Wrap `text` as a procedure name.
    pub fn name(&self, text: impl std::fmt::Display) -> String {
        format!("{}{text}{}", self.name, self.reset)
    }

    /// Wrap `text` as literal data.
    pub fn literal(&self, text: impl std::fmt::Display) -> String {
        format!("{}{text}{}", self.literal, self.reset)
    }

    /// Wrap `text` as structural noise.
    pub fn dim(&self, text: impl std::fmt::Display) -> String {
        format!("{}{text}{}", self.dim, self.reset)
    }
}
