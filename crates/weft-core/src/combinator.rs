//! Combinator descriptors.
//!
//! A combinator sequence is the fully materialized output of a front-end DSL.
//! The compiler only inspects the shape of each step: whether it can be fused
//! into a single input match or needs a runtime transform.

use std::fmt;

use crate::transform::{CompileFn, RuntimeFn};

/// Inclusive range of unit values accepted by a [`Combinator::ByteRange`].
///
/// Bounds may be given in either order; `min > max` matches `max..=min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Range {
    pub min: i64,
    pub max: i64,
}

impl Range {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Single-value range.
    pub const fn exactly(value: i64) -> Self {
        Self::new(value, value)
    }

    /// Bounds in ascending order.
    pub fn ordered(self) -> (i64, i64) {
        if self.min > self.max {
            (self.max, self.min)
        } else {
            (self.min, self.max)
        }
    }

    pub fn contains(self, value: i64) -> bool {
        let (lo, hi) = self.ordered();
        lo <= value && value <= hi
    }
}

impl From<std::ops::RangeInclusive<u8>> for Range {
    fn from(range: std::ops::RangeInclusive<u8>) -> Self {
        Self::new(i64::from(*range.start()), i64::from(*range.end()))
    }
}

impl From<std::ops::RangeInclusive<char>> for Range {
    fn from(range: std::ops::RangeInclusive<char>) -> Self {
        Self::new(i64::from(u32::from(*range.start())), i64::from(u32::from(*range.end())))
    }
}

/// Extraction modifier applied to a captured unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Modifier {
    /// Bit width of the captured integer (multiple of 8, at most 64).
    Size(u8),
    Signed,
    Unsigned,
    Little,
    Big,
    /// Capture one UTF-8 encoded code point instead of a fixed-width integer.
    Utf8,
}

/// Resolved extraction shape of a captured unit.
///
/// Later modifiers override earlier ones. Defaults to an unsigned big-endian byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CaptureShape {
    pub bits: u8,
    pub signed: bool,
    pub little: bool,
    pub utf8: bool,
}

impl Default for CaptureShape {
    fn default() -> Self {
        Self {
            bits: 8,
            signed: false,
            little: false,
            utf8: false,
        }
    }
}

impl CaptureShape {
    pub fn from_modifiers(modifiers: &[Modifier]) -> Self {
        let mut shape = Self::default();
        for modifier in modifiers {
            match *modifier {
                Modifier::Size(bits) => shape.bits = bits.clamp(8, 64) / 8 * 8,
                Modifier::Signed => shape.signed = true,
                Modifier::Unsigned => shape.signed = false,
                Modifier::Little => shape.little = true,
                Modifier::Big => shape.little = false,
                Modifier::Utf8 => shape.utf8 = true,
            }
        }
        shape
    }

    /// Number of input bytes a fixed-width capture consumes.
    pub fn width(&self) -> usize {
        usize::from(self.bits / 8)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Binary-pattern style suffix: empty for a plain byte, else `::16-signed-little`.
impl fmt::Display for CaptureShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.utf8 {
            return write!(f, "::utf8");
        }
        let mut parts = Vec::new();
        if self.bits != 8 {
            parts.push(self.bits.to_string());
        }
        if self.signed {
            parts.push("signed".to_string());
        }
        if self.little {
            parts.push("little".to_string());
        }
        if parts.is_empty() {
            return Ok(());
        }
        write!(f, "::{}", parts.join("-"))
    }
}

/// One declarative parsing step.
#[derive(Clone, Debug, PartialEq)]
pub enum Combinator {
    /// Matches an exact byte sequence and keeps it as an output.
    Literal(String),
    /// Matches one unit whose value falls in any of `ranges` (any value when empty).
    ByteRange {
        ranges: Vec<Range>,
        modifiers: Vec<Modifier>,
    },
    /// Wraps `inner`, replacing its failure description with `label`.
    Label {
        inner: Vec<Combinator>,
        label: String,
    },
    /// Matches `inner`, then rewrites its outputs with a runtime function.
    Traverse {
        inner: Vec<Combinator>,
        transform: RuntimeFn,
    },
    /// Matches `inner`, rewriting its outputs with a function applied during compilation.
    CompileTraverse {
        inner: Vec<Combinator>,
        transform: CompileFn,
    },
}

impl Combinator {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Any single byte.
    pub fn byte() -> Self {
        Self::byte_range(Vec::<Range>::new())
    }

    pub fn byte_range<R: Into<Range>>(ranges: impl IntoIterator<Item = R>) -> Self {
        Self::ByteRange {
            ranges: ranges.into_iter().map(Into::into).collect(),
            modifiers: Vec::new(),
        }
    }

    /// One UTF-8 code point in any of `ranges`.
    pub fn utf8_range<R: Into<Range>>(ranges: impl IntoIterator<Item = R>) -> Self {
        Self::byte_range(ranges).with_modifiers([Modifier::Utf8])
    }

    pub fn label(inner: impl IntoIterator<Item = Combinator>, label: impl Into<String>) -> Self {
        Self::Label {
            inner: inner.into_iter().collect(),
            label: label.into(),
        }
    }

    pub fn traverse(inner: impl IntoIterator<Item = Combinator>, transform: RuntimeFn) -> Self {
        Self::Traverse {
            inner: inner.into_iter().collect(),
            transform,
        }
    }

    pub fn compile_traverse(
        inner: impl IntoIterator<Item = Combinator>,
        transform: CompileFn,
    ) -> Self {
        Self::CompileTraverse {
            inner: inner.into_iter().collect(),
            transform,
        }
    }

    /// Append extraction modifiers. No-op for anything but `ByteRange`.
    pub fn with_modifiers(mut self, extra: impl IntoIterator<Item = Modifier>) -> Self {
        if let Self::ByteRange { modifiers, .. } = &mut self {
            modifiers.extend(extra);
        }
        self
    }

    /// Variant name, for traces and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::ByteRange { .. } => "byte_range",
            Self::Label { .. } => "label",
            Self::Traverse { .. } => "traverse",
            Self::CompileTraverse { .. } => "compile_traverse",
        }
    }
}
