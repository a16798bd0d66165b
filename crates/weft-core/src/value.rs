//! Runtime values and the compile-time terms that produce them.

use std::fmt;

use crate::text::quote_literal;

/// A value produced by running generated procedures.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    List(Vec<Value>),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

/// Output expression of a fused segment.
///
/// `Capture(n)` refers to the unit bound to variable `xn` by the segment's
/// input pattern; the rest are constants.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Term {
    Str(String),
    Int(i64),
    Capture(u32),
    List(Vec<Term>),
}

impl Term {
    /// Substitute captures with `lookup`; `None` if a capture is unbound.
    pub fn resolve(&self, lookup: &impl Fn(u32) -> Option<i64>) -> Option<Value> {
        Some(match self {
            Self::Str(s) => Value::Str(s.clone()),
            Self::Int(n) => Value::Int(*n),
            Self::Capture(var) => Value::Int(lookup(*var)?),
            Self::List(items) => Value::List(
                items
                    .iter()
                    .map(|item| item.resolve(lookup))
                    .collect::<Option<Vec<_>>>()?,
            ),
        })
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", quote_literal(s)),
            Self::Int(n) => write!(f, "{n}"),
            Self::Capture(var) => write!(f, "x{var}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
