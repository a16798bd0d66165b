//! Guard predicates over captured units.

use std::fmt;

use weft_core::Range;

/// Boolean test over the variables a procedure's input pattern binds.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Guard {
    /// Trivially true.
    Always,
    /// `xvar == value`
    Eq { var: u32, value: i64 },
    /// `min <= xvar <= max`, with `min < max`.
    Between { var: u32, min: i64, max: i64 },
    /// Disjunction.
    Any { guards: Vec<Guard> },
    /// Conjunction.
    All { guards: Vec<Guard> },
}

impl Guard {
    /// Range check on `var`: equality for a single value, bounds swapped if reversed.
    pub fn range(var: u32, range: Range) -> Self {
        let (min, max) = range.ordered();
        if min == max {
            Self::Eq { var, value: min }
        } else {
            Self::Between { var, min, max }
        }
    }

    /// Disjunction of `guards`; `None` when there is nothing to test.
    pub fn any(mut guards: Vec<Guard>) -> Option<Self> {
        match guards.len() {
            0 => None,
            1 => guards.pop(),
            _ => Some(Self::Any { guards }),
        }
    }

    /// Conjunction of `guards`; `Always` when empty.
    pub fn all(mut guards: Vec<Guard>) -> Self {
        match guards.len() {
            0 => Self::Always,
            1 => guards.pop().unwrap_or(Self::Always),
            _ => Self::All { guards },
        }
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Self::Always)
    }

    /// Evaluate against bound variables. An unbound variable fails the test.
    pub fn test(&self, lookup: &impl Fn(u32) -> Option<i64>) -> bool {
        match self {
            Self::Always => true,
            Self::Eq { var, value } => lookup(*var) == Some(*value),
            Self::Between { var, min, max } => {
                lookup(*var).is_some_and(|v| *min <= v && v <= *max)
            }
            Self::Any { guards } => guards.iter().any(|g| g.test(lookup)),
            Self::All { guards } => guards.iter().all(|g| g.test(lookup)),
        }
    }
}

impl fmt::Display for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => write!(f, "true"),
            Self::Eq { var, value } => write!(f, "x{var} == {value}"),
            Self::Between { var, min, max } => write!(f, "{min} <= x{var} <= {max}"),
            Self::Any { guards } => {
                write!(f, "(")?;
                for (i, g) in guards.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{g}")?;
                }
                write!(f, ")")
            }
            Self::All { guards } => {
                for (i, g) in guards.iter().enumerate() {
                    if i > 0 {
                        write!(f, " and ")?;
                    }
                    write!(f, "{g}")?;
                }
                Ok(())
            }
        }
    }
}
