//! Generated procedure names.

use std::fmt;
use std::sync::Arc;

/// What a generated procedure is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub enum Role {
    /// A link in the forward chain.
    Link,
    /// The failure path of the link with the same step.
    CatchAll,
}

/// Name of a generated procedure: `<base>__<step>`, or `<base>__<step>__error`
/// for a catch-all.
///
/// Steps are handed out once per chain link, so names sort in emission order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProcName {
    base: Arc<str>,
    step: u32,
    role: Role,
}

impl ProcName {
    pub fn link(base: impl Into<Arc<str>>, step: u32) -> Self {
        Self {
            base: base.into(),
            step,
            role: Role::Link,
        }
    }

    /// The catch-all owned by this link. Shares the step; consumes none.
    pub fn catch_all(&self) -> Self {
        Self {
            base: Arc::clone(&self.base),
            step: self.step,
            role: Role::CatchAll,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_catch_all(&self) -> bool {
        self.role == Role::CatchAll
    }
}

impl fmt::Display for ProcName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Role::Link => write!(f, "{}__{}", self.base, self.step),
            Role::CatchAll => write!(f, "{}__{}__error", self.base, self.step),
        }
    }
}

impl serde::Serialize for ProcName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
