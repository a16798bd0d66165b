//! Named handles for user-supplied output transforms.
//!
//! Transforms are opaque closures, so identity is the name: two handles with
//! the same name compare equal, and serialized IR carries only the name for an
//! out-of-process renderer to bind.

use std::fmt;
use std::sync::Arc;

use crate::value::{Term, Value};

type TransformImpl<T> = dyn Fn(Vec<T>) -> Vec<T> + Send + Sync;

/// A named function over a sequence of outputs.
///
/// The function sees outputs in matched (left-to-right) order and returns
/// them in the same order.
pub struct Transform<T> {
    name: Arc<str>,
    func: Arc<TransformImpl<T>>,
}

/// Transform evaluated by generated procedures at parse time.
pub type RuntimeFn = Transform<Value>;

/// Transform folded into generated procedures during compilation.
pub type CompileFn = Transform<Term>;

impl<T> Transform<T> {
    pub fn new(
        name: impl Into<Arc<str>>,
        func: impl Fn(Vec<T>) -> Vec<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&self, values: Vec<T>) -> Vec<T> {
        (self.func)(values)
    }
}

impl<T> Clone for Transform<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            func: Arc::clone(&self.func),
        }
    }
}

impl<T> PartialEq for Transform<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Transform<T> {}

impl<T> fmt::Debug for Transform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transform").field(&self.name).finish()
    }
}

impl<T> serde::Serialize for Transform<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}
