//! Request-scoped context bag.
//!
//! A [`Context`] is an immutable chain of key/value entries. Attaching a value
//! never changes an existing context: [`Context::with_value`] returns a new
//! context whose newest entry points back at the old one. Middleware hand the
//! new context downstream; everything upstream keeps seeing what it had.
//!
//! ```text
//! Context::new()            head: None
//!   .with_value("a", 1u32)  head: a ─▶ None
//!   .with_value("b", "x")   head: b ─▶ a ─▶ None
//! ```
//!
//! Cloning a context is one `Arc` clone, and every request starts with an
//! empty one, so nothing attached to one request is reachable from another.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An immutable, request-scoped key/value chain.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Entry>>,
}

struct Entry {
    key: &'static str,
    value: Box<dyn Any + Send + Sync>,
    parent: Option<Arc<Entry>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new context carrying `value` under `key`, layered on top of
    /// `self`. An existing entry with the same key is shadowed, not replaced.
    pub fn with_value<T>(&self, key: &'static str, value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            head: Some(Arc::new(Entry {
                key,
                value: Box::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// Typed lookup.
    ///
    /// Returns the value most recently attached under `key`, or `None` when
    /// the key is absent or the stored value is not a `T`. A type mismatch
    /// does not fall through to older entries.
    pub fn value<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries()
            .find(|entry| entry.key == key)
            .and_then(|entry| entry.value.downcast_ref::<T>())
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn entries(&self) -> impl Iterator<Item = &Entry> {
        std::iter::successors(self.head.as_deref(), |entry| entry.parent.as_deref())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries().map(|e| e.key)).finish()
    }
}
