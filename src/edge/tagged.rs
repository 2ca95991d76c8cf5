//! Edges carrying a mutable, change-observable payload.
//!
//! A [`TaggedEdge`] splits identity from payload: the `(source, target)`
//! pair drives equality, hashing, and heap bookkeeping, while the tag is
//! free to mutate without disturbing any of them. Tag changes are announced
//! to registered observers synchronously, once per differing assignment, in
//! registration order.

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Edge, EdgeEnds};

/// Observer callback invoked with the new tag value after each change.
pub type TagObserver<T> = Box<dyn FnMut(&T)>;

/// An edge with an attached mutable tag.
///
/// Source and target are immutable for the value's lifetime. Equality and
/// hashing are defined over `(source, target)` only - mutating the tag never
/// changes either, so a `TaggedEdge` stored in a hash set or a heap stays
/// findable under its identity no matter what happens to its payload.
///
/// Assigning a tag equal (by `PartialEq`) to the current one is a no-op.
/// Assigning a differing tag replaces it and invokes every registered
/// observer exactly once, synchronously, in registration order. Observers
/// receive the new value and must not assume atomicity with further
/// assignments from other call sites.
///
/// Cloning copies identity and tag; observer registrations are per-instance
/// and do not survive the clone.
#[derive(Serialize, Deserialize)]
pub struct TaggedEdge<V, T> {
    edge: Edge<V>,
    tag: T,
    #[serde(skip)]
    observers: Vec<TagObserver<T>>,
}

impl<V, T> TaggedEdge<V, T> {
    /// Creates a tagged edge between `source` and `target`.
    pub fn new(source: V, target: V, tag: T) -> Self {
        Self {
            edge: Edge::new(source, target),
            tag,
            observers: Vec::new(),
        }
    }

    /// The `(source, target)` identity pair, without the payload.
    pub fn identity(&self) -> &Edge<V> {
        &self.edge
    }

    /// The current payload.
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// Registers an observer invoked after every differing tag assignment.
    pub fn on_tag_changed<O>(&mut self, observer: O)
    where
        O: FnMut(&T) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Replaces the tag if `value` differs from the current one.
    ///
    /// A no-op when `value == *self.tag()`; otherwise the tag is replaced
    /// and every observer fires once with the new value, in registration
    /// order, before this call returns.
    pub fn set_tag(&mut self, value: T)
    where
        T: PartialEq,
    {
        if self.tag != value {
            self.tag = value;
            for observer in &mut self.observers {
                observer(&self.tag);
            }
        }
    }
}

impl<V: Eq, T> EdgeEnds for TaggedEdge<V, T> {
    type Vertex = V;

    #[inline(always)]
    fn source(&self) -> &V {
        self.edge.source()
    }

    #[inline(always)]
    fn target(&self) -> &V {
        self.edge.target()
    }
}

impl<V: PartialEq, T> PartialEq for TaggedEdge<V, T> {
    fn eq(&self, other: &Self) -> bool {
        self.edge == other.edge
    }
}

impl<V: Eq, T> Eq for TaggedEdge<V, T> {}

impl<V: Hash, T> Hash for TaggedEdge<V, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.edge.hash(state);
    }
}

impl<V: Clone, T: Clone> Clone for TaggedEdge<V, T> {
    fn clone(&self) -> Self {
        Self {
            edge: self.edge.clone(),
            tag: self.tag.clone(),
            observers: Vec::new(),
        }
    }
}

impl<V: fmt::Debug, T: fmt::Debug> fmt::Debug for TaggedEdge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedEdge")
            .field("source", &self.edge.source)
            .field("target", &self.edge.target)
            .field("tag", &self.tag)
            .finish()
    }
}

impl<V: fmt::Display, T: fmt::Display> fmt::Display for TaggedEdge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.edge, self.tag)
    }
}
