//! Vertex identifier implementation.
//!
//! This module provides the [`VertexId`] type, a strongly-typed index into a graph's
//! [`VertexDirectory`](crate::graph::VertexDirectory). Vertices refer to one another
//! (edge targets, predecessor links) exclusively through these ids, so no vertex ever
//! holds a reference to another.

use std::fmt;

/// A strongly-typed identifier for vertices within a graph.
///
/// `VertexId` wraps a `usize` index, providing type safety to prevent accidental mixing
/// of vertex indices with other integer values. Ids are assigned sequentially from 0 as
/// vertices are inserted and stay valid until the graph is cleared.
///
/// # Examples
///
/// ```rust
/// use routegraph::{DirectedGraph, VertexId};
///
/// let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
///
/// assert_eq!(graph.vertex_id(&"B"), Some(VertexId::new(1)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Creates a new `VertexId` from a raw index value.
    ///
    /// Normal usage obtains ids from a graph; this constructor exists for tests and for
    /// callers that keep per-vertex data in their own vectors.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the raw 0-based index of this vertex.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(index: usize) -> Self {
        VertexId(index)
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(vertex: VertexId) -> Self {
        vertex.0
    }
}
