//! Trait definitions for graph abstractions.
//!
//! These traits let the id-level algorithms in [`algorithms`](crate::graph::algorithms) run
//! over any graph representation, not only [`DirectedGraph`](crate::DirectedGraph).
//!
//! - [`GraphBase`] - Core properties: vertex count and vertex iteration
//! - [`Successors`] - Forward edge traversal (outgoing edges, in edge order)

use crate::graph::VertexId;

/// Base trait providing core graph properties.
///
/// Implementations must hand out dense ids: every id yielded by
/// [`vertex_ids`](GraphBase::vertex_ids) has an index below
/// [`vertex_count`](GraphBase::vertex_count).
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns an iterator over all vertex identifiers, in insertion order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the targets of the outgoing edges of `vertex`.
    ///
    /// The order must be the edge insertion order; traversal results depend on it.
    /// An unknown `vertex` yields an empty iterator.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}
