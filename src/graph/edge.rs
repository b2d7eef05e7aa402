//! Outgoing edge records.

use crate::graph::VertexId;

/// A weighted connection from a vertex to one of its neighbors.
///
/// An `Edge` is owned by the edge list of its source [`Vertex`](crate::graph::Vertex) and
/// names its target only by [`VertexId`]; it never owns or borrows the target vertex.
/// Edges are immutable once created and live until the graph is cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W> {
    target: VertexId,
    weight: W,
}

impl<W> Edge<W> {
    pub(crate) fn new(target: VertexId, weight: W) -> Self {
        Edge { target, weight }
    }

    /// Returns the vertex this edge points to.
    #[must_use]
    #[inline]
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Returns the caller-supplied weight of this edge.
    #[must_use]
    #[inline]
    pub fn weight(&self) -> &W {
        &self.weight
    }
}
