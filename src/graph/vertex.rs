//! Labeled vertices and their outgoing adjacency lists.

use crate::graph::{Edge, VertexId};

/// A labeled vertex with an insertion-ordered list of outgoing edges.
///
/// A vertex knows its own [`VertexId`] so that it can refuse self-loops, and it refuses a
/// second edge to a target it already points to. It carries no search state: visited
/// flags, costs and predecessors live in a [`SearchState`](crate::graph::SearchState)
/// owned by the running search.
#[derive(Debug, Clone)]
pub struct Vertex<T, W> {
    id: VertexId,
    label: T,
    edges: Vec<Edge<W>>,
}

impl<T, W> Vertex<T, W> {
    pub(crate) fn with_capacity(id: VertexId, label: T, edge_capacity: usize) -> Self {
        Vertex {
            id,
            label,
            edges: Vec::with_capacity(edge_capacity),
        }
    }

    /// Returns the id of this vertex within its graph.
    #[must_use]
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the caller-supplied label.
    #[must_use]
    #[inline]
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Adds an edge to `target` with the given weight.
    ///
    /// The edge is rejected when `target` is this vertex or when an edge to `target`
    /// already exists. Rejection is silent and reported by the return value.
    ///
    /// # Returns
    ///
    /// `true` if the edge was added, `false` if it was rejected.
    pub fn connect(&mut self, target: VertexId, weight: W) -> bool {
        if target == self.id || self.has_edge_to(target) {
            return false;
        }

        self.edges.push(Edge::new(target, weight));
        true
    }

    /// Returns true if an edge from this vertex to `target` exists.
    #[must_use]
    pub fn has_edge_to(&self, target: VertexId) -> bool {
        self.neighbors().any(|neighbor| neighbor == target)
    }

    /// Returns the outgoing edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns the number of outgoing edges.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if this vertex has at least one outgoing edge.
    #[must_use]
    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    /// Returns an iterator over neighbor ids in edge insertion order.
    ///
    /// Every call returns a fresh, independent iterator. It runs in lockstep with
    /// [`weights`](Self::weights).
    pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.edges.iter().map(Edge::target)
    }

    /// Returns an iterator over edge weights in edge insertion order.
    ///
    /// Every call returns a fresh, independent iterator. It runs in lockstep with
    /// [`neighbors`](Self::neighbors).
    pub fn weights(&self) -> impl Iterator<Item = &W> + '_ {
        self.edges.iter().map(Edge::weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex_with_edges() -> Vertex<&'static str, u32> {
        let mut vertex = Vertex::with_capacity(VertexId::new(0), "A", 0);
        assert!(vertex.connect(VertexId::new(1), 5));
        assert!(vertex.connect(VertexId::new(2), 7));
        vertex
    }

    #[test]
    fn test_connect_rejects_self_loop() {
        let mut vertex: Vertex<&str, u32> = Vertex::with_capacity(VertexId::new(0), "A", 0);
        assert!(!vertex.connect(VertexId::new(0), 1));
        assert!(!vertex.has_edges());
    }

    #[test]
    fn test_connect_rejects_duplicate() {
        let mut vertex = vertex_with_edges();
        assert!(!vertex.connect(VertexId::new(1), 99));
        assert_eq!(vertex.out_degree(), 2);
        assert!(vertex.has_edges());
        assert_eq!(vertex.edges()[0].weight(), &5);
    }

    #[test]
    fn test_neighbor_and_weight_iterators_are_parallel() {
        let vertex = vertex_with_edges();
        let pairs: Vec<(VertexId, u32)> = vertex
            .neighbors()
            .zip(vertex.weights().copied())
            .collect();
        assert_eq!(pairs, vec![(VertexId::new(1), 5), (VertexId::new(2), 7)]);
    }

    #[test]
    fn test_iterators_are_restartable() {
        let vertex = vertex_with_edges();
        let mut first = vertex.neighbors();
        first.next();
        let second: Vec<VertexId> = vertex.neighbors().collect();
        assert_eq!(second.len(), 2);
        assert_eq!(first.next(), Some(VertexId::new(2)));
    }
}
