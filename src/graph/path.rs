//! Path query results.

/// A path found by a path query, together with its cost.
///
/// `vertices` runs from the query's begin vertex to its end vertex, both included. A query
/// whose begin and end coincide yields a single-vertex path.
///
/// The vertex type is either a [`VertexId`](crate::VertexId) (id-level algorithms) or a
/// caller label (the [`DirectedGraph`](crate::DirectedGraph) methods).
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath<V, C> {
    /// Vertices from begin to end
    pub vertices: Vec<V>,
    /// Cost of the path (hop count or summed edge cost, depending on the query)
    pub cost: C,
}

impl<V, C> GraphPath<V, C> {
    /// Returns the number of edges on the path.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Returns the first vertex of the path.
    #[must_use]
    pub fn begin(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Returns the last vertex of the path.
    #[must_use]
    pub fn end(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Converts every vertex of the path, keeping the cost.
    pub fn map_vertices<U, F>(self, f: F) -> GraphPath<U, C>
    where
        F: FnMut(V) -> U,
    {
        GraphPath {
            vertices: self.vertices.into_iter().map(f).collect(),
            cost: self.cost,
        }
    }
}
