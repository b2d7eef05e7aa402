//! Per-search bookkeeping kept apart from the graph topology.
//!
//! Every traversal and path query needs to remember, for each vertex, whether it has been
//! visited, the cost of the best path found to it, and the vertex it was reached from.
//! [`SearchState`] holds those three fields in a side table indexed by [`VertexId`], so the
//! vertices themselves stay immutable during a search and a graph can serve any number of
//! read-only queries between mutations.
//!
//! Every search creates its own table with [`SearchState::new`] for the graph's current
//! vertex count; a table is never carried over from one search to the next.

use crate::graph::VertexId;

/// Transient search fields for one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
struct VertexState<C> {
    visited: bool,
    cost: Option<C>,
    predecessor: Option<VertexId>,
}

impl<C> Default for VertexState<C> {
    fn default() -> Self {
        VertexState {
            visited: false,
            cost: None,
            predecessor: None,
        }
    }
}

/// Side table of visited flags, path costs and predecessor links.
///
/// `C` is the cost type tracked by the search (`usize` hop counts for shortest path,
/// `f64` sums for cheapest path, `()` for plain traversals).
///
/// Setters perform no validation. Querying an id outside the table reports it as
/// unvisited with no cost and no predecessor.
#[derive(Debug, Clone)]
pub struct SearchState<C> {
    entries: Vec<VertexState<C>>,
}

impl<C: Copy> SearchState<C> {
    /// Creates a cleared table for a graph with `vertex_count` vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        SearchState {
            entries: vec![VertexState::default(); vertex_count],
        }
    }

    /// Returns the number of vertices tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table tracks no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Marks `vertex` as visited.
    pub fn visit(&mut self, vertex: VertexId) {
        if let Some(entry) = self.entries.get_mut(vertex.index()) {
            entry.visited = true;
        }
    }

    /// Returns true if `vertex` has been visited in the current search.
    #[must_use]
    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.entries
            .get(vertex.index())
            .is_some_and(|entry| entry.visited)
    }

    /// Sets (or clears, with `None`) the path cost recorded for `vertex`.
    pub fn set_cost(&mut self, vertex: VertexId, cost: Option<C>) {
        if let Some(entry) = self.entries.get_mut(vertex.index()) {
            entry.cost = cost;
        }
    }

    /// Returns the path cost recorded for `vertex`, if any.
    #[must_use]
    pub fn cost(&self, vertex: VertexId) -> Option<C> {
        self.entries.get(vertex.index()).and_then(|entry| entry.cost)
    }

    /// Sets (or clears, with `None`) the predecessor of `vertex` on its best-known path.
    pub fn set_predecessor(&mut self, vertex: VertexId, predecessor: Option<VertexId>) {
        if let Some(entry) = self.entries.get_mut(vertex.index()) {
            entry.predecessor = predecessor;
        }
    }

    /// Returns the predecessor of `vertex` on its best-known path, if any.
    #[must_use]
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.entries
            .get(vertex.index())
            .and_then(|entry| entry.predecessor)
    }

    /// Returns true if `vertex` has a recorded predecessor.
    #[must_use]
    pub fn has_predecessor(&self, vertex: VertexId) -> bool {
        self.predecessor(vertex).is_some()
    }

    /// Returns the number of visited vertices.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.visited).count()
    }

    /// Follows predecessor links from `end` and returns the chain ordered origin first.
    ///
    /// The chain always contains `end` itself. Links are followed at most
    /// [`len`](Self::len) times, so a corrupted table cannot loop forever.
    #[must_use]
    pub fn predecessor_chain(&self, end: VertexId) -> Vec<VertexId> {
        // Walking back from `end` pushes in end -> origin order, like a stack
        let mut chain = vec![end];
        let mut current = end;
        while let Some(previous) = self.predecessor(current) {
            if chain.len() > self.entries.len() {
                break;
            }
            chain.push(previous);
            current = previous;
        }
        chain.reverse();
        chain
    }
}
