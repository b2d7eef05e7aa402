//! Undirected specialization of the graph engine.

use std::ops::{Deref, DerefMut};

use crate::{config::GraphConfig, graph::DirectedGraph};

/// A graph of kind [`GraphKind::Undirected`](crate::GraphKind::Undirected).
///
/// `UndirectedGraph` is the shared engine created with an undirected configuration and
/// dereferences to it for every operation. Storage, insertion rules and algorithms are
/// exactly those of [`DirectedGraph`]; the one difference is that
/// [`topological_order`](DirectedGraph::topological_order) fails with
/// [`Error::Unsupported`](crate::Error::Unsupported), since undirected graphs have no
/// topological ordering.
///
/// # Examples
///
/// ```rust
/// use routegraph::{Error, UndirectedGraph};
///
/// let mut graph: UndirectedGraph<&str, u32> = UndirectedGraph::new();
/// graph.add_vertex("A");
/// graph.add_vertex("B");
/// graph.add_edge(&"A", &"B", 3);
///
/// assert_eq!(graph.breadth_first_traversal(&"A")?, vec!["A", "B"]);
/// assert!(matches!(graph.topological_order(), Err(Error::Unsupported(_))));
/// # Ok::<(), routegraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph<T, W> {
    inner: DirectedGraph<T, W>,
}

impl<T, W> Default for UndirectedGraph<T, W> {
    fn default() -> Self {
        UndirectedGraph {
            inner: DirectedGraph::with_config(GraphConfig::undirected()),
        }
    }
}

impl<T, W> UndirectedGraph<T, W> {
    /// Creates a new empty undirected graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty undirected graph with pre-allocated storage.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        UndirectedGraph {
            inner: DirectedGraph::with_config(
                GraphConfig::undirected().with_capacity(vertex_capacity, edge_capacity),
            ),
        }
    }

    /// Consumes the wrapper and returns the underlying engine (still undirected).
    #[must_use]
    pub fn into_inner(self) -> DirectedGraph<T, W> {
        self.inner
    }
}

impl<T, W> Deref for UndirectedGraph<T, W> {
    type Target = DirectedGraph<T, W>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T, W> DerefMut for UndirectedGraph<T, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
