//! Core labeled graph implementation.
//!
//! This module provides [`DirectedGraph`], the graph engine behind every public operation
//! of the crate. Vertices are addressed by caller-supplied labels; internally every vertex
//! has a dense [`VertexId`] and all algorithms run on ids before the results are mapped
//! back to labels.

use std::{fmt::Debug, hash::Hash};

use log::debug;

use crate::{
    config::{GraphConfig, GraphKind},
    graph::{
        algorithms,
        traits::{GraphBase, Successors},
        GraphPath, Vertex, VertexDirectory, VertexId,
    },
    Error, Result, Weight,
};

/// A labeled, weighted directed graph.
///
/// `DirectedGraph` supports:
///
/// - Generic vertex labels (`T`) - any `Eq + Hash + Clone` value identifies a vertex
/// - Generic edge weights (`W`) - any value; path costs need [`Weight`]
/// - At most one edge per ordered vertex pair, and no self-loops
/// - Breadth-first and depth-first traversal, topological ordering, and fewest-hop and
///   cheapest path search
///
/// # Rejected Mutations
///
/// [`add_vertex`](Self::add_vertex) and [`add_edge`](Self::add_edge) never fail loudly.
/// A duplicate label, a duplicate edge, a self-loop or an edge with an unknown endpoint is
/// simply not inserted, and the call returns `false`.
///
/// # Search State
///
/// Every traversal or path query starts from a freshly cleared side table of visited
/// flags, costs and predecessors (see [`SearchState`](crate::graph::SearchState)). Queries
/// take `&self` and never alter the topology, so they are independent of one another.
///
/// # Examples
///
/// ```rust
/// use routegraph::DirectedGraph;
///
/// let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
/// for city in ["A", "B", "C"] {
///     graph.add_vertex(city);
/// }
/// graph.add_edge(&"A", &"B", 1.0);
/// graph.add_edge(&"B", &"C", 2.0);
/// graph.add_edge(&"A", &"C", 10.0);
///
/// let path = graph.cheapest_path(&"A", &"C")?;
/// assert_eq!(path.vertices, vec!["A", "B", "C"]);
/// assert_eq!(path.cost, 3.0);
/// # Ok::<(), routegraph::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<T, W> {
    /// Owner of all vertices and their edge lists
    directory: VertexDirectory<T, W>,
    /// Sum of all out-degrees, maintained on successful insertion
    edge_count: usize,
    config: GraphConfig,
}

impl<T, W> Default for DirectedGraph<T, W> {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<T, W> DirectedGraph<T, W> {
    /// Creates a new empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty graph with the given configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use routegraph::{DirectedGraph, GraphConfig, GraphKind};
    ///
    /// let graph: DirectedGraph<u32, u32> =
    ///     DirectedGraph::with_config(GraphConfig::directed().with_capacity(100, 4));
    /// assert_eq!(graph.kind(), GraphKind::Directed);
    /// assert!(graph.is_empty());
    /// ```
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        DirectedGraph {
            directory: VertexDirectory::with_capacity(
                config.vertex_capacity,
                config.edge_capacity,
            ),
            edge_count: 0,
            config,
        }
    }

    /// Returns the configuration this graph was created with.
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns whether this graph is treated as directed or undirected.
    #[must_use]
    pub fn kind(&self) -> GraphKind {
        self.config.kind
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.directory.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    /// Removes every vertex and edge. The configuration is kept.
    pub fn clear(&mut self) {
        self.directory.clear();
        self.edge_count = 0;
    }

    /// Returns the vertex with the given id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T, W>> {
        self.directory.get(id)
    }

    /// Returns the label of the vertex with the given id.
    #[must_use]
    pub fn label(&self, id: VertexId) -> Option<&T> {
        self.directory.get(id).map(Vertex::label)
    }

    /// Iterates over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T, W>> + '_ {
        self.directory.vertices()
    }

    /// Returns the underlying label to vertex directory.
    #[must_use]
    pub fn directory(&self) -> &VertexDirectory<T, W> {
        &self.directory
    }
}

impl<T: Eq + Hash + Clone, W> DirectedGraph<T, W> {
    /// Adds a vertex labeled `label`.
    ///
    /// # Returns
    ///
    /// `true` if the vertex was inserted, `false` if a vertex with this label already
    /// exists (the graph is unchanged).
    pub fn add_vertex(&mut self, label: T) -> bool {
        match self.directory.insert(label) {
            Some(id) => {
                debug!("added vertex {id}");
                true
            }
            None => {
                debug!("rejected vertex: label already present");
                false
            }
        }
    }

    /// Adds an edge from `begin` to `end` carrying `weight`.
    ///
    /// # Returns
    ///
    /// `true` if the edge was inserted. `false` if either endpoint is unknown, if
    /// `begin == end`, or if the edge already exists; the graph is then unchanged and
    /// `weight` is dropped.
    pub fn add_edge(&mut self, begin: &T, end: &T, weight: W) -> bool {
        let (Some(source), Some(target)) = (self.directory.id_of(begin), self.directory.id_of(end))
        else {
            debug!("rejected edge: missing endpoint");
            return false;
        };

        let added = self
            .directory
            .get_mut(source)
            .is_some_and(|vertex| vertex.connect(target, weight));

        if added {
            self.edge_count += 1;
        } else {
            debug!("rejected edge {source} -> {target}: self-loop or duplicate");
        }
        added
    }

    /// Returns true if an edge from `begin` to `end` exists.
    ///
    /// Returns `false` if either endpoint is unknown.
    #[must_use]
    pub fn has_edge(&self, begin: &T, end: &T) -> bool {
        match (self.directory.lookup(begin), self.directory.id_of(end)) {
            (Some(source), Some(target)) => source.has_edge_to(target),
            _ => false,
        }
    }

    /// Returns true if a vertex labeled `label` exists.
    #[must_use]
    pub fn contains_vertex(&self, label: &T) -> bool {
        self.directory.id_of(label).is_some()
    }

    /// Resolves a label to its vertex id.
    #[must_use]
    pub fn vertex_id(&self, label: &T) -> Option<VertexId> {
        self.directory.id_of(label)
    }

    /// Maps vertex ids produced by an algorithm back to owned labels.
    fn labels_of(&self, ids: Vec<VertexId>) -> Vec<T> {
        ids.into_iter()
            .map(|id| self.directory.label_at(id).clone())
            .collect()
    }

    fn path_labels<C>(&self, path: GraphPath<VertexId, C>) -> GraphPath<T, C> {
        path.map_vertices(|id| self.directory.label_at(id).clone())
    }
}

impl<T: Eq + Hash + Clone + Debug, W> DirectedGraph<T, W> {
    fn require(&self, label: &T) -> Result<VertexId> {
        self.directory
            .id_of(label)
            .ok_or_else(|| vertex_not_found!(label))
    }

    /// Returns the labels reachable from `origin` in breadth-first order.
    ///
    /// `origin` comes first; each reachable vertex appears exactly once; neighbors are
    /// taken in edge insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `origin` is not a vertex.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use routegraph::DirectedGraph;
    ///
    /// let mut graph: DirectedGraph<char, u8> = DirectedGraph::new();
    /// for c in ['A', 'B', 'C', 'D'] {
    ///     graph.add_vertex(c);
    /// }
    /// graph.add_edge(&'A', &'B', 1);
    /// graph.add_edge(&'A', &'C', 1);
    /// graph.add_edge(&'B', &'D', 1);
    ///
    /// assert_eq!(graph.breadth_first_traversal(&'A')?, vec!['A', 'B', 'C', 'D']);
    /// # Ok::<(), routegraph::Error>(())
    /// ```
    pub fn breadth_first_traversal(&self, origin: &T) -> Result<Vec<T>> {
        let start = self.require(origin)?;
        Ok(self.labels_of(algorithms::bfs_ids(self, start)))
    }

    /// Returns the labels reachable from `origin` in depth-first (pre-)order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `origin` is not a vertex.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use routegraph::DirectedGraph;
    ///
    /// let mut graph: DirectedGraph<char, u8> = DirectedGraph::new();
    /// for c in ['A', 'B', 'C', 'D'] {
    ///     graph.add_vertex(c);
    /// }
    /// graph.add_edge(&'A', &'B', 1);
    /// graph.add_edge(&'A', &'C', 1);
    /// graph.add_edge(&'B', &'D', 1);
    ///
    /// assert_eq!(graph.depth_first_traversal(&'A')?, vec!['A', 'B', 'D', 'C']);
    /// # Ok::<(), routegraph::Error>(())
    /// ```
    pub fn depth_first_traversal(&self, origin: &T) -> Result<Vec<T>> {
        let start = self.require(origin)?;
        Ok(self.labels_of(algorithms::dfs_ids(self, start)))
    }

    /// Returns all labels in topological order.
    ///
    /// For every edge `u -> v`, `u` precedes `v` in the result. The order is computed by
    /// repeatedly eliminating terminal vertices (see
    /// [`terminal_elimination_order`](algorithms::terminal_elimination_order)).
    ///
    /// # Errors
    ///
    /// - [`Error::Unsupported`] if the graph is undirected
    /// - [`Error::CycleDetected`] if the graph contains a cycle
    pub fn topological_order(&self) -> Result<Vec<T>> {
        if self.config.is_undirected() {
            return Err(Error::Unsupported(
                "there is no topological ordering for undirected graphs",
            ));
        }

        let order = algorithms::terminal_elimination_order(self)?;
        Ok(self.labels_of(order))
    }

    /// Finds a path from `begin` to `end` with the fewest edges.
    ///
    /// The returned cost is the number of edges on the path.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if `begin` or `end` is not a vertex
    /// - [`Error::Unreachable`] if `end` cannot be reached from `begin`
    pub fn shortest_path(&self, begin: &T, end: &T) -> Result<GraphPath<T, usize>> {
        let (source, target) = (self.require(begin)?, self.require(end)?);
        let path = algorithms::hop_shortest_path(self, source, target)?;
        Ok(self.path_labels(path))
    }

    /// Finds a path from `begin` to `end` with the lowest total cost, using `cost` to
    /// turn each edge weight into a scalar.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if `begin` or `end` is not a vertex
    /// - [`Error::Unreachable`] if `end` cannot be reached from `begin`
    /// - [`Error::InvalidWeight`] if a negative or non-finite edge cost is met
    ///
    /// # Examples
    ///
    /// ```rust
    /// use routegraph::{CostBasis, DirectedGraph, Route, RouteLeg, Weight};
    ///
    /// let mut graph: DirectedGraph<&str, Route> = DirectedGraph::new();
    /// graph.add_vertex("Lisboa");
    /// graph.add_vertex("Porto");
    /// graph.add_edge(
    ///     &"Lisboa",
    ///     &"Porto",
    ///     Route::new(RouteLeg::new(313.0, 180.0, 22.0), RouteLeg::new(300.0, 240.0, 0.0)),
    /// );
    ///
    /// let path = graph.cheapest_path_by(&"Lisboa", &"Porto", |route| {
    ///     route.by(CostBasis::Alternative).cost()
    /// })?;
    /// assert_eq!(path.cost, 0.0);
    /// # Ok::<(), routegraph::Error>(())
    /// ```
    pub fn cheapest_path_by<F>(&self, begin: &T, end: &T, cost: F) -> Result<GraphPath<T, f64>>
    where
        F: Fn(&W) -> f64,
    {
        let (source, target) = (self.require(begin)?, self.require(end)?);
        let path = algorithms::cheapest_path_by(self, source, target, cost)?;
        Ok(self.path_labels(path))
    }
}

impl<T: Eq + Hash + Clone + Debug, W: Weight> DirectedGraph<T, W> {
    /// Finds a path from `begin` to `end` with the lowest total [`Weight::cost`].
    ///
    /// A trivial query (`begin == end`) succeeds with cost 0, which is distinct from the
    /// [`Error::Unreachable`] failure.
    ///
    /// # Errors
    ///
    /// - [`Error::VertexNotFound`] if `begin` or `end` is not a vertex
    /// - [`Error::Unreachable`] if `end` cannot be reached from `begin`
    /// - [`Error::InvalidWeight`] if a negative or non-finite edge cost is met
    pub fn cheapest_path(&self, begin: &T, end: &T) -> Result<GraphPath<T, f64>> {
        self.cheapest_path_by(begin, end, W::cost)
    }
}

impl<T, W> GraphBase for DirectedGraph<T, W> {
    fn vertex_count(&self) -> usize {
        self.directory.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        self.directory.ids()
    }
}

impl<T, W> Successors for DirectedGraph<T, W> {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.directory
            .get(vertex)
            .into_iter()
            .flat_map(Vertex::neighbors)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{GraphConfig, GraphKind},
        graph::{
            directed::DirectedGraph,
            traits::{GraphBase, Successors},
            VertexId,
        },
        Error,
    };

    /// Creates A -> B (1), B -> C (2), A -> C (10)
    fn create_triangle_graph() -> DirectedGraph<&'static str, f64> {
        let mut graph = DirectedGraph::new();
        for label in ["A", "B", "C"] {
            assert!(graph.add_vertex(label));
        }
        assert!(graph.add_edge(&"A", &"B", 1.0));
        assert!(graph.add_edge(&"B", &"C", 2.0));
        assert!(graph.add_edge(&"A", &"C", 10.0));
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: DirectedGraph<&str, f64> = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.kind(), GraphKind::Directed);
    }

    #[test]
    fn test_add_vertex_rejects_duplicate() {
        let mut graph: DirectedGraph<String, f64> = DirectedGraph::new();
        assert!(graph.add_vertex("A".to_string()));
        assert!(!graph.add_vertex("A".to_string()));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_add_edge_rejections() {
        let mut graph = create_triangle_graph();

        // duplicate
        assert!(!graph.add_edge(&"A", &"B", 5.0));
        // self-loop
        assert!(!graph.add_edge(&"A", &"A", 1.0));
        // missing endpoints
        assert!(!graph.add_edge(&"A", &"Z", 1.0));
        assert!(!graph.add_edge(&"Z", &"A", 1.0));

        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_edge_count_matches_out_degrees() {
        let graph = create_triangle_graph();
        let total: usize = graph.vertices().map(|v| v.out_degree()).sum();
        assert_eq!(graph.edge_count(), total);
    }

    #[test]
    fn test_has_edge() {
        let graph = create_triangle_graph();
        assert!(graph.has_edge(&"A", &"B"));
        assert!(!graph.has_edge(&"B", &"A"));
        assert!(!graph.has_edge(&"A", &"Z"));
        assert!(!graph.has_edge(&"Z", &"A"));
    }

    #[test]
    fn test_clear() {
        let mut graph = create_triangle_graph();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.has_edge(&"A", &"B"));
    }

    #[test]
    fn test_clear_keeps_config() {
        let mut graph: DirectedGraph<u32, u32> =
            DirectedGraph::with_config(GraphConfig::undirected());
        graph.add_vertex(1);
        graph.clear();
        assert_eq!(graph.kind(), GraphKind::Undirected);
    }

    #[test]
    fn test_labels_and_ids() {
        let graph = create_triangle_graph();
        assert_eq!(graph.vertex_id(&"B"), Some(VertexId::new(1)));
        assert_eq!(graph.label(VertexId::new(2)), Some(&"C"));
        assert_eq!(graph.label(VertexId::new(3)), None);
        assert!(graph.contains_vertex(&"A"));
        assert!(!graph.contains_vertex(&"Q"));
    }

    #[test]
    fn test_trait_impls() {
        let graph = create_triangle_graph();
        assert_eq!(GraphBase::vertex_count(&graph), 3);
        let succ: Vec<VertexId> = graph.successors(VertexId::new(0)).collect();
        assert_eq!(succ, vec![VertexId::new(1), VertexId::new(2)]);
        assert_eq!(graph.successors(VertexId::new(42)).count(), 0);
    }

    #[test]
    fn test_breadth_first_traversal() {
        let graph = create_triangle_graph();
        assert_eq!(graph.breadth_first_traversal(&"A"), Ok(vec!["A", "B", "C"]));
        assert_eq!(graph.breadth_first_traversal(&"C"), Ok(vec!["C"]));
    }

    #[test]
    fn test_depth_first_traversal() {
        let graph = create_triangle_graph();
        assert_eq!(graph.depth_first_traversal(&"A"), Ok(vec!["A", "B", "C"]));
    }

    #[test]
    fn test_traversal_unknown_origin() {
        let graph = create_triangle_graph();
        assert_eq!(
            graph.breadth_first_traversal(&"Z"),
            Err(Error::VertexNotFound("\"Z\"".to_string()))
        );
        assert!(matches!(
            graph.depth_first_traversal(&"Z"),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_topological_order() {
        let graph = create_triangle_graph();
        assert_eq!(graph.topological_order(), Ok(vec!["A", "B", "C"]));
    }

    #[test]
    fn test_topological_order_rejected_for_undirected() {
        let mut graph: DirectedGraph<&str, f64> =
            DirectedGraph::with_config(GraphConfig::undirected());
        graph.add_vertex("A");
        assert!(matches!(
            graph.topological_order(),
            Err(Error::Unsupported(_))
        ));
    }

    #[test]
    fn test_shortest_path_cost_is_hop_count() {
        let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
        for label in ["A", "B", "C"] {
            graph.add_vertex(label);
        }
        graph.add_edge(&"A", &"B", 1.0);
        graph.add_edge(&"B", &"C", 2.0);

        let path = graph.shortest_path(&"A", &"C").unwrap();
        assert_eq!(path.vertices, vec!["A", "B", "C"]);
        assert_eq!(path.cost, 2);
        assert_eq!(path.cost, path.hops());
    }

    #[test]
    fn test_cheapest_path() {
        let graph = create_triangle_graph();
        let path = graph.cheapest_path(&"A", &"C").unwrap();
        assert_eq!(path.vertices, vec!["A", "B", "C"]);
        assert_eq!(path.cost, 3.0);
    }

    #[test]
    fn test_cheapest_path_by_custom_cost() {
        let graph = create_triangle_graph();
        let path = graph.cheapest_path_by(&"A", &"C", |w| 20.0 - w).unwrap();
        assert_eq!(path.vertices, vec!["A", "C"]);
        assert_eq!(path.cost, 10.0);
    }

    #[test]
    fn test_path_queries_unknown_vertex() {
        let graph = create_triangle_graph();
        assert!(matches!(
            graph.shortest_path(&"A", &"Z"),
            Err(Error::VertexNotFound(_))
        ));
        assert!(matches!(
            graph.cheapest_path(&"Z", &"A"),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_queries_are_independent() {
        let graph = create_triangle_graph();
        let first = graph.cheapest_path(&"A", &"C").unwrap();
        let _ = graph.depth_first_traversal(&"B").unwrap();
        let second = graph.cheapest_path(&"A", &"C").unwrap();
        assert_eq!(first, second);
    }
}
