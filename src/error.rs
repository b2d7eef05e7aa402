use thiserror::Error;

macro_rules! vertex_not_found {
    // Label with a Debug rendering
    ($label:expr) => {
        crate::Error::VertexNotFound(format!("{:?}", $label))
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::VertexNotFound(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Mutations that are merely rejected (a duplicate vertex label, a duplicate edge, a self-loop
/// or an edge with a missing endpoint) are not errors: they are reported through the `bool`
/// returned by [`DirectedGraph::add_vertex`](crate::DirectedGraph::add_vertex) and
/// [`DirectedGraph::add_edge`](crate::DirectedGraph::add_edge). This enum only covers the
/// conditions under which a traversal or path query cannot produce a result.
///
/// # Error Categories
///
/// ## Precondition Violations
/// - [`Error::VertexNotFound`] - An origin, begin or end label is not in the graph
/// - [`Error::Unsupported`] - The operation is not defined for this kind of graph
///
/// ## Search Failures
/// - [`Error::CycleDetected`] - Topological ordering was requested on a cyclic graph
/// - [`Error::Unreachable`] - No path connects the requested vertices
/// - [`Error::InvalidWeight`] - A negative or non-finite edge cost was met during cheapest-path search
///
/// # Examples
///
/// ```rust
/// use routegraph::{DirectedGraph, Error};
///
/// let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
/// graph.add_vertex("A");
/// graph.add_vertex("X");
///
/// match graph.cheapest_path(&"A", &"X") {
///     Ok(path) => println!("cost {}", path.cost),
///     Err(Error::Unreachable) => println!("no route"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A label passed to a traversal or path query does not name a vertex.
    ///
    /// The payload is the `Debug` rendering of the missing label.
    #[error("Vertex not found - {0}")]
    VertexNotFound(String),

    /// The graph contains a cycle, so no topological order exists.
    ///
    /// Detected when a full scan over the remaining vertices finds no terminal vertex.
    ///
    /// # Fields
    ///
    /// * `remaining` - Number of vertices that could not be placed in the order
    #[error("Graph contains a cycle - {remaining} vertices could not be ordered")]
    CycleDetected {
        /// Number of vertices left unordered when the scan stalled
        remaining: usize,
    },

    /// The destination vertex cannot be reached from the origin.
    #[error("Destination is unreachable from origin")]
    Unreachable,

    /// The operation is not defined for this kind of graph.
    ///
    /// Raised by topological ordering on an undirected graph.
    #[error("Operation not supported - {0}")]
    Unsupported(&'static str),

    /// An edge weight exposed a negative or non-finite cost during cheapest-path search.
    ///
    /// # Fields
    ///
    /// * `cost` - The offending scalar cost
    #[error("Invalid edge cost {cost} - costs must be finite and non-negative")]
    InvalidWeight {
        /// The offending scalar cost
        cost: f64,
    },
}
