//! Labeled directed graph infrastructure.
//!
//! This module provides the graph engine of the crate: vertices identified by
//! caller-supplied labels, weighted one-way edges, and the traversal and path algorithms
//! that run over them.
//!
//! # Architecture
//!
//! - **Core Types**: [`VertexId`], [`Vertex`], [`Edge`] and [`VertexDirectory`] hold the
//!   vertex set, the label index and each vertex's outgoing edge list
//! - **Graphs**: [`DirectedGraph`] is the engine; [`UndirectedGraph`] is the same engine
//!   configured as undirected
//! - **Search State**: [`SearchState`] is the per-query side table of visited flags, costs
//!   and predecessor links, so queries never mutate the graph
//! - **Algorithms**: id-level traversal, ordering and path search in [`algorithms`]
//! - **Traits**: [`GraphBase`] and [`Successors`] let the algorithms run over other graph
//!   representations
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Vertices refer to one another by [`VertexId`], a newtype over a dense index, and never
//! by reference. Predecessor links, edge targets and queue entries are all ids.
//!
//! ## Insertion Order
//!
//! Vertex ids follow insertion order and edge lists keep the order edges were added in.
//! Every traversal and tie-break in this module follows those two orders, which makes all
//! results deterministic.
//!
//! # Usage Examples
//!
//! ```rust
//! use routegraph::DirectedGraph;
//!
//! // Diamond: A -> B, A -> C, B -> D, C -> D
//! let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
//! for label in ["A", "B", "C", "D"] {
//!     graph.add_vertex(label);
//! }
//! graph.add_edge(&"A", &"B", 1);
//! graph.add_edge(&"A", &"C", 1);
//! graph.add_edge(&"B", &"D", 1);
//! graph.add_edge(&"C", &"D", 1);
//!
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.edge_count(), 4);
//! assert_eq!(graph.breadth_first_traversal(&"A")?, vec!["A", "B", "C", "D"]);
//! assert_eq!(graph.depth_first_traversal(&"A")?, vec!["A", "B", "D", "C"]);
//! # Ok::<(), routegraph::Error>(())
//! ```

mod directed;
mod directory;
mod dot;
mod edge;
mod id;
mod path;
mod state;
mod traits;
mod undirected;
mod vertex;

pub mod algorithms;

pub use directed::DirectedGraph;
pub use directory::VertexDirectory;
pub use dot::escape_dot;
pub use edge::Edge;
pub use id::VertexId;
pub use path::GraphPath;
pub use state::SearchState;
pub use traits::{GraphBase, Successors};
pub use undirected::UndirectedGraph;
pub use vertex::Vertex;
