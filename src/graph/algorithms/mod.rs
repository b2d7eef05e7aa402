//! Id-level graph algorithms.
//!
//! These functions work on [`VertexId`](crate::VertexId)s and are what the label-level
//! methods of [`DirectedGraph`](crate::DirectedGraph) are built on. The traversal,
//! ordering and hop-count functions accept any graph implementing
//! [`Successors`](crate::graph::Successors).
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`bfs_ids`] - Breadth-first visitation order
//! - [`dfs_ids`] - Depth-first visitation order (explicit stack)
//! - [`unvisited_successor`] - First unvisited successor, the step shared by DFS and
//!   topological ordering
//!
//! ## Topological Ordering
//!
//! - [`terminal_elimination_order`] - Repeated terminal-vertex elimination with cycle detection
//!
//! ## Path Search
//!
//! - [`hop_shortest_path`] - Fewest edges (BFS)
//! - [`cheapest_path_by`] - Lowest total edge cost (Dijkstra-style, lazy deletion)
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS/DFS | O(V + E) | Reachability, visitation order |
//! | Terminal elimination | O(V · (V + E)) | Dependency ordering of small DAGs |
//! | Hop shortest path | O(V + E) | Fewest transfers |
//! | Cheapest path | O(E log E) | Weighted routing with non-negative costs |
//!
//! # Examples
//!
//! ```rust
//! use routegraph::{DirectedGraph, graph::algorithms};
//!
//! let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
//! graph.add_vertex("A");
//! graph.add_vertex("B");
//! graph.add_edge(&"A", &"B", 4);
//!
//! let a = graph.vertex_id(&"A").unwrap();
//! let order = algorithms::bfs_ids(&graph, a);
//! assert_eq!(order.len(), 2);
//! ```

mod paths;
mod topological;
mod traversal;

pub use paths::{cheapest_path_by, hop_shortest_path};
pub use topological::terminal_elimination_order;
pub use traversal::{bfs_ids, dfs_ids, unvisited_successor};
