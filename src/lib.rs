// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # routegraph
//!
//! A generic, labeled directed graph with the classic traversal and path algorithms,
//! built for small routing and dependency problems.
//!
//! ## Features
//!
//! - **Label addressing** - Vertices are identified by any `Eq + Hash + Clone` value
//! - **Weighted edges** - Arbitrary edge payloads; anything implementing [`Weight`] can be
//!   routed over
//! - **Traversals** - Breadth-first and depth-first visitation from an origin
//! - **Topological order** - Terminal-vertex elimination with cycle detection
//! - **Path search** - Fewest-hop and cheapest paths, with costs and predecessor links kept
//!   in a per-query side table
//! - **Undirected graphs** - The same engine, configured as undirected
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! routegraph = "0.1"
//! ```
//!
//! ### Building a graph
//!
//! ```rust
//! use routegraph::DirectedGraph;
//!
//! let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
//! graph.add_vertex("A");
//! graph.add_vertex("B");
//! graph.add_vertex("C");
//!
//! assert!(graph.add_edge(&"A", &"B", 1.0));
//! assert!(graph.add_edge(&"B", &"C", 2.0));
//! assert!(graph.add_edge(&"A", &"C", 10.0));
//!
//! // Rejected: duplicate edge, self-loop, unknown endpoint
//! assert!(!graph.add_edge(&"A", &"B", 5.0));
//! assert!(!graph.add_edge(&"A", &"A", 1.0));
//! assert!(!graph.add_edge(&"A", &"Z", 1.0));
//!
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//! ```
//!
//! ### Finding paths
//!
//! ```rust
//! use routegraph::DirectedGraph;
//!
//! let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
//! for label in ["A", "B", "C"] {
//!     graph.add_vertex(label);
//! }
//! graph.add_edge(&"A", &"B", 1.0);
//! graph.add_edge(&"B", &"C", 2.0);
//! graph.add_edge(&"A", &"C", 10.0);
//!
//! let cheapest = graph.cheapest_path(&"A", &"C")?;
//! assert_eq!(cheapest.vertices, vec!["A", "B", "C"]);
//! assert_eq!(cheapest.cost, 3.0);
//!
//! let fewest = graph.shortest_path(&"A", &"C")?;
//! assert_eq!(fewest.vertices, vec!["A", "C"]);
//! assert_eq!(fewest.cost, 1);
//! # Ok::<(), routegraph::Error>(())
//! ```
//!
//! ### Routes with two cost bases
//!
//! ```rust
//! use routegraph::{CostBasis, DirectedGraph, Route, RouteLeg, Weight};
//!
//! let mut graph: DirectedGraph<&str, Route> = DirectedGraph::new();
//! for label in ["Home", "Mall", "Work"] {
//!     graph.add_vertex(label);
//! }
//! let leg = |cost| RouteLeg::new(1.0, 1.0, cost);
//! graph.add_edge(&"Home", &"Work", Route::new(leg(10.0), leg(1.0)));
//! graph.add_edge(&"Home", &"Mall", Route::new(leg(2.0), leg(5.0)));
//! graph.add_edge(&"Mall", &"Work", Route::new(leg(2.0), leg(5.0)));
//!
//! let primary = graph.cheapest_path(&"Home", &"Work")?;
//! assert_eq!(primary.vertices, vec!["Home", "Mall", "Work"]);
//!
//! let alternative = graph.cheapest_path_by(&"Home", &"Work", |route: &Route| {
//!     route.by(CostBasis::Alternative).cost()
//! })?;
//! assert_eq!(alternative.vertices, vec!["Home", "Work"]);
//! # Ok::<(), routegraph::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Queries return [`Result<T, Error>`](Result). Mutations never fail; a rejected vertex or
//! edge is reported through the `bool` they return.
//!
//! ```rust
//! use routegraph::{DirectedGraph, Error};
//!
//! let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
//! graph.add_vertex("A");
//! graph.add_vertex("B");
//! graph.add_edge(&"A", &"B", 1);
//! graph.add_edge(&"B", &"A", 1);
//!
//! match graph.topological_order() {
//!     Err(Error::CycleDetected { remaining }) => assert_eq!(remaining, 2),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits diagnostics through the [`log`](https://docs.rs/log) facade: rejected
//! mutations at `debug`, per-vertex search steps at `trace`, and detected cycles or
//! rejected edge costs at `warn`. Install any logger implementation to see them.

#[macro_use]
pub(crate) mod error;

mod weight;

/// Construction-time configuration of a graph.
///
/// - [`GraphKind`] - Directed or undirected
/// - [`GraphConfig`] - Kind plus storage pre-allocation hints
pub mod config;

/// The graph engine, its building blocks and the id-level algorithms.
///
/// # Key Types
///
/// - [`graph::DirectedGraph`] - The labeled graph engine
/// - [`graph::UndirectedGraph`] - The engine configured as undirected
/// - [`graph::VertexId`] - Dense, strongly-typed vertex identifier
/// - [`graph::SearchState`] - Per-query visited flags, costs and predecessor links
/// - [`graph::GraphPath`] - Result of a path query
///
/// # Examples
///
/// ```rust
/// use routegraph::graph::{algorithms, DirectedGraph};
///
/// let mut graph: DirectedGraph<u32, ()> = DirectedGraph::new();
/// graph.add_vertex(1);
/// graph.add_vertex(2);
/// graph.add_edge(&1, &2, ());
///
/// let order = algorithms::terminal_elimination_order(&graph)?;
/// assert_eq!(order.len(), 2);
/// # Ok::<(), routegraph::Error>(())
/// ```
pub mod graph;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use routegraph::prelude::*;
///
/// let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
/// graph.add_vertex("A");
/// assert_eq!(graph.breadth_first_traversal(&"A")?, vec!["A"]);
/// # Ok::<(), Error>(())
/// ```
pub mod prelude;

/// `routegraph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use routegraph::{DirectedGraph, Result};
///
/// fn first_step(graph: &DirectedGraph<&'static str, u32>) -> Result<Vec<&'static str>> {
///     graph.depth_first_traversal(&"A")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `routegraph` Error type
///
/// The error type for all fallible queries in this crate.
///
/// # Examples
///
/// ```rust
/// use routegraph::{DirectedGraph, Error};
///
/// let graph: DirectedGraph<&str, u32> = DirectedGraph::new();
/// match graph.shortest_path(&"A", &"B") {
///     Err(Error::VertexNotFound(label)) => println!("missing {label}"),
///     Err(e) => println!("Error: {e}"),
///     Ok(path) => println!("{} hops", path.cost),
/// }
/// ```
pub use error::Error;

pub use config::{GraphConfig, GraphKind};
pub use graph::{DirectedGraph, GraphPath, UndirectedGraph, VertexId};
pub use weight::{CostBasis, Route, RouteCost, RouteLeg, Weight};
