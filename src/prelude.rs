//! # routegraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the routegraph library. Import this module to get quick access to the graph types,
//! weights and errors.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all routegraph operations
pub use crate::Error;

/// The result type used throughout routegraph
pub use crate::Result;

// ================================================================================================
// Graphs
// ================================================================================================

/// Labeled graph engines
pub use crate::graph::{DirectedGraph, UndirectedGraph};

/// Identifiers, paths and search state
pub use crate::graph::{GraphPath, SearchState, VertexId};

/// Traits for running the id-level algorithms over other graph types
pub use crate::graph::{GraphBase, Successors};

/// Graph construction options
pub use crate::config::{GraphConfig, GraphKind};

// ================================================================================================
// Weights
// ================================================================================================

/// Edge cost abstraction and the two-basis route weight
pub use crate::weight::{CostBasis, Route, RouteCost, RouteLeg, Weight};
