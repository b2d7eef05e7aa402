//! Graph construction configuration.
//!
//! This module provides the options a graph is built with: whether it is treated as
//! directed or undirected, and how much storage to reserve up front.

use strum::{Display, EnumIter};

/// Whether a graph's edges are interpreted as directed.
///
/// Both kinds share the same storage and algorithms. The only behavioral difference is
/// that an undirected graph rejects topological ordering, which is undefined for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum GraphKind {
    /// Edges run from their begin vertex to their end vertex
    #[default]
    Directed,
    /// Same edge storage as `Directed`; topological ordering is rejected
    Undirected,
}

/// Configuration for graph construction
///
/// Capacities are hints only; a graph grows past them as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    /// Directed or undirected interpretation of the graph (default: directed)
    pub kind: GraphKind,

    /// Number of vertices to reserve storage for (default: 0)
    pub vertex_capacity: usize,

    /// Number of outgoing edges to reserve per vertex (default: 0)
    pub edge_capacity: usize,
}

impl GraphConfig {
    /// Creates the configuration for a directed graph without pre-allocation
    #[must_use]
    pub fn directed() -> Self {
        Self::default()
    }

    /// Creates the configuration for an undirected graph without pre-allocation
    #[must_use]
    pub fn undirected() -> Self {
        Self {
            kind: GraphKind::Undirected,
            ..Self::default()
        }
    }

    /// Returns this configuration with the given capacity hints
    ///
    /// `edges` is the expected out-degree of a typical vertex.
    #[must_use]
    pub fn with_capacity(self, vertices: usize, edges: usize) -> Self {
        Self {
            vertex_capacity: vertices,
            edge_capacity: edges,
            ..self
        }
    }

    /// Returns true if this configuration describes an undirected graph
    #[must_use]
    pub fn is_undirected(&self) -> bool {
        self.kind == GraphKind::Undirected
    }
}
