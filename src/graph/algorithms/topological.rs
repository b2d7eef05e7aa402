//! Topological ordering by terminal-vertex elimination.
//!
//! The order is built back to front. Each round scans all vertices, in insertion order,
//! for a *terminal* vertex: one that is not yet placed and whose successors have all been
//! placed already (a vertex without outgoing edges always qualifies). That vertex is
//! placed and the scan starts over. Reading the placements in reverse yields an order in
//! which every edge `u -> v` has `u` before `v`.
//!
//! A cyclic graph eventually leaves a round in which no terminal vertex exists. That
//! round fails with [`Error::CycleDetected`] instead of looping.

use log::{debug, trace, warn};

use crate::{
    graph::{algorithms::unvisited_successor, SearchState, Successors, VertexId},
    Error, Result,
};

/// Finds the first unplaced vertex, in insertion order, whose successors are all placed.
fn find_terminal<G: Successors>(graph: &G, placed: &SearchState<()>) -> Option<VertexId> {
    graph.vertex_ids().find(|&vertex| {
        !placed.is_visited(vertex) && unvisited_successor(graph, placed, vertex).is_none()
    })
}

/// Computes a topological ordering of all vertices of `graph`.
///
/// # Arguments
///
/// * `graph` - The graph to order
///
/// # Returns
///
/// Every vertex exactly once, ordered so that for each edge `u -> v`, `u` comes before
/// `v`. Among vertices without a mutual constraint the result is deterministic: the
/// terminal scan always picks the earliest-inserted candidate.
///
/// # Errors
///
/// Returns [`Error::CycleDetected`] if the graph contains a cycle.
///
/// # Complexity
///
/// - Time: O(V · (V + E)), one full scan per placed vertex
/// - Space: O(V)
pub fn terminal_elimination_order<G: Successors>(graph: &G) -> Result<Vec<VertexId>> {
    let vertex_count = graph.vertex_count();
    let mut placed: SearchState<()> = SearchState::new(vertex_count);

    // Terminal vertices come out sink first, like pushes onto a stack
    let mut stack = Vec::with_capacity(vertex_count);

    for _ in 0..vertex_count {
        let Some(terminal) = find_terminal(graph, &placed) else {
            let remaining = vertex_count - stack.len();
            warn!("topological order stalled with {remaining} vertices left; graph has a cycle");
            return Err(Error::CycleDetected { remaining });
        };

        trace!("topological: terminal vertex {terminal}");
        placed.visit(terminal);
        stack.push(terminal);
    }

    stack.reverse();
    debug!("topological order over {vertex_count} vertices");
    Ok(stack)
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{algorithms::topological::terminal_elimination_order, DirectedGraph, VertexId},
        Error,
    };

    fn position(order: &[VertexId], vertex: usize) -> usize {
        order
            .iter()
            .position(|&v| v == VertexId::new(vertex))
            .unwrap()
    }

    #[test]
    fn test_empty_graph() {
        let graph: DirectedGraph<u32, u32> = DirectedGraph::new();
        assert_eq!(terminal_elimination_order(&graph), Ok(Vec::new()));
    }

    #[test]
    fn test_single_vertex() {
        let mut graph: DirectedGraph<u32, u32> = DirectedGraph::new();
        graph.add_vertex(7);
        assert_eq!(terminal_elimination_order(&graph), Ok(vec![VertexId::new(0)]));
    }

    #[test]
    fn test_linear_chain() {
        let mut graph: DirectedGraph<u32, u32> = DirectedGraph::new();
        for i in 0..4 {
            graph.add_vertex(i);
        }
        graph.add_edge(&2, &3, 1);
        graph.add_edge(&1, &2, 1);
        graph.add_edge(&0, &1, 1);

        let order = terminal_elimination_order(&graph).unwrap();
        let expected: Vec<VertexId> = (0..4).map(VertexId::new).collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_diamond_constraints() {
        let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
        for label in ["A", "B", "C", "D"] {
            graph.add_vertex(label);
        }
        graph.add_edge(&"A", &"B", 1);
        graph.add_edge(&"A", &"C", 1);
        graph.add_edge(&"B", &"D", 1);
        graph.add_edge(&"C", &"D", 1);

        let order = terminal_elimination_order(&graph).unwrap();
        assert_eq!(order.len(), 4);
        assert!(position(&order, 0) < position(&order, 1));
        assert!(position(&order, 0) < position(&order, 2));
        assert!(position(&order, 1) < position(&order, 3));
        assert!(position(&order, 2) < position(&order, 3));
    }

    #[test]
    fn test_tie_break_follows_insertion_order() {
        // No edges: vertices are eliminated in insertion order, so the order is reversed
        let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
        for label in ["A", "B", "C"] {
            graph.add_vertex(label);
        }

        let order = terminal_elimination_order(&graph).unwrap();
        assert_eq!(
            order,
            vec![VertexId::new(2), VertexId::new(1), VertexId::new(0)]
        );
    }

    #[test]
    fn test_two_cycle_is_detected() {
        let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.add_edge(&"A", &"B", 1);
        graph.add_edge(&"B", &"A", 1);

        assert_eq!(
            terminal_elimination_order(&graph),
            Err(Error::CycleDetected { remaining: 2 })
        );
    }

    #[test]
    fn test_partial_cycle_is_detected() {
        // A -> B -> C -> D -> B, E has no edges
        let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
        for label in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(label);
        }
        graph.add_edge(&"A", &"B", 1);
        graph.add_edge(&"B", &"C", 1);
        graph.add_edge(&"C", &"D", 1);
        graph.add_edge(&"D", &"B", 1);

        // E is placed before the scan stalls on A, B, C, D
        assert_eq!(
            terminal_elimination_order(&graph),
            Err(Error::CycleDetected { remaining: 4 })
        );
    }
}
