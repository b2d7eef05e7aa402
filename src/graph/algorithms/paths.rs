//! Path search between two vertices.
//!
//! - [`hop_shortest_path`] - Fewest edges, found by a breadth-first search that stops as
//!   soon as the destination is discovered
//! - [`cheapest_path_by`] - Lowest summed edge cost, found by a Dijkstra-style search over
//!   a min-priority queue
//!
//! Both searches record costs and predecessor links in a [`SearchState`] and rebuild the
//! path by walking the predecessor chain back from the destination.
//!
//! # Cheapest-path queue discipline
//!
//! The queue holds one entry per *candidate* path rather than one per vertex: a vertex is
//! pushed again every time a cheaper-looking route to it is found, and there is no
//! decrease-key. The first entry popped for a vertex carries its lowest cost and finalizes
//! it; any later entry for an already visited vertex is stale and is discarded on pop.

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, VecDeque},
};

use log::{debug, trace, warn};

use crate::{
    graph::{DirectedGraph, GraphPath, SearchState, Successors, VertexId},
    Error, Result,
};

/// A candidate path to `vertex` waiting in the priority queue.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    /// Total cost of the candidate path
    cost: f64,
    /// Push order; breaks cost ties first-in first-out
    sequence: u64,
    vertex: VertexId,
    predecessor: Option<VertexId>,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Checks that an edge cost, or a path sum built from edge costs, is finite and
/// non-negative.
fn validate_cost(cost: f64) -> Result<f64> {
    if cost.is_finite() && cost >= 0.0 {
        Ok(cost)
    } else {
        warn!("rejecting cost {cost} in cheapest path search");
        Err(Error::InvalidWeight { cost })
    }
}

/// Finds a path from `begin` to `end` with the fewest edges.
///
/// Runs a breadth-first search from `begin`. Each newly discovered vertex records its
/// discoverer as predecessor and the discoverer's hop count plus one as its cost; the
/// search stops as soon as `end` is discovered.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `begin` - The origin vertex
/// * `end` - The destination vertex
///
/// # Returns
///
/// The path from `begin` to `end` and its length in edges. When `begin == end` the path
/// is `[begin]` with cost 0.
///
/// # Errors
///
/// Returns [`Error::VertexNotFound`] if either id is not a vertex of `graph`, or
/// [`Error::Unreachable`] if no path exists.
pub fn hop_shortest_path<G: Successors>(
    graph: &G,
    begin: VertexId,
    end: VertexId,
) -> Result<GraphPath<VertexId, usize>> {
    let vertex_count = graph.vertex_count();
    for vertex in [begin, end] {
        if vertex.index() >= vertex_count {
            return Err(vertex_not_found!("{}", vertex));
        }
    }

    let mut state: SearchState<usize> = SearchState::new(vertex_count);
    let mut queue = VecDeque::new();

    state.visit(begin);
    state.set_cost(begin, Some(0));
    queue.push_back(begin);

    let mut done = begin == end;
    while !done {
        let Some(front) = queue.pop_front() else {
            break;
        };
        let front_hops = state.cost(front).unwrap_or_default();

        for neighbor in graph.successors(front) {
            if !state.is_visited(neighbor) {
                state.visit(neighbor);
                state.set_cost(neighbor, Some(front_hops + 1));
                state.set_predecessor(neighbor, Some(front));
                queue.push_back(neighbor);
            }

            if neighbor == end {
                done = true;
                break;
            }
        }
    }

    let Some(hops) = state.cost(end) else {
        debug!("shortest path {begin} -> {end}: unreachable");
        return Err(Error::Unreachable);
    };

    debug!("shortest path {begin} -> {end}: {hops} hops");
    Ok(GraphPath {
        vertices: state.predecessor_chain(end),
        cost: hops,
    })
}

/// Finds a path from `begin` to `end` with the lowest total edge cost.
///
/// The scalar cost of each edge is `cost(weight)`. The search seeds a min-priority queue
/// with `begin` at cost 0 and repeatedly pops the cheapest entry. Entries for visited
/// vertices are discarded; otherwise the vertex is finalized with the entry's cost and
/// predecessor. Finalizing `end` stops the search. For every other finalized vertex, each
/// unvisited neighbor is pushed with the finalized cost plus the edge cost.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `begin` - The origin vertex
/// * `end` - The destination vertex
/// * `cost` - Extracts the scalar cost of an edge weight
///
/// # Returns
///
/// The cheapest path from `begin` to `end` and its total cost. When `begin == end` the
/// path is `[begin]` with cost 0.
///
/// # Errors
///
/// - [`Error::VertexNotFound`] if either id is not a vertex of `graph`
/// - [`Error::Unreachable`] if the queue drains before `end` is finalized
/// - [`Error::InvalidWeight`] if an edge cost met during the search, or the running path
///   cost, is negative or non-finite
///
/// # Complexity
///
/// - Time: O(E log E), since the queue may hold one entry per relaxed edge
/// - Space: O(V + E)
pub fn cheapest_path_by<T, W, F>(
    graph: &DirectedGraph<T, W>,
    begin: VertexId,
    end: VertexId,
    cost: F,
) -> Result<GraphPath<VertexId, f64>>
where
    F: Fn(&W) -> f64,
{
    let vertex_count = graph.vertex_count();
    for vertex in [begin, end] {
        if vertex.index() >= vertex_count {
            return Err(vertex_not_found!("{}", vertex));
        }
    }

    let mut state: SearchState<f64> = SearchState::new(vertex_count);
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    queue.push(Reverse(QueueEntry {
        cost: 0.0,
        sequence,
        vertex: begin,
        predecessor: None,
    }));

    while let Some(Reverse(entry)) = queue.pop() {
        if state.is_visited(entry.vertex) {
            continue;
        }

        trace!("cheapest: finalize {} at cost {}", entry.vertex, entry.cost);
        state.visit(entry.vertex);
        state.set_cost(entry.vertex, Some(entry.cost));
        state.set_predecessor(entry.vertex, entry.predecessor);

        if entry.vertex == end {
            break;
        }

        let Some(vertex) = graph.vertex(entry.vertex) else {
            continue;
        };
        for edge in vertex.edges() {
            if state.is_visited(edge.target()) {
                continue;
            }

            let edge_cost = validate_cost(cost(edge.weight()))?;
            // Finite costs can still overflow to infinity once summed
            let candidate = validate_cost(entry.cost + edge_cost)?;
            sequence += 1;
            queue.push(Reverse(QueueEntry {
                cost: candidate,
                sequence,
                vertex: edge.target(),
                predecessor: Some(entry.vertex),
            }));
        }
    }

    let Some(total) = state.cost(end) else {
        debug!(
            "cheapest path {begin} -> {end}: unreachable after finalizing {} vertices",
            state.visited_count()
        );
        return Err(Error::Unreachable);
    };

    debug!("cheapest path {begin} -> {end}: cost {total}");
    Ok(GraphPath {
        vertices: state.predecessor_chain(end),
        cost: total,
    })
}

#[cfg(test)]
mod tests {
    use crate::{
        graph::{
            algorithms::paths::{cheapest_path_by, hop_shortest_path},
            DirectedGraph, VertexId,
        },
        Error, Weight,
    };

    fn ids(raw: &[usize]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId::new).collect()
    }

    /// A(0) -> B(1) cost 1, B -> C(2) cost 2, A -> C cost 10
    fn create_triangle_graph() -> DirectedGraph<&'static str, f64> {
        let mut graph = DirectedGraph::new();
        for label in ["A", "B", "C"] {
            graph.add_vertex(label);
        }
        graph.add_edge(&"A", &"B", 1.0);
        graph.add_edge(&"B", &"C", 2.0);
        graph.add_edge(&"A", &"C", 10.0);
        graph
    }

    #[test]
    fn test_hop_shortest_prefers_fewer_edges() {
        let graph = create_triangle_graph();
        let path = hop_shortest_path(&graph, VertexId::new(0), VertexId::new(2)).unwrap();
        assert_eq!(path.vertices, ids(&[0, 2]));
        assert_eq!(path.cost, 1);
    }

    #[test]
    fn test_hop_shortest_two_hops() {
        let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
        for label in ["A", "B", "C", "D"] {
            graph.add_vertex(label);
        }
        graph.add_edge(&"A", &"B", 1.0);
        graph.add_edge(&"B", &"C", 1.0);
        graph.add_edge(&"C", &"D", 1.0);
        graph.add_edge(&"A", &"C", 1.0);

        let path = hop_shortest_path(&graph, VertexId::new(0), VertexId::new(3)).unwrap();
        assert_eq!(path.vertices, ids(&[0, 2, 3]));
        assert_eq!(path.cost, 2);
    }

    #[test]
    fn test_hop_shortest_same_vertex() {
        let graph = create_triangle_graph();
        let path = hop_shortest_path(&graph, VertexId::new(1), VertexId::new(1)).unwrap();
        assert_eq!(path.vertices, ids(&[1]));
        assert_eq!(path.cost, 0);
    }

    #[test]
    fn test_hop_shortest_unreachable() {
        let graph = create_triangle_graph();
        assert_eq!(
            hop_shortest_path(&graph, VertexId::new(2), VertexId::new(0)),
            Err(Error::Unreachable)
        );
    }

    #[test]
    fn test_hop_shortest_invalid_vertex() {
        let graph = create_triangle_graph();
        assert!(matches!(
            hop_shortest_path(&graph, VertexId::new(0), VertexId::new(9)),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_cheapest_takes_cheaper_detour() {
        let graph = create_triangle_graph();
        let path =
            cheapest_path_by(&graph, VertexId::new(0), VertexId::new(2), Weight::cost).unwrap();
        assert_eq!(path.vertices, ids(&[0, 1, 2]));
        assert_eq!(path.cost, 3.0);
    }

    #[test]
    fn test_cheapest_single_edge() {
        let graph = create_triangle_graph();
        let path =
            cheapest_path_by(&graph, VertexId::new(1), VertexId::new(2), Weight::cost).unwrap();
        assert_eq!(path.vertices, ids(&[1, 2]));
        assert_eq!(path.cost, 2.0);
    }

    #[test]
    fn test_cheapest_custom_cost() {
        let graph = create_triangle_graph();
        // Flat cost per edge turns the search into a hop count
        let path = cheapest_path_by(&graph, VertexId::new(0), VertexId::new(2), |_| 1.0).unwrap();
        assert_eq!(path.vertices, ids(&[0, 2]));
        assert_eq!(path.cost, 1.0);
    }

    #[test]
    fn test_cheapest_stale_entries_are_discarded() {
        // C is first queued at 10 via A, later at 2 via B; the 10 entry must be ignored
        let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
        for label in ["A", "B", "C", "D"] {
            graph.add_vertex(label);
        }
        graph.add_edge(&"A", &"C", 10.0);
        graph.add_edge(&"A", &"B", 1.0);
        graph.add_edge(&"B", &"C", 1.0);
        graph.add_edge(&"C", &"D", 1.0);

        let path =
            cheapest_path_by(&graph, VertexId::new(0), VertexId::new(3), Weight::cost).unwrap();
        assert_eq!(path.vertices, ids(&[0, 1, 2, 3]));
        assert_eq!(path.cost, 3.0);
    }

    #[test]
    fn test_cheapest_unreachable() {
        let mut graph = create_triangle_graph();
        graph.add_vertex("X");
        assert_eq!(
            cheapest_path_by(&graph, VertexId::new(0), VertexId::new(3), Weight::cost),
            Err(Error::Unreachable)
        );
    }

    #[test]
    fn test_cheapest_zero_cost_trivial_path() {
        let graph = create_triangle_graph();
        let path =
            cheapest_path_by(&graph, VertexId::new(0), VertexId::new(0), Weight::cost).unwrap();
        assert_eq!(path.vertices, ids(&[0]));
        assert_eq!(path.cost, 0.0);
    }

    #[test]
    fn test_cheapest_rejects_negative_cost() {
        let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.add_edge(&"A", &"B", -1.0);

        assert_eq!(
            cheapest_path_by(&graph, VertexId::new(0), VertexId::new(1), Weight::cost),
            Err(Error::InvalidWeight { cost: -1.0 })
        );
    }

    #[test]
    fn test_cheapest_rejects_non_finite_cost() {
        let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
        for label in ["A", "B", "C"] {
            graph.add_vertex(label);
        }
        graph.add_edge(&"A", &"B", f64::INFINITY);
        graph.add_edge(&"A", &"C", f64::NAN);

        assert_eq!(
            cheapest_path_by(&graph, VertexId::new(0), VertexId::new(1), Weight::cost),
            Err(Error::InvalidWeight {
                cost: f64::INFINITY
            })
        );

        let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
        graph.add_vertex("A");
        graph.add_vertex("B");
        graph.add_edge(&"A", &"B", f64::NAN);
        assert!(matches!(
            cheapest_path_by(&graph, VertexId::new(0), VertexId::new(1), Weight::cost),
            Err(Error::InvalidWeight { cost }) if cost.is_nan()
        ));
    }

    #[test]
    fn test_cheapest_rejects_overflowing_sum() {
        // Each edge is finite, the two-edge sum is not
        let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
        for label in ["A", "B", "C"] {
            graph.add_vertex(label);
        }
        graph.add_edge(&"A", &"B", f64::MAX);
        graph.add_edge(&"B", &"C", f64::MAX);

        assert_eq!(
            cheapest_path_by(&graph, VertexId::new(0), VertexId::new(1), Weight::cost)
                .map(|path| path.cost),
            Ok(f64::MAX)
        );
        assert_eq!(
            cheapest_path_by(&graph, VertexId::new(0), VertexId::new(2), Weight::cost),
            Err(Error::InvalidWeight {
                cost: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_cheapest_equal_costs_keep_first_discovery() {
        // A -> B -> D and A -> C -> D both cost 2; B's route is queued first
        let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
        for label in ["A", "B", "C", "D"] {
            graph.add_vertex(label);
        }
        graph.add_edge(&"A", &"B", 1);
        graph.add_edge(&"A", &"C", 1);
        graph.add_edge(&"B", &"D", 1);
        graph.add_edge(&"C", &"D", 1);

        let path =
            cheapest_path_by(&graph, VertexId::new(0), VertexId::new(3), Weight::cost).unwrap();
        assert_eq!(path.vertices, ids(&[0, 1, 3]));
        assert_eq!(path.cost, 2.0);
    }
}
