//! Graph traversal algorithms.
//!
//! Breadth-first and depth-first walks from a single origin. Both record visitation in a
//! fresh [`SearchState`] and return the visited vertices in the order they were first
//! reached. Neighbors are always considered in edge insertion order, which makes the
//! output fully deterministic.
//!
//! - [`bfs_ids`] - Level-order walk driven by a FIFO queue
//! - [`dfs_ids`] - Iterative walk driven by an explicit stack (pre-order)
//! - [`unvisited_successor`] - First unvisited successor of a vertex, shared with
//!   topological ordering

use std::collections::VecDeque;

use log::{debug, trace};

use crate::graph::{SearchState, Successors, VertexId};

/// Returns the first successor of `vertex`, in edge order, that `state` reports as
/// unvisited.
///
/// The scan always restarts from the first edge. `None` means `vertex` has no edges or
/// all of its successors are visited; topological ordering treats that as "`vertex` is
/// terminal".
///
/// # Examples
///
/// ```rust
/// use routegraph::{graph::{algorithms, SearchState}, DirectedGraph};
///
/// let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
/// for label in ["A", "B", "C"] {
///     graph.add_vertex(label);
/// }
/// graph.add_edge(&"A", &"B", 1);
/// graph.add_edge(&"A", &"C", 1);
///
/// let a = graph.vertex_id(&"A").unwrap();
/// let b = graph.vertex_id(&"B").unwrap();
/// let mut state: SearchState<()> = SearchState::new(graph.vertex_count());
/// state.visit(b);
///
/// assert_eq!(algorithms::unvisited_successor(&graph, &state, a), graph.vertex_id(&"C"));
/// ```
#[must_use]
pub fn unvisited_successor<G: Successors, C: Copy>(
    graph: &G,
    state: &SearchState<C>,
    vertex: VertexId,
) -> Option<VertexId> {
    graph
        .successors(vertex)
        .find(|&successor| !state.is_visited(successor))
}

/// Computes the breadth-first visitation order from `start`.
///
/// The origin is marked visited and emitted first. Vertices are then dequeued one at a
/// time and each not-yet-visited neighbor is marked, emitted and enqueued. Every vertex
/// reachable from `start` appears exactly once, and no vertex at distance `k` is preceded
/// by a vertex at distance greater than `k`.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The origin vertex
///
/// # Returns
///
/// The reachable vertices in BFS order, or an empty vector if `start` is not a vertex of
/// `graph`.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn bfs_ids<G: Successors>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let vertex_count = graph.vertex_count();
    if start.index() >= vertex_count {
        return Vec::new();
    }

    let mut state: SearchState<()> = SearchState::new(vertex_count);
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    state.visit(start);
    order.push(start);
    queue.push_back(start);

    while let Some(front) = queue.pop_front() {
        for neighbor in graph.successors(front) {
            if !state.is_visited(neighbor) {
                trace!("bfs: {front} -> {neighbor}");
                state.visit(neighbor);
                order.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    debug!("bfs from {start} visited {} vertices", order.len());
    order
}

/// Computes the depth-first visitation order from `start`.
///
/// The walk keeps an explicit stack. At each step it looks at the top vertex and asks for
/// its first unvisited neighbor in edge order, rescanning the edge list from the start
/// every time; if there is one it is marked, emitted and pushed, otherwise the top is
/// popped. The walk ends when the stack is empty.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `start` - The origin vertex
///
/// # Returns
///
/// The reachable vertices in DFS pre-order, or an empty vector if `start` is not a vertex
/// of `graph`.
///
/// # Complexity
///
/// - Time: O(V · d) where d is the maximum out-degree, because of the rescans
/// - Space: O(V)
pub fn dfs_ids<G: Successors>(graph: &G, start: VertexId) -> Vec<VertexId> {
    let vertex_count = graph.vertex_count();
    if start.index() >= vertex_count {
        return Vec::new();
    }

    let mut state: SearchState<()> = SearchState::new(vertex_count);
    let mut order = Vec::new();
    let mut stack = vec![start];

    state.visit(start);
    order.push(start);

    while let Some(&top) = stack.last() {
        match unvisited_successor(graph, &state, top) {
            Some(neighbor) => {
                trace!("dfs: {top} -> {neighbor}");
                state.visit(neighbor);
                order.push(neighbor);
                stack.push(neighbor);
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!("dfs from {start} visited {} vertices", order.len());
    order
}
