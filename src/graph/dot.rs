//! Text renderings of a graph: a plain adjacency listing and Graphviz DOT.

use std::fmt::{self, Display, Write};

use crate::{config::GraphKind, graph::DirectedGraph};

/// Escapes a string for safe use in DOT format labels and identifiers.
///
/// Handles quotes, backslashes, newlines and angle brackets.
///
/// # Examples
///
/// ```rust
/// use routegraph::graph::escape_dot;
///
/// assert_eq!(escape_dot("Map<K>"), "Map\\<K\\>");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
        .replace('<', "\\<")
        .replace('>', "\\>")
}

impl<T: Display, W: Display> DirectedGraph<T, W> {
    /// Renders the graph in Graphviz DOT format.
    ///
    /// Vertices are emitted as `v0`, `v1`, ... in insertion order with their labels; each
    /// edge is labeled with its weight. Undirected graphs are emitted as `graph` with `--`
    /// connectors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use routegraph::DirectedGraph;
    ///
    /// let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
    /// graph.add_vertex("A");
    /// graph.add_vertex("B");
    /// graph.add_edge(&"A", &"B", 7);
    ///
    /// let dot = graph.to_dot();
    /// assert!(dot.starts_with("digraph {"));
    /// assert!(dot.contains("v0 -> v1 [label=\"7\"];"));
    /// ```
    #[must_use]
    pub fn to_dot(&self) -> String {
        let (keyword, connector) = match self.kind() {
            GraphKind::Directed => ("digraph", "->"),
            GraphKind::Undirected => ("graph", "--"),
        };

        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = writeln!(out, "{keyword} {{");
        for vertex in self.vertices() {
            let _ = writeln!(
                out,
                "    {} [label=\"{}\"];",
                vertex.id(),
                escape_dot(&vertex.label().to_string())
            );
        }
        for vertex in self.vertices() {
            for edge in vertex.edges() {
                let _ = writeln!(
                    out,
                    "    {} {connector} {} [label=\"{}\"];",
                    vertex.id(),
                    edge.target(),
                    escape_dot(&edge.weight().to_string())
                );
            }
        }
        out.push('}');
        out.push('\n');
        out
    }
}

impl<T: Display, W: Display> Display for DirectedGraph<T, W> {
    /// Lists every vertex in insertion order, each followed by its outgoing edges.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "graph with {} vertices and {} edges",
            self.vertex_count(),
            self.edge_count()
        )?;

        for vertex in self.vertices() {
            writeln!(f, "{}", vertex.label())?;
            for edge in vertex.edges() {
                match self.label(edge.target()) {
                    Some(target) => writeln!(f, "  -> {target} ({})", edge.weight())?,
                    None => writeln!(f, "  -> {} ({})", edge.target(), edge.weight())?,
                }
            }
        }
        Ok(())
    }
}
