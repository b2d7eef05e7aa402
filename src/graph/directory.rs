//! Label to vertex lookup.
//!
//! [`VertexDirectory`] is the sole owner of a graph's vertices and the only authority on
//! whether a label exists. Vertices are stored densely so that a [`VertexId`] is simply an
//! index; a hash map resolves labels to ids. Iteration always follows insertion order.

use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use crate::graph::{Vertex, VertexId};

/// Owning map from labels to vertices.
#[derive(Debug, Clone)]
pub struct VertexDirectory<T, W> {
    vertices: Vec<Vertex<T, W>>,
    index: HashMap<T, VertexId>,
    edge_capacity: usize,
}

impl<T, W> Default for VertexDirectory<T, W> {
    fn default() -> Self {
        VertexDirectory {
            vertices: Vec::new(),
            index: HashMap::new(),
            edge_capacity: 0,
        }
    }
}

impl<T, W> VertexDirectory<T, W> {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty directory with room for `vertex_capacity` vertices, each created
    /// with room for `edge_capacity` outgoing edges.
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        VertexDirectory {
            vertices: Vec::with_capacity(vertex_capacity),
            index: HashMap::with_capacity(vertex_capacity),
            edge_capacity,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the directory holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Removes every vertex (and with them every edge). Outstanding ids become invalid.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
    }

    /// Returns the vertex with the given id.
    #[must_use]
    pub fn get(&self, id: VertexId) -> Option<&Vertex<T, W>> {
        self.vertices.get(id.index())
    }

    /// Returns the label of a vertex by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this directory.
    #[must_use]
    pub(crate) fn label_at(&self, id: VertexId) -> &T {
        self.vertices[id.index()].label()
    }

    /// Returns the vertex with the given id for modification.
    pub fn get_mut(&mut self, id: VertexId) -> Option<&mut Vertex<T, W>> {
        self.vertices.get_mut(id.index())
    }

    /// Returns true if `id` names a vertex of this directory.
    #[must_use]
    pub fn contains_id(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// Iterates over all vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T, W>> + '_ {
        self.vertices.iter()
    }

    /// Iterates over all vertex ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }
}

impl<T: Eq + Hash + Clone, W> VertexDirectory<T, W> {
    /// Inserts a new vertex under `label` unless one already exists.
    ///
    /// # Returns
    ///
    /// The id of the new vertex, or `None` if the label was already present (the existing
    /// vertex is left untouched).
    pub fn insert(&mut self, label: T) -> Option<VertexId> {
        if self.index.contains_key(&label) {
            return None;
        }

        let id = VertexId::new(self.vertices.len());
        self.index.insert(label.clone(), id);
        self.vertices.push(Vertex::with_capacity(id, label, self.edge_capacity));
        Some(id)
    }

    /// Resolves a label to its vertex id.
    #[must_use]
    pub fn id_of<Q>(&self, label: &Q) -> Option<VertexId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(label).copied()
    }

    /// Resolves a label to its vertex.
    #[must_use]
    pub fn lookup<Q>(&self, label: &Q) -> Option<&Vertex<T, W>>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.id_of(label).and_then(|id| self.get(id))
    }
}
