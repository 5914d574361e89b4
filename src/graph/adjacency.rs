//! Core graph structure — an adjacency map with fixed directedness.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::types::{GraphError, GraphResult};

use super::traversal;

/// A generic graph over vertices of type `V`, backed by an adjacency map.
///
/// Directedness is fixed at construction. In undirected mode every edge
/// is stored as a symmetric pair, so the adjacency relation stays
/// symmetric at all times. Vertices and edges can only be added, never
/// removed.
///
/// Not thread-safe for concurrent mutation; `&mut self` on all mutating
/// operations makes this a compile-time constraint in safe Rust.
pub struct Graph<V> {
    /// Whether edges are one-way.
    directed: bool,
    /// Each vertex mapped to its set of direct successors.
    adjacency: HashMap<V, HashSet<V>>,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Create a new empty graph with the given directedness.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: HashMap::new(),
        }
    }

    /// Whether this graph was constructed as directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether `vertex` is in the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed arcs. An undirected edge is stored as a
    /// symmetric pair and therefore counts twice.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    /// Snapshot of all vertices currently in the graph.
    ///
    /// The returned set is an independent copy; mutating it does not
    /// affect the graph. No ordering guarantee.
    pub fn vertices(&self) -> HashSet<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Snapshot of the direct successors of `vertex`.
    ///
    /// The returned set is an independent copy; mutating it does not
    /// affect the graph.
    ///
    /// Fails with [`GraphError::InvalidArgument`] if `vertex` is not in
    /// the graph.
    pub fn edges_from(&self, vertex: &V) -> GraphResult<HashSet<V>> {
        self.neighbors(vertex)
            .cloned()
            .ok_or(GraphError::InvalidArgument("vertex is not in the graph"))
    }

    /// Insert `vertex` with an empty successor set.
    ///
    /// Re-adding an existing vertex REPLACES its successor set, clearing
    /// all of its outgoing edges. In an undirected graph this can leave
    /// old neighbors still pointing at the cleared vertex. Surprising,
    /// but long-standing observable behavior that callers rely on.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.insert(vertex, HashSet::new());
    }

    /// Add an edge from `from` to `to`; in undirected mode the symmetric
    /// edge is added as well. Adding an edge that already exists is a
    /// no-op.
    ///
    /// Fails with [`GraphError::InvalidArgument`] if either vertex is
    /// missing from the graph or if `from == to` (self-loops are never
    /// allowed). Validation happens before any mutation, so a failed
    /// call leaves the graph unchanged.
    pub fn add_edge(&mut self, from: V, to: V) -> GraphResult<()> {
        if !self.contains_vertex(&from) || !self.contains_vertex(&to) {
            return Err(GraphError::InvalidArgument(
                "both vertices must be in the graph",
            ));
        }
        if from == to {
            return Err(GraphError::InvalidArgument("self-loops are not allowed"));
        }

        if !self.directed {
            if let Some(successors) = self.adjacency.get_mut(&to) {
                successors.insert(from.clone());
            }
        }
        if let Some(successors) = self.adjacency.get_mut(&from) {
            successors.insert(to);
        }

        Ok(())
    }

    /// Shortest path (fewest edges) from `from` to `to`, found by
    /// breadth-first search. See [`traversal::shortest_path`].
    ///
    /// Returns `Ok(None)` when `to` is unreachable from `from`. Fails
    /// with [`GraphError::InvalidArgument`] if either vertex is not in
    /// the graph.
    pub fn shortest_path(&self, from: &V, to: &V) -> GraphResult<Option<Vec<V>>> {
        traversal::shortest_path(self, from, to)
    }

    /// Borrowed successor set, if the vertex is present. Internal
    /// no-copy access for traversal.
    pub(crate) fn neighbors(&self, vertex: &V) -> Option<&HashSet<V>> {
        self.adjacency.get(vertex)
    }
}
