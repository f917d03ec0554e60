//! Weighted adjacency-list graph store.
//!
//! A [`Graph`] is built once through [`Graph::add_edge`] and is read-only for
//! the algorithms afterwards. Vertices are plain `usize` indices. Undirected
//! graphs store every edge as two independent adjacency entries, so the
//! algorithms only ever see a directed adjacency structure.

mod record;

pub use record::{GraphRecord, MAX_RECORD_VERTICES};

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Vertex identifier: an index into the graph's vertex set.
pub type VertexId = usize;

/// A weighted edge `from -> to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source endpoint
    pub from: VertexId,
    /// Target endpoint
    pub to: VertexId,
    /// Edge weight (may be negative)
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub fn new(from: VertexId, to: VertexId, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// One adjacency entry: the neighbor reached and the weight of the edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Vertex on the other end of the edge
    pub vertex: VertexId,
    /// Edge weight
    pub weight: f64,
}

/// Weighted directed-or-undirected graph stored as adjacency lists.
///
/// Adjacency lists preserve insertion order. Parallel edges are kept as
/// separate entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    directed: bool,
    /// Vertices `0..declared` exist even without edges.
    declared: usize,
    vertices: BTreeSet<VertexId>,
    adjacency: BTreeMap<VertexId, Vec<Neighbor>>,
    /// One entry per `add_edge` call, used for persistence.
    insertions: Vec<Edge>,
    names: BTreeMap<VertexId, String>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            declared: 0,
            vertices: BTreeSet::new(),
            adjacency: BTreeMap::new(),
            insertions: Vec::new(),
            names: BTreeMap::new(),
        }
    }

    /// Create a graph with vertices `0..count` declared up front.
    ///
    /// Declared vertices show up in [`Graph::vertices`] even when isolated.
    #[must_use]
    pub fn with_vertices(count: usize, directed: bool) -> Self {
        let mut graph = Self::new(directed);
        graph.declared = count;
        graph.vertices.extend(0..count);
        graph
    }

    /// Insert an edge.
    ///
    /// For undirected graphs the reverse entry `to -> from` is added as well.
    /// Vertex bounds are not checked; unseen endpoints join the vertex set.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) {
        self.vertices.insert(from);
        self.vertices.insert(to);
        self.insertions.push(Edge::new(from, to, weight));
        self.push_entry(from, to, weight);
        if !self.directed {
            self.push_entry(to, from, weight);
        }
    }

    fn push_entry(&mut self, from: VertexId, to: VertexId, weight: f64) {
        self.adjacency.entry(from).or_default().push(Neighbor {
            vertex: to,
            weight,
        });
    }

    /// Set the display name of a declared vertex.
    ///
    /// Names for vertices outside `0..declared` are ignored.
    pub fn set_vertex_name(&mut self, vertex: VertexId, name: impl Into<String>) {
        if vertex < self.declared {
            self.names.insert(vertex, name.into());
        }
    }

    /// Display name of a vertex, defaulting to its index.
    #[must_use]
    pub fn vertex_name(&self, vertex: VertexId) -> Cow<'_, str> {
        match self.names.get(&vertex) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(vertex.to_string()),
        }
    }

    /// Whether edges were inserted as directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// All vertex indices: declared ones plus every edge endpoint, ascending.
    #[must_use]
    pub fn vertices(&self) -> &BTreeSet<VertexId> {
        &self.vertices
    }

    /// Whether `vertex` is a member of [`Graph::vertices`].
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of adjacency entries (undirected edges count twice).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Every adjacency entry as an edge, grouped by source vertex ascending.
    ///
    /// Undirected edges appear once per direction.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(&from, neighbors)| {
            neighbors
                .iter()
                .map(move |n| Edge::new(from, n.vertex, n.weight))
        })
    }

    /// Outgoing adjacency entries of `vertex`, in insertion order.
    ///
    /// Returns an empty slice for vertices without outgoing edges, including
    /// vertices that are not in the graph at all.
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> &[Neighbor] {
        self.adjacency.get(&vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges exactly as they were passed to [`Graph::add_edge`].
    #[must_use]
    pub fn insertions(&self) -> &[Edge] {
        &self.insertions
    }

    /// Build a petgraph view of the stored adjacency.
    ///
    /// Node weights are the wayfind vertex ids; the returned map translates
    /// ids to petgraph node indices.
    #[must_use]
    pub fn to_digraph(&self) -> (DiGraph<VertexId, f64>, HashMap<VertexId, NodeIndex>) {
        let mut digraph = DiGraph::with_capacity(self.vertex_count(), self.edge_count());
        let node_map: HashMap<VertexId, NodeIndex> = self
            .vertices
            .iter()
            .map(|&v| (v, digraph.add_node(v)))
            .collect();

        for edge in self.edges() {
            digraph.add_edge(node_map[&edge.from], node_map[&edge.to], edge.weight);
        }

        (digraph, node_map)
    }
}
