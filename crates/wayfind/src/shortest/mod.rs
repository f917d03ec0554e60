//! Single-source shortest-path engines.
//!
//! Both engines return a [`ShortestPaths`] holding a distance map and a parent
//! map keyed by every vertex of the graph:
//!
//! - [`dijkstra`]: non-negative weights, lazy-deletion binary heap frontier
//! - [`bellman_ford`]: arbitrary weights with negative-cycle detection
//!
//! Unreachable vertices keep a distance of `f64::INFINITY` and no parent.

mod bellman_ford;
mod dijkstra;

pub use bellman_ford::{BellmanFordOptions, bellman_ford, bellman_ford_with};
pub use dijkstra::{dijkstra, dijkstra_checked};

use crate::graph::{Graph, VertexId};
use crate::path::reconstruct_path;
use std::collections::BTreeMap;
use thiserror::Error;

/// Best-known distance from the source to each vertex.
pub type DistanceMap = BTreeMap<VertexId, f64>;

/// Predecessor of each vertex on its shortest path, `None` for the source and
/// for unreachable vertices.
pub type ParentMap = BTreeMap<VertexId, Option<VertexId>>;

/// Bellman-Ford found a negative-weight cycle reachable from the source.
///
/// No distances are reported in this case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("negative-weight cycle reachable from vertex {origin}")]
pub struct NegativeCycle {
    /// Source vertex the engine was run from
    pub origin: VertexId,
}

/// Output of a shortest-path engine for a single source.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    /// Source vertex
    pub source: VertexId,
    /// Distance per vertex (`f64::INFINITY` when unreachable)
    pub distances: DistanceMap,
    /// Predecessor per vertex
    pub parents: ParentMap,
}

impl ShortestPaths {
    /// Fresh maps: every vertex at infinity with no parent, the source at 0.
    ///
    /// The source is keyed even if it is not a member of the graph.
    fn init(graph: &Graph, source: VertexId) -> Self {
        let mut distances: DistanceMap = graph
            .vertices()
            .iter()
            .map(|&v| (v, f64::INFINITY))
            .collect();
        let mut parents: ParentMap = graph.vertices().iter().map(|&v| (v, None)).collect();
        distances.insert(source, 0.0);
        parents.insert(source, None);

        Self {
            source,
            distances,
            parents,
        }
    }

    /// Current distance of `vertex`, infinity if unknown.
    fn current(&self, vertex: VertexId) -> f64 {
        self.distances.get(&vertex).copied().unwrap_or(f64::INFINITY)
    }

    /// Try to improve `to` via the edge `from -> to`.
    ///
    /// Returns the new distance when the candidate is strictly shorter.
    fn relax(&mut self, from: VertexId, to: VertexId, weight: f64) -> Option<f64> {
        let candidate = self.current(from) + weight;
        if candidate < self.current(to) {
            self.distances.insert(to, candidate);
            self.parents.insert(to, Some(from));
            Some(candidate)
        } else {
            None
        }
    }

    /// Finite distance to `vertex`, or `None` if it is unreachable or unknown.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        self.distances
            .get(&vertex)
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Whether `vertex` was reached from the source.
    #[must_use]
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reached, the source included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Shortest path from the source to `vertex`, or `None` if unreachable.
    #[must_use]
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(vertex) {
            return None;
        }
        Some(reconstruct_path(&self.parents, vertex))
    }
}
