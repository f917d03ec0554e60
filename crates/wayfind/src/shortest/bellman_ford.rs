//! Bellman-Ford with negative-cycle detection.

use super::{NegativeCycle, ShortestPaths};
use crate::graph::{Edge, Graph, VertexId};

/// Tuning knobs for [`bellman_ford_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BellmanFordOptions {
    /// Stop relaxing once a full pass changes nothing.
    ///
    /// Only affects running time, never the result.
    pub early_exit: bool,
}

impl Default for BellmanFordOptions {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

/// Single-source shortest paths tolerating negative edge weights.
///
/// Performs up to `V - 1` relaxation passes over [`Graph::edges`], then one
/// extra scan. Any edge that still relaxes in that scan proves a negative cycle
/// reachable from `source`. Runs in `O(V * E)`.
///
/// Negative cycles among vertices unreachable from `source` are not reported:
/// their distances stay infinite, so their edges never relax.
///
/// # Errors
///
/// Returns [`NegativeCycle`] when a reachable negative-weight cycle exists. No
/// partial distances are returned in that case.
pub fn bellman_ford(graph: &Graph, source: VertexId) -> Result<ShortestPaths, NegativeCycle> {
    bellman_ford_with(graph, source, BellmanFordOptions::default())
}

/// [`bellman_ford`] with explicit options.
///
/// # Errors
///
/// Returns [`NegativeCycle`] when a reachable negative-weight cycle exists.
pub fn bellman_ford_with(
    graph: &Graph,
    source: VertexId,
    options: BellmanFordOptions,
) -> Result<ShortestPaths, NegativeCycle> {
    let edges: Vec<Edge> = graph.edges().collect();
    tracing::debug!(
        source,
        vertices = graph.vertex_count(),
        edges = edges.len(),
        early_exit = options.early_exit,
        "Running Bellman-Ford"
    );

    let mut paths = ShortestPaths::init(graph, source);
    let passes = graph.vertex_count().saturating_sub(1);

    for pass in 0..passes {
        let mut updated = 0usize;
        for edge in &edges {
            if paths.relax(edge.from, edge.to, edge.weight).is_some() {
                updated += 1;
            }
        }
        tracing::trace!(pass, updated, "Relaxation pass");

        if updated == 0 && options.early_exit {
            break;
        }
    }

    let still_relaxes = edges
        .iter()
        .any(|e| paths.current(e.from) + e.weight < paths.current(e.to));
    if still_relaxes {
        tracing::warn!(source, "Negative-weight cycle detected");
        return Err(NegativeCycle { origin: source });
    }

    tracing::debug!(reachable = paths.reachable_count(), "Bellman-Ford finished");
    Ok(paths)
}
