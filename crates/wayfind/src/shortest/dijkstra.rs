//! Dijkstra's algorithm with a lazy-deletion binary heap.

use super::ShortestPaths;
use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Single-source shortest paths for graphs with non-negative weights.
///
/// Frontier entries are `(tentative distance, vertex)` in a min-heap. Entries
/// superseded by a later improvement are left in the heap and discarded when
/// popped, instead of using decrease-key. Runs in `O((V + E) log V)`.
///
/// # Preconditions
///
/// - Every edge weight is non-negative. Negative weights are not detected.
///   A negative edge off any cycle yields wrong distances. A negative cycle
///   reachable from `source` makes the loop relax forever, with the frontier
///   growing without bound, so this function never returns. That includes
///   every negative edge of an undirected graph, since it is stored in both
///   directions. Use [`dijkstra_checked`] on untrusted input.
/// - `source` is a vertex of `graph`. It is not validated; an unknown source
///   simply reaches nothing.
#[must_use]
pub fn dijkstra(graph: &Graph, source: VertexId) -> ShortestPaths {
    tracing::debug!(
        source,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "Running Dijkstra"
    );

    let mut paths = ShortestPaths::init(graph, source);
    let mut frontier: BinaryHeap<(Reverse<OrderedFloat<f64>>, VertexId)> = BinaryHeap::new();
    frontier.push((Reverse(OrderedFloat(0.0)), source));

    let mut settled = 0usize;
    while let Some((Reverse(OrderedFloat(d)), u)) = frontier.pop() {
        // Stale entry (a shorter path was already recorded)
        if d > paths.current(u) {
            continue;
        }
        settled += 1;

        for neighbor in graph.neighbors(u) {
            if let Some(candidate) = paths.relax(u, neighbor.vertex, neighbor.weight) {
                frontier.push((Reverse(OrderedFloat(candidate)), neighbor.vertex));
            }
        }
    }

    tracing::debug!(
        settled,
        reachable = paths.reachable_count(),
        "Dijkstra finished"
    );
    paths
}

/// [`dijkstra`] with its preconditions checked up front.
///
/// # Errors
///
/// - [`Error::UnknownVertex`] if `source` is not in the graph
/// - [`Error::NegativeWeight`] for the first edge with a negative weight
pub fn dijkstra_checked(graph: &Graph, source: VertexId) -> Result<ShortestPaths> {
    if !graph.contains_vertex(source) {
        return Err(Error::UnknownVertex(source));
    }
    if let Some(edge) = graph.edges().find(|e| e.weight < 0.0) {
        return Err(Error::NegativeWeight {
            from: edge.from,
            to: edge.to,
            weight: edge.weight,
        });
    }
    Ok(dijkstra(graph, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::reconstruct_path;

    fn diamond() -> Graph {
        let mut graph = Graph::new(true);
        graph.add_edge(0, 1, 4.0);
        graph.add_edge(0, 2, 1.0);
        graph.add_edge(2, 1, 1.0);
        graph.add_edge(1, 3, 1.0);
        graph.add_edge(2, 3, 5.0);
        graph
    }

    #[test]
    fn finds_shortest_distances_through_detour() {
        let paths = dijkstra(&diamond(), 0);

        assert_eq!(paths.distances[&0], 0.0);
        assert_eq!(paths.distances[&1], 2.0);
        assert_eq!(paths.distances[&2], 1.0);
        assert_eq!(paths.distances[&3], 3.0);
        assert_eq!(reconstruct_path(&paths.parents, 3), vec![0, 2, 1, 3]);
    }

    #[test]
    fn source_has_no_parent() {
        let paths = dijkstra(&diamond(), 0);
        assert_eq!(paths.parents[&0], None);
    }

    #[test]
    fn unreachable_vertices_stay_infinite() {
        let mut graph = Graph::with_vertices(4, true);
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(3, 2, 1.0);

        let paths = dijkstra(&graph, 0);

        assert!(paths.distances[&2].is_infinite());
        assert!(paths.distances[&3].is_infinite());
        assert_eq!(paths.parents[&2], None);
        assert_eq!(paths.parents[&3], None);
    }

    #[test]
    fn parallel_edges_use_cheapest() {
        let mut graph = Graph::new(true);
        graph.add_edge(0, 1, 9.0);
        graph.add_edge(0, 1, 2.0);

        let paths = dijkstra(&graph, 0);
        assert_eq!(paths.distances[&1], 2.0);
    }

    #[test]
    fn undirected_edges_are_walked_both_ways() {
        let mut graph = Graph::new(false);
        graph.add_edge(1, 0, 2.0);
        graph.add_edge(2, 1, 3.0);

        let paths = dijkstra(&graph, 0);
        assert_eq!(paths.distances[&2], 5.0);
        assert_eq!(paths.parents[&2], Some(1));
    }

    #[test]
    fn checked_rejects_negative_weight() {
        let mut graph = diamond();
        graph.add_edge(3, 0, -1.0);

        let err = dijkstra_checked(&graph, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::NegativeWeight { from: 3, to: 0, .. }
        ));
    }

    #[test]
    fn checked_rejects_undirected_negative_edge() {
        let mut graph = Graph::new(false);
        graph.add_edge(0, 1, -1.0);

        let err = dijkstra_checked(&graph, 0).unwrap_err();
        assert!(matches!(err, Error::NegativeWeight { from: 0, to: 1, .. }));
    }

    #[test]
    fn checked_rejects_unknown_source() {
        let err = dijkstra_checked(&diamond(), 17).unwrap_err();
        assert!(matches!(err, Error::UnknownVertex(17)));
    }

    #[test]
    fn checked_matches_unchecked_on_valid_input() {
        let graph = diamond();
        assert_eq!(dijkstra_checked(&graph, 0).unwrap(), dijkstra(&graph, 0));
    }
}
