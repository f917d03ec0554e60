//! Integration tests for the shortest-path engines.
//!
//! Scenario tests pin exact outputs; property tests cross-validate Dijkstra,
//! Bellman-Ford and petgraph's implementations on random graphs. Weights are
//! integers so distance sums are exact in `f64`.

use petgraph::algo;
use petgraph::visit::EdgeRef;
use proptest::prelude::*;
use rstest::rstest;
use wayfind::{
    BellmanFordOptions, Graph, NegativeCycle, ShortestPaths, bellman_ford, bellman_ford_with,
    dijkstra, reconstruct_path,
};

mod common;
use common::{diamond, graph_from};

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn dijkstra_diamond_scenario() {
    let paths = dijkstra(&diamond(1.0), 0);

    let distances: Vec<_> = paths.distances.iter().map(|(&v, &d)| (v, d)).collect();
    assert_eq!(distances, vec![(0, 0.0), (1, 2.0), (2, 1.0), (3, 3.0)]);
    assert_eq!(reconstruct_path(&paths.parents, 3), vec![0, 2, 1, 3]);
}

#[test]
fn bellman_ford_negative_edge_scenario() {
    let paths = bellman_ford(&diamond(-10.0), 0).expect("no negative cycle");

    assert_eq!(paths.distances[&1], -9.0);
    assert_eq!(paths.distances[&3], -8.0);
}

#[test]
fn bellman_ford_reports_three_vertex_cycle() {
    let graph = graph_from(true, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, -3.0)]);

    assert_eq!(bellman_ford(&graph, 0), Err(NegativeCycle { origin: 0 }));
}

#[test]
fn zero_weight_cycle_is_not_negative() {
    let graph = graph_from(true, &[(0, 1, 2.0), (1, 2, -1.0), (2, 1, 1.0)]);

    let paths = bellman_ford(&graph, 0).expect("zero-weight cycle is fine");
    assert_eq!(paths.distances[&2], 1.0);
}

#[rstest]
#[case::dijkstra_engine(dijkstra(&isolated(), 0))]
#[case::bellman_ford_engine(bellman_ford(&isolated(), 0).unwrap())]
fn unreachable_vertices_are_infinite(#[case] paths: ShortestPaths) {
    assert!(paths.distances[&3].is_infinite());
    assert!(paths.distances[&4].is_infinite());
    assert_eq!(paths.parents[&3], None);
    assert_eq!(paths.path_to(4), None);
    assert_eq!(paths.distance(1), Some(1.0));
}

fn isolated() -> Graph {
    let mut graph = Graph::with_vertices(5, true);
    graph.add_edge(0, 1, 1.0);
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(4, 3, 1.0);
    graph
}

#[rstest]
#[case::single(Graph::with_vertices(1, true), 0)]
#[case::diamond(diamond(1.0), 0)]
#[case::diamond_middle(diamond(1.0), 2)]
#[case::undirected(graph_from(false, &[(0, 1, 3.0), (1, 2, 4.0)]), 2)]
fn source_is_zero_with_no_parent(#[case] graph: Graph, #[case] source: usize) {
    for paths in [dijkstra(&graph, source), bellman_ford(&graph, source).unwrap()] {
        assert_eq!(paths.distances[&source], 0.0);
        assert_eq!(paths.parents[&source], None);
        assert_eq!(reconstruct_path(&paths.parents, source), vec![source]);
    }
}

#[test]
fn distance_maps_key_every_vertex() {
    let graph = isolated();
    let paths = dijkstra(&graph, 0);

    let keys: Vec<_> = paths.distances.keys().copied().collect();
    let vertices: Vec<_> = graph.vertices().iter().copied().collect();
    assert_eq!(keys, vertices);
}

#[test]
fn persisted_graph_gives_same_answers() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("diamond.json");
    let graph = diamond(-10.0);

    graph.save_json(&path).unwrap();
    let loaded = Graph::load_json(&path).unwrap();

    assert_eq!(bellman_ford(&loaded, 0), bellman_ford(&graph, 0));
}

// ============================================================================
// Properties
// ============================================================================

/// Random graph on `1..8` declared vertices with integer weights in `min_weight..20`.
fn graph_strategy(min_weight: i32) -> impl Strategy<Value = Graph> {
    (1usize..8, any::<bool>()).prop_flat_map(move |(n, directed)| {
        prop::collection::vec((0..n, 0..n, min_weight..20), 0..24).prop_map(move |edges| {
            let mut graph = Graph::with_vertices(n, directed);
            for (from, to, weight) in edges {
                graph.add_edge(from, to, f64::from(weight));
            }
            graph
        })
    })
}

/// Every recorded parent edge realizes the child's distance.
fn assert_parents_consistent(graph: &Graph, paths: &ShortestPaths) {
    for (&vertex, parent) in &paths.parents {
        let Some(parent) = *parent else { continue };
        let realized = graph.neighbors(parent).iter().any(|n| {
            n.vertex == vertex && paths.distances[&parent] + n.weight == paths.distances[&vertex]
        });
        assert!(realized, "parent edge {parent} -> {vertex} does not realize distance");
    }
}

proptest! {
    #[test]
    fn dijkstra_matches_petgraph(graph in graph_strategy(0)) {
        let (digraph, node_map) = graph.to_digraph();
        let expected = algo::dijkstra(&digraph, node_map[&0], None, |e| *e.weight());
        let paths = dijkstra(&graph, 0);

        for (&vertex, &distance) in &paths.distances {
            match expected.get(&node_map[&vertex]) {
                Some(&d) => prop_assert_eq!(distance, d),
                None => prop_assert!(distance.is_infinite()),
            }
        }
        assert_parents_consistent(&graph, &paths);
    }

    #[test]
    fn bellman_ford_equals_dijkstra_without_negative_weights(graph in graph_strategy(0)) {
        let from_dijkstra = dijkstra(&graph, 0);
        let from_bellman = bellman_ford(&graph, 0).expect("no negative weights");

        prop_assert_eq!(&from_dijkstra.distances, &from_bellman.distances);
        assert_parents_consistent(&graph, &from_bellman);
    }

    #[test]
    fn bellman_ford_matches_petgraph(graph in graph_strategy(-5)) {
        let (digraph, node_map) = graph.to_digraph();
        let expected = algo::bellman_ford(&digraph, node_map[&0]);

        match (bellman_ford(&graph, 0), expected) {
            (Ok(paths), Ok(reference)) => {
                for (&vertex, &distance) in &paths.distances {
                    prop_assert_eq!(distance, reference.distances[node_map[&vertex].index()]);
                }
                assert_parents_consistent(&graph, &paths);
            }
            (Err(_), Err(_)) => {}
            (ours, theirs) => prop_assert!(
                false,
                "disagreement: ours negative={} petgraph negative={}",
                ours.is_err(),
                theirs.is_err()
            ),
        }
    }

    #[test]
    fn early_exit_is_only_an_optimization(graph in graph_strategy(-5)) {
        let fast = bellman_ford_with(&graph, 0, BellmanFordOptions { early_exit: true });
        let full = bellman_ford_with(&graph, 0, BellmanFordOptions { early_exit: false });
        prop_assert_eq!(fast, full);
    }

    #[test]
    fn dijkstra_is_idempotent(graph in graph_strategy(0)) {
        prop_assert_eq!(dijkstra(&graph, 0), dijkstra(&graph, 0));
    }

    #[test]
    fn bellman_ford_is_idempotent(graph in graph_strategy(-5)) {
        prop_assert_eq!(bellman_ford(&graph, 0), bellman_ford(&graph, 0));
    }

    #[test]
    fn reconstructed_paths_follow_graph_edges(graph in graph_strategy(0)) {
        let paths = dijkstra(&graph, 0);
        for &vertex in graph.vertices() {
            let Some(path) = paths.path_to(vertex) else { continue };
            prop_assert_eq!(path.first(), Some(&0));
            prop_assert_eq!(path.last(), Some(&vertex));
            for pair in path.windows(2) {
                prop_assert!(graph.neighbors(pair[0]).iter().any(|n| n.vertex == pair[1]));
            }
        }
    }
}

#[test]
fn petgraph_edge_view_matches_adjacency() {
    let graph = diamond(1.0);
    let (digraph, node_map) = graph.to_digraph();

    for edge in graph.edges() {
        let found = digraph
            .edges(node_map[&edge.from])
            .any(|e| digraph[e.target()] == edge.to && *e.weight() == edge.weight);
        assert!(found);
    }
}
