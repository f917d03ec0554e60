//! JSON rendering for `--json` output.
//!
//! Infinite distances are written as `null`.

use crate::graph::{Graph, VertexId};
use crate::shortest::ShortestPaths;
use crate::traversal::{BfsResult, DfsResult};
use serde_json::{Value, json};

fn finite(distance: f64) -> Option<f64> {
    distance.is_finite().then_some(distance)
}

/// Distances, parents and an optional path for a shortest-path run.
#[must_use]
pub fn shortest_paths_json(
    algorithm: &str,
    paths: &ShortestPaths,
    target: Option<VertexId>,
) -> Value {
    let distances: serde_json::Map<String, Value> = paths
        .distances
        .iter()
        .map(|(v, d)| (v.to_string(), json!(finite(*d))))
        .collect();
    let parents: serde_json::Map<String, Value> = paths
        .parents
        .iter()
        .map(|(v, p)| (v.to_string(), json!(p)))
        .collect();

    let mut value = json!({
        "algorithm": algorithm,
        "source": paths.source,
        "negative_cycle": false,
        "distances": distances,
        "parents": parents,
    });
    if let Some(target) = target {
        value["target"] = json!(target);
        value["path"] = json!(paths.path_to(target));
    }
    value
}

/// Negative-cycle outcome of Bellman-Ford.
#[must_use]
pub fn negative_cycle_json(source: VertexId) -> Value {
    json!({
        "algorithm": "bellman-ford",
        "source": source,
        "negative_cycle": true,
        "distances": null,
        "parents": null,
    })
}

/// BFS visit order, levels and optional path.
#[must_use]
pub fn bfs_json(result: &BfsResult, target: Option<VertexId>) -> Value {
    let levels: Vec<Vec<VertexId>> = result.levels().into_values().collect();
    let mut value = json!({
        "algorithm": "bfs",
        "start": result.start,
        "order": result.order,
        "levels": levels,
    });
    if let Some(target) = target {
        value["target"] = json!(target);
        value["path"] = json!(result.path_to(target));
    }
    value
}

/// DFS visit order, timestamps, cycle flag and optional path.
#[must_use]
pub fn dfs_json(result: &DfsResult, has_cycle: bool, target: Option<VertexId>) -> Value {
    let times: Vec<Value> = result
        .order
        .iter()
        .map(|v| {
            json!({
                "vertex": v,
                "discovery": result.discovery[v],
                "finish": result.finish[v],
            })
        })
        .collect();
    let mut value = json!({
        "algorithm": "dfs",
        "start": result.start,
        "order": result.order,
        "times": times,
        "has_cycle": has_cycle,
    });
    if let Some(target) = target {
        value["target"] = json!(target);
        value["path"] = json!(result.path_to(target));
    }
    value
}

/// The persistence record of a graph.
///
/// # Errors
///
/// Returns an error if the record cannot be serialized.
pub fn graph_json(graph: &Graph) -> serde_json::Result<Value> {
    serde_json::to_value(graph.to_record())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortest::dijkstra;

    #[test]
    fn unreachable_distance_is_null() {
        let mut graph = Graph::with_vertices(3, true);
        graph.add_edge(0, 1, 2.0);

        let value = shortest_paths_json("dijkstra", &dijkstra(&graph, 0), Some(2));

        assert_eq!(value["distances"]["1"], 2.0);
        assert!(value["distances"]["2"].is_null());
        assert!(value["parents"]["0"].is_null());
        assert_eq!(value["parents"]["1"], 0);
        assert!(value["path"].is_null());
    }

    #[test]
    fn negative_cycle_has_no_distances() {
        let value = negative_cycle_json(0);
        assert_eq!(value["negative_cycle"], true);
        assert!(value["distances"].is_null());
    }
}
