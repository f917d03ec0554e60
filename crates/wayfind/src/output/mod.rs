//! Output formatting for CLI commands.
//!
//! This module renders graphs and algorithm results as human-readable text.
//! JSON output for `--json` lives in [`json`].
//!
//! Submodules:
//! - [`color`]: Semantic color helpers
//! - [`json`]: JSON values for programmatic output

pub mod color;
pub mod json;

use crate::config::{DEFAULT_PRECISION, OutputSettings};
use crate::graph::{Graph, VertexId};
use crate::shortest::ShortestPaths;
use crate::traversal::{BfsResult, DfsResult};
use std::env;

pub use color::{error, info, success};
use color::{bold, dimmed};

/// Width of section separators.
const RULE_WIDTH: usize = 70;

/// Arrow joining vertices in paths and visit orders.
const ARROW: &str = " → ";

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
    /// Decimals for distances and weights.
    pub precision: usize,
}

impl OutputConfig {
    /// Build from configuration, disabling colors when `NO_COLOR` is set.
    #[must_use]
    pub fn from_settings(settings: &OutputSettings) -> Self {
        let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self {
            use_colors: settings.colors && !no_color,
            precision: settings.precision,
        }
    }

    /// No colors, default precision.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            use_colors: false,
            precision: DEFAULT_PRECISION,
        }
    }
}

/// Format a distance, `unreachable` for infinity.
#[must_use]
pub fn format_distance(distance: f64, config: &OutputConfig) -> String {
    if distance.is_infinite() && distance > 0.0 {
        error("unreachable", config)
    } else {
        format!("{distance:.prec$}", prec = config.precision)
    }
}

/// Join vertex display names with arrows.
#[must_use]
pub fn format_path(graph: &Graph, path: &[VertexId]) -> String {
    path.iter()
        .map(|&v| graph.vertex_name(v).into_owned())
        .collect::<Vec<_>>()
        .join(ARROW)
}

/// Section header framed by rules.
#[must_use]
pub fn section(title: &str, config: &OutputConfig) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{}\n{}\n{}\n",
        dimmed(&rule, config),
        bold(title, config),
        dimmed(&rule, config)
    )
}

/// Adjacency listing, one line per vertex.
#[must_use]
pub fn render_graph(graph: &Graph, config: &OutputConfig) -> String {
    let kind = if graph.is_directed() {
        "directed"
    } else {
        "undirected"
    };
    let mut out = section(
        &format!("GRAPH - {} vertices - {kind}", graph.vertex_count()),
        config,
    );

    for &vertex in graph.vertices() {
        let neighbors = graph.neighbors(vertex);
        let listing = if neighbors.is_empty() {
            dimmed("(no edges)", config)
        } else {
            neighbors
                .iter()
                .map(|n| {
                    format!(
                        "{}({:.prec$})",
                        graph.vertex_name(n.vertex),
                        n.weight,
                        prec = config.precision
                    )
                })
                .collect::<Vec<_>>()
                .join(", ")
        };
        let name = graph.vertex_name(vertex);
        out.push_str(&format!(
            "{} {}{ARROW}{listing}\n",
            dimmed("Vertex", config),
            info(&format!("{name:>2}"), config)
        ));
    }
    out
}

/// Distance table in ascending vertex order.
#[must_use]
pub fn render_distances(graph: &Graph, paths: &ShortestPaths, config: &OutputConfig) -> String {
    let mut out = format!(
        "Shortest distances from vertex {}:\n",
        info(&graph.vertex_name(paths.source), config)
    );
    for (&vertex, &distance) in &paths.distances {
        out.push_str(&format!(
            "  {}: {}\n",
            graph.vertex_name(vertex),
            format_distance(distance, config)
        ));
    }
    out
}

/// Path to `target` with its total distance.
#[must_use]
pub fn render_path(
    graph: &Graph,
    paths: &ShortestPaths,
    target: VertexId,
    config: &OutputConfig,
) -> String {
    let name = graph.vertex_name(target);
    match (paths.path_to(target), paths.distance(target)) {
        (Some(path), Some(distance)) => format!(
            "Path to {name}: {} (distance: {distance:.prec$})\n",
            info(&format_path(graph, &path), config),
            prec = config.precision
        ),
        _ => format!("Path to {name}: {}\n", error("unreachable", config)),
    }
}

/// BFS visit order and levels.
#[must_use]
pub fn render_bfs(
    graph: &Graph,
    result: &BfsResult,
    target: Option<VertexId>,
    config: &OutputConfig,
) -> String {
    let mut out = format!(
        "Start vertex: {}\nVisit order: {}\n\nLevels (hops from start):\n",
        info(&graph.vertex_name(result.start), config),
        format_path(graph, &result.order)
    );
    for (level, vertices) in result.levels() {
        let names: Vec<_> = vertices
            .iter()
            .map(|&v| graph.vertex_name(v).into_owned())
            .collect();
        out.push_str(&format!("  Level {level}: {}\n", names.join(", ")));
    }
    if let Some(target) = target {
        out.push('\n');
        out.push_str(&render_traversal_path(graph, result.path_to(target), target, config));
    }
    out
}

/// DFS visit order, timestamps and the cycle flag.
#[must_use]
pub fn render_dfs(
    graph: &Graph,
    result: &DfsResult,
    has_cycle: bool,
    target: Option<VertexId>,
    config: &OutputConfig,
) -> String {
    let mut out = format!(
        "Start vertex: {}\nVisit order: {}\n\nDiscovery and finish times:\n",
        info(&graph.vertex_name(result.start), config),
        format_path(graph, &result.order)
    );
    for (vertex, discovery) in &result.discovery {
        out.push_str(&format!(
            "  {}: discovery={discovery}, finish={}\n",
            graph.vertex_name(*vertex),
            result.finish[vertex]
        ));
    }
    let cycle = if has_cycle {
        error("yes", config)
    } else {
        success("no", config)
    };
    out.push_str(&format!("\nCycle detected: {cycle}\n"));
    if let Some(target) = target {
        out.push('\n');
        out.push_str(&render_traversal_path(graph, result.path_to(target), target, config));
    }
    out
}

fn render_traversal_path(
    graph: &Graph,
    path: Option<Vec<VertexId>>,
    target: VertexId,
    config: &OutputConfig,
) -> String {
    let name = graph.vertex_name(target);
    match path {
        Some(path) => format!("Path to {name}: {}\n", info(&format_path(graph, &path), config)),
        None => format!("Path to {name}: {}\n", error("not reached", config)),
    }
}

/// Negative-cycle notice for Bellman-Ford.
#[must_use]
pub fn render_negative_cycle(config: &OutputConfig) -> String {
    format!(
        "{}\n  The graph contains a cycle whose total weight is negative.\n",
        error("NEGATIVE CYCLE DETECTED", config)
    )
}

/// Summary table of the four algorithms.
#[must_use]
pub fn comparison_table() -> &'static str {
    "\
┌──────────────┬───────────────┬──────────────┬──────────────────────┐
│ Algorithm    │ Complexity    │ Neg. weights │ Best for             │
├──────────────┼───────────────┼──────────────┼──────────────────────┤
│ BFS          │ O(V + E)      │ no           │ Fewest hops          │
│ DFS          │ O(V + E)      │ no           │ Cycles, topology     │
│ Dijkstra     │ O((V+E) log V)│ no           │ Non-negative weights │
│ Bellman-Ford │ O(V * E)      │ yes          │ Negative cycles      │
└──────────────┴───────────────┴──────────────┴──────────────────────┘
"
}
