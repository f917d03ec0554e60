//! Reproducible demo graphs.

use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Default number of vertices in the demo graph
pub const DEFAULT_DEMO_VERTICES: usize = 16;

/// Default RNG seed
pub const DEFAULT_DEMO_SEED: u64 = 42;

/// Parameters for [`generate_demo_graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoOptions {
    /// Number of vertices
    pub vertices: usize,
    /// Insert directed edges
    pub directed: bool,
    /// Random weights; when false every edge weighs 1.0
    pub weighted: bool,
    /// RNG seed, `None` for a fresh random graph each time
    pub seed: Option<u64>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_DEMO_VERTICES,
            directed: false,
            weighted: true,
            seed: Some(DEFAULT_DEMO_SEED),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build a connected demo graph.
///
/// A ring `i -> (i + 1) mod n` guarantees connectivity (weights in `[1, 10)`),
/// then `2 * max(1, n / 2)` random extra edges are attempted (weights in
/// `[1, 15)`); draws that land on a self-loop are skipped. Weights are rounded
/// to two decimals.
#[must_use]
pub fn generate_demo_graph(options: &DemoOptions) -> Graph {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let n = options.vertices;
    let mut graph = Graph::with_vertices(n, options.directed);
    if n == 0 {
        return graph;
    }

    for i in 0..n {
        let weight = if options.weighted {
            round2(rng.gen_range(1.0..10.0))
        } else {
            1.0
        };
        graph.add_edge(i, (i + 1) % n, weight);
    }

    let extra = (n / 2).max(1);
    for _ in 0..extra * 2 {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let weight = if options.weighted {
            round2(rng.gen_range(1.0..15.0))
        } else {
            1.0
        };
        graph.add_edge(u, v, weight);
    }

    tracing::debug!(
        vertices = n,
        edges = graph.insertions().len(),
        seed = ?options.seed,
        "Generated demo graph"
    );
    graph
}
