//! CLI argument structs for all commands.

use clap::Parser;
use std::path::PathBuf;

use crate::demo::DemoOptions;
use crate::graph::VertexId;

/// Overrides for demo graph generation, layered over the config file
#[derive(Parser, Debug, Clone, Default)]
pub struct DemoGraphArgs {
    /// Number of vertices
    #[arg(short = 'n', long)]
    pub vertices: Option<usize>,

    /// Generate a directed graph
    #[arg(long)]
    pub directed: bool,

    /// Give every edge weight 1
    #[arg(long)]
    pub unweighted: bool,

    /// RNG seed for reproducible graphs
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DemoGraphArgs {
    /// Apply these overrides on top of `base`.
    #[must_use]
    pub fn apply(&self, base: DemoOptions) -> DemoOptions {
        DemoOptions {
            vertices: self.vertices.unwrap_or(base.vertices),
            directed: base.directed || self.directed,
            weighted: base.weighted && !self.unweighted,
            seed: self.seed.or(base.seed),
        }
    }
}

/// Arguments for the `demo` command
#[derive(Parser, Debug, Clone)]
pub struct DemoArgs {
    /// Demo graph parameters
    #[command(flatten)]
    pub graph: DemoGraphArgs,

    /// Vertex whose path is shown for the shortest-path algorithms
    #[arg(short, long, default_value = "7")]
    pub target: VertexId,
}

/// Arguments for the `generate` command
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// File to write the graph JSON to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Demo graph parameters
    #[command(flatten)]
    pub graph: DemoGraphArgs,
}

/// Arguments for the `show` command
#[derive(Parser, Debug, Clone)]
pub struct ShowArgs {
    /// Graph JSON file
    pub graph: PathBuf,
}

/// Arguments shared by every search command
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Graph JSON file
    pub graph: PathBuf,

    /// Source vertex
    #[arg(short, long, default_value = "0")]
    pub source: VertexId,

    /// Also print the path to this vertex
    #[arg(short, long)]
    pub target: Option<VertexId>,
}

/// Arguments for the `dijkstra` command
#[derive(Parser, Debug, Clone)]
pub struct DijkstraArgs {
    /// Graph, source and target
    #[command(flatten)]
    pub search: SearchArgs,

    /// Skip the negative-weight check
    ///
    /// A graph with a reachable negative cycle then never finishes.
    #[arg(long)]
    pub unchecked: bool,
}
