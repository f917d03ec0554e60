//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `demo`: Generate the demo graph and run all four algorithms
//! - `generate`: Write a demo graph to a JSON file
//! - `show`: Print a graph's adjacency lists
//! - `bfs` / `dfs`: Unweighted traversal
//! - `dijkstra` / `bellman-ford`: Single-source shortest paths
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format
//! - `--config`: YAML configuration file (default `./wayfind.yaml`)
//! - `-v`: Increase log verbosity
//!
//! # Example
//!
//! ```bash
//! wayfind generate --output graph.json --vertices 10 --directed
//! wayfind dijkstra graph.json --source 0 --target 7
//! wayfind bellman-ford graph.json --json
//! ```

mod args;
mod execute;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{DemoArgs, DemoGraphArgs, DijkstraArgs, GenerateArgs, SearchArgs, ShowArgs};

/// Wayfind - graph traversal and shortest paths
///
/// Runs BFS, DFS, Dijkstra and Bellman-Ford over graphs stored as JSON.
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to ./wayfind.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a demo graph and run every algorithm on it
    ///
    /// Builds a seeded random graph (a ring plus extra random edges) and runs
    /// BFS, DFS, Dijkstra and Bellman-Ford from vertex 0.
    Demo(DemoArgs),

    /// Write a demo graph to a JSON file
    Generate(GenerateArgs),

    /// Show a graph's adjacency lists
    Show(ShowArgs),

    /// Breadth-first search
    Bfs(SearchArgs),

    /// Depth-first search with discovery/finish times and cycle detection
    Dfs(SearchArgs),

    /// Shortest paths with Dijkstra's algorithm (non-negative weights)
    Dijkstra(DijkstraArgs),

    /// Shortest paths with Bellman-Ford (negative weights allowed)
    BellmanFord(SearchArgs),
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default log filter for the chosen verbosity.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
