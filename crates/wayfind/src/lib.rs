//! Wayfind - graph traversal and shortest-path algorithms.
//!
//! This crate provides breadth-first search, depth-first search, Dijkstra's
//! algorithm and Bellman-Ford over a weighted adjacency-list [`Graph`], plus
//! the CLI that drives them.
//!
//! # Example
//!
//! ```
//! use wayfind::{Graph, dijkstra, reconstruct_path};
//!
//! let mut graph = Graph::new(true);
//! graph.add_edge(0, 1, 4.0);
//! graph.add_edge(0, 2, 1.0);
//! graph.add_edge(2, 1, 1.0);
//!
//! let paths = dijkstra(&graph, 0);
//! assert_eq!(paths.distance(1), Some(2.0));
//! assert_eq!(reconstruct_path(&paths.parents, 1), vec![0, 2, 1]);
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod config;
pub mod demo;
pub mod error;
pub mod graph;
pub mod path;
pub mod shortest;
pub mod traversal;

// Public CLI module (needed by binary)
pub mod cli;
pub mod output;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphRecord, Neighbor, VertexId};
pub use path::reconstruct_path;
pub use shortest::{
    BellmanFordOptions, DistanceMap, NegativeCycle, ParentMap, ShortestPaths, bellman_ford,
    bellman_ford_with, dijkstra, dijkstra_checked,
};
pub use traversal::{Bfs, BfsResult, Dfs, DfsResult, dfs_iterative_order, has_cycle};
