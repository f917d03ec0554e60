//! Error types for wayfind operations.
//!
//! Only I/O, parsing and caller-contract violations are errors here. A
//! negative cycle found by Bellman-Ford is an expected outcome and is reported
//! through [`NegativeCycle`](crate::shortest::NegativeCycle); it converts into
//! [`Error::NegativeCycle`] for callers that just want to bail out.

use crate::graph::VertexId;
use crate::shortest::NegativeCycle;
use std::io;
use thiserror::Error;

/// The error type for wayfind operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading or writing a graph or config file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A graph record that cannot be loaded.
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// A vertex id that is not part of the graph.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(VertexId),

    /// A negative edge weight was handed to the validating Dijkstra entry point.
    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        /// Edge source
        from: VertexId,
        /// Edge target
        to: VertexId,
        /// The offending weight
        weight: f64,
    },

    /// Bellman-Ford found a negative-weight cycle.
    #[error(transparent)]
    NegativeCycle(#[from] NegativeCycle),
}

/// A specialized Result type for wayfind operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_weight_display_names_the_edge() {
        let err = Error::NegativeWeight {
            from: 2,
            to: 1,
            weight: -10.0,
        };

        let display = err.to_string();
        assert!(display.contains("2 -> 1"));
        assert!(display.contains("-10"));
    }

    #[test]
    fn negative_cycle_converts_transparently() {
        let err: Error = NegativeCycle { origin: 0 }.into();

        assert!(matches!(err, Error::NegativeCycle(_)));
        assert!(err.to_string().contains("negative-weight cycle"));
    }
}
