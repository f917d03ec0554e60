//! JSON persistence for [`Graph`].
//!
//! The on-disk record lists edge *insertions*, not adjacency entries, so an
//! undirected graph loads back with the same adjacency it was saved with.

use super::{Edge, Graph, VertexId};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Largest declared vertex count accepted from a record.
///
/// Declared vertices are materialized one by one, so the count read from a
/// file is bounded before any allocation.
pub const MAX_RECORD_VERTICES: usize = 1_000_000;

/// Serializable snapshot of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    /// Number of declared vertices (`0..vertices`)
    pub vertices: usize,

    /// Whether edges are directed
    pub directed: bool,

    /// Optional display names keyed by vertex id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub vertex_names: BTreeMap<VertexId, String>,

    /// Edges in insertion order
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Snapshot this graph into a serializable record.
    #[must_use]
    pub fn to_record(&self) -> GraphRecord {
        GraphRecord {
            vertices: self.declared,
            directed: self.directed,
            vertex_names: self.names.clone(),
            edges: self.insertions.clone(),
        }
    }

    /// Rebuild a graph from a record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGraph`] if the record declares more than
    /// [`MAX_RECORD_VERTICES`] vertices.
    pub fn from_record(record: &GraphRecord) -> Result<Self> {
        if record.vertices > MAX_RECORD_VERTICES {
            return Err(Error::InvalidGraph(format!(
                "declares {} vertices, limit is {MAX_RECORD_VERTICES}",
                record.vertices
            )));
        }

        let mut graph = Self::with_vertices(record.vertices, record.directed);
        for (&vertex, name) in &record.vertex_names {
            graph.set_vertex_name(vertex, name.clone());
        }
        for edge in &record.edges {
            graph.add_edge(edge.from, edge.to, edge.weight);
        }
        Ok(graph)
    }

    /// Write the graph as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.to_record())?;
        writer.flush()?;
        tracing::debug!(path = %path.display(), edges = self.insertions.len(), "Saved graph");
        Ok(())
    }

    /// Load a graph from a JSON file written by [`Graph::save_json`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid record, or
    /// declares more than [`MAX_RECORD_VERTICES`] vertices.
    pub fn load_json(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let record: GraphRecord = serde_json::from_reader(reader)?;
        let graph = Self::from_record(&record)?;
        tracing::debug!(
            path = %path.display(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Loaded graph"
        );
        Ok(graph)
    }
}
