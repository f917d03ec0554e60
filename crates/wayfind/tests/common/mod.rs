//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use wayfind::Graph;

/// Path of the wayfind binary built by cargo for this test run
pub fn wayfind_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_wayfind"))
}

/// Run the wayfind binary in `dir` with colors disabled
pub fn run_wayfind_in_dir(dir: &Path, args: &[&str]) -> Output {
    Command::new(wayfind_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute wayfind binary")
}

/// Run the wayfind binary in `dir`, killing it after `limit`
///
/// Returns `None` if the process had to be killed.
pub fn run_wayfind_with_timeout(dir: &Path, args: &[&str], limit: Duration) -> Option<Output> {
    let mut child = Command::new(wayfind_binary())
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn wayfind binary");

    let deadline = Instant::now() + limit;
    while child.try_wait().expect("Failed to poll wayfind").is_none() {
        if Instant::now() >= deadline {
            child.kill().expect("Failed to kill wayfind");
            child.wait().expect("Failed to reap wayfind");
            return None;
        }
        thread::sleep(Duration::from_millis(20));
    }
    Some(child.wait_with_output().expect("Failed to collect wayfind output"))
}

/// Build a graph from `(from, to, weight)` triples
pub fn graph_from(directed: bool, edges: &[(usize, usize, f64)]) -> Graph {
    let mut graph = Graph::new(directed);
    for &(from, to, weight) in edges {
        graph.add_edge(from, to, weight);
    }
    graph
}

/// The four-vertex diamond used throughout the tests:
///
/// ```text
/// 0 -4-> 1 -1-> 3
/// 0 -1-> 2 -w-> 1
///        2 -5-> 3
/// ```
pub fn diamond(weight_2_1: f64) -> Graph {
    graph_from(
        true,
        &[
            (0, 1, 4.0),
            (0, 2, 1.0),
            (2, 1, weight_2_1),
            (1, 3, 1.0),
            (2, 3, 5.0),
        ],
    )
}

/// Save `graph` as `name` inside `dir` and return the file path
pub fn write_graph(dir: &Path, name: &str, graph: &Graph) -> PathBuf {
    let path = dir.join(name);
    graph.save_json(&path).expect("Failed to save graph");
    path
}
