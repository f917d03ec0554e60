//! Unweighted traversal: breadth-first and depth-first search.
//!
//! Both searches ignore edge weights and only rely on [`Graph::neighbors`].
//! Neighbors are explored in adjacency insertion order, which makes visit
//! orders deterministic for a given graph.

use crate::graph::{Graph, VertexId};
use crate::path::reconstruct_path;
use crate::shortest::ParentMap;
use petgraph::algo;
use std::collections::{BTreeMap, HashSet, VecDeque};

/// Breadth-first search.
#[derive(Debug, Clone, Copy)]
pub struct Bfs;

/// Result of a breadth-first search from `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsResult {
    /// Start vertex
    pub start: VertexId,
    /// Vertices in the order they were dequeued
    pub order: Vec<VertexId>,
    /// BFS tree predecessor of each visited vertex
    pub parents: ParentMap,
    /// Hop count from `start` for each visited vertex
    pub depths: BTreeMap<VertexId, usize>,
}

impl Bfs {
    /// Run BFS from `start`.
    #[must_use]
    pub fn run(graph: &Graph, start: VertexId) -> BfsResult {
        let mut order = Vec::new();
        let mut parents = ParentMap::from([(start, None)]);
        let mut depths = BTreeMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            let depth = depths[&vertex];

            for neighbor in graph.neighbors(vertex) {
                if !depths.contains_key(&neighbor.vertex) {
                    parents.insert(neighbor.vertex, Some(vertex));
                    depths.insert(neighbor.vertex, depth + 1);
                    queue.push_back(neighbor.vertex);
                }
            }
        }

        tracing::debug!(start, visited = order.len(), "BFS finished");
        BfsResult {
            start,
            order,
            parents,
            depths,
        }
    }
}

impl BfsResult {
    /// Whether `vertex` was reached.
    #[must_use]
    pub fn visited(&self, vertex: VertexId) -> bool {
        self.depths.contains_key(&vertex)
    }

    /// Visited vertices grouped by hop distance, in visit order within a level.
    #[must_use]
    pub fn levels(&self) -> BTreeMap<usize, Vec<VertexId>> {
        let mut levels: BTreeMap<usize, Vec<VertexId>> = BTreeMap::new();
        for vertex in &self.order {
            levels.entry(self.depths[vertex]).or_default().push(*vertex);
        }
        levels
    }

    /// Fewest-hops path from `start` to `target`, or `None` if unreached.
    #[must_use]
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.visited(target)
            .then(|| reconstruct_path(&self.parents, target))
    }
}

/// Depth-first search.
#[derive(Debug, Clone, Copy)]
pub struct Dfs;

/// Result of a depth-first search from `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsResult {
    /// Start vertex
    pub start: VertexId,
    /// Vertices in discovery (pre-)order
    pub order: Vec<VertexId>,
    /// DFS tree predecessor of each visited vertex
    pub parents: ParentMap,
    /// Timestamp when each vertex was first entered
    pub discovery: BTreeMap<VertexId, usize>,
    /// Timestamp when each vertex's neighbors were exhausted
    pub finish: BTreeMap<VertexId, usize>,
}

impl Dfs {
    /// Run DFS from `start`.
    ///
    /// Produces the same order and timestamps as the recursive formulation,
    /// using an explicit stack of `(vertex, next neighbor index)` frames.
    #[must_use]
    pub fn run(graph: &Graph, start: VertexId) -> DfsResult {
        let mut clock = 0usize;
        let mut order = vec![start];
        let mut parents = ParentMap::from([(start, None)]);
        let mut discovery = BTreeMap::new();
        let mut finish = BTreeMap::new();
        let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];

        clock += 1;
        discovery.insert(start, clock);

        while let Some(frame) = stack.last_mut() {
            let vertex = frame.0;
            let Some(neighbor) = graph.neighbors(vertex).get(frame.1) else {
                stack.pop();
                clock += 1;
                finish.insert(vertex, clock);
                continue;
            };
            frame.1 += 1;

            let next = neighbor.vertex;
            if !discovery.contains_key(&next) {
                clock += 1;
                discovery.insert(next, clock);
                parents.insert(next, Some(vertex));
                order.push(next);
                stack.push((next, 0));
            }
        }

        tracing::debug!(start, visited = order.len(), "DFS finished");
        DfsResult {
            start,
            order,
            parents,
            discovery,
            finish,
        }
    }
}

impl DfsResult {
    /// Whether `vertex` was reached.
    #[must_use]
    pub fn visited(&self, vertex: VertexId) -> bool {
        self.discovery.contains_key(&vertex)
    }

    /// Path along the DFS tree from `start` to `target`, or `None` if unreached.
    #[must_use]
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.visited(target)
            .then(|| reconstruct_path(&self.parents, target))
    }
}

/// Stack-based DFS order that marks vertices when pushed.
///
/// Neighbors are pushed in reverse so the first-inserted one is popped first.
/// This order can differ from [`Dfs::run`] because a vertex is claimed by the
/// first vertex that pushes it.
#[must_use]
pub fn dfs_iterative_order(graph: &Graph, start: VertexId) -> Vec<VertexId> {
    let mut order = Vec::new();
    let mut visited = HashSet::from([start]);
    let mut stack = vec![start];

    while let Some(vertex) = stack.pop() {
        order.push(vertex);
        for neighbor in graph.neighbors(vertex).iter().rev() {
            if visited.insert(neighbor.vertex) {
                stack.push(neighbor.vertex);
            }
        }
    }

    order
}

/// Whether the stored adjacency contains a directed cycle.
///
/// Undirected graphs store each edge in both directions, so any undirected
/// edge counts as a cycle here. Self-loops are cycles.
#[must_use]
pub fn has_cycle(graph: &Graph) -> bool {
    let (digraph, _) = graph.to_digraph();
    algo::is_cyclic_directed(&digraph)
}
