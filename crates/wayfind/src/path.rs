//! Path reconstruction from parent maps.

use crate::graph::VertexId;
use crate::shortest::ParentMap;

/// Follow parent links from `target` back to the root and return the path
/// from root to target.
///
/// Returns an empty vector when `target` is not a key of `parents` ("no path
/// recorded"). When `target` is the source itself the result is `[source]`.
///
/// The walk stops after `parents.len()` steps, so a malformed map with a
/// parent cycle yields a truncated path instead of looping forever.
#[must_use]
pub fn reconstruct_path(parents: &ParentMap, target: VertexId) -> Vec<VertexId> {
    if !parents.contains_key(&target) {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while let Some(&Some(parent)) = parents.get(&current) {
        if path.len() > parents.len() {
            tracing::warn!(target_vertex = target, "Parent map contains a cycle");
            break;
        }
        path.push(parent);
        current = parent;
    }

    path.reverse();
    path
}
