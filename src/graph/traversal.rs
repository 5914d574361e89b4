//! Graph traversal algorithms (BFS shortest path).

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// Shortest path (fewest edges) from `from` to `to` via level-synchronous
/// breadth-first search over the directed adjacency relation.
///
/// Returns `Ok(Some(path))` with the path ordered from `from` to `to`,
/// each vertex appearing exactly once and every consecutive pair being an
/// edge of the graph. When several shortest paths exist, which one is
/// returned depends on set iteration order and is unspecified. Returns
/// `Ok(None)` when `to` is unreachable from `from`.
///
/// A query from a vertex to itself returns a single-element path, whether
/// or not the vertex has any edges.
///
/// Fails with [`GraphError::InvalidArgument`] if either vertex is not in
/// the graph.
pub fn shortest_path<'a, V: Eq + Hash + Clone>(
    graph: &'a Graph<V>,
    from: &'a V,
    to: &V,
) -> GraphResult<Option<Vec<V>>> {
    if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
        return Err(GraphError::InvalidArgument(
            "both vertices must be in the graph",
        ));
    }
    if from == to {
        return Ok(Some(vec![from.clone()]));
    }

    // Each discovered vertex mapped to its BFS predecessor; `from` is the
    // root and has none. Presence in the map doubles as the visited set.
    let mut predecessor: HashMap<&'a V, Option<&'a V>> = HashMap::new();
    predecessor.insert(from, None);

    let mut frontier: Vec<&'a V> = vec![from];
    let mut depth = 0u32;
    while !frontier.is_empty() {
        depth += 1;
        log::trace!("bfs level {}: {} vertices", depth, frontier.len());
        let mut next: Vec<&'a V> = Vec::new();
        for &vertex in &frontier {
            let Some(successors) = graph.neighbors(vertex) else {
                continue;
            };
            for successor in successors {
                if predecessor.contains_key(successor) {
                    continue;
                }
                if successor == to {
                    log::debug!("path found at depth {}", depth);
                    return Ok(Some(reconstruct(&predecessor, vertex, to)));
                }
                predecessor.insert(successor, Some(vertex));
                next.push(successor);
            }
        }
        frontier = next;
    }

    log::debug!("no path after {} levels", depth);
    Ok(None)
}

/// Walk predecessors back from `last` (the vertex whose successor is the
/// target) to the root, then append the target.
fn reconstruct<'a, V: Eq + Hash + Clone>(
    predecessor: &HashMap<&'a V, Option<&'a V>>,
    last: &'a V,
    to: &V,
) -> Vec<V> {
    let mut path: Vec<V> = vec![to.clone()];
    let mut current = Some(last);
    while let Some(vertex) = current {
        path.push(vertex.clone());
        current = predecessor.get(vertex).copied().flatten();
    }
    path.reverse();
    path
}
