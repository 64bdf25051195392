//! Single-source shortest paths over a [`GraphModel`].
//!
//! Dense-matrix variant of Dijkstra's algorithm: O(N²) per run, no heap.
//! Each call owns its scratch state, so runs over different graphs can
//! proceed in parallel (see [`shortest_paths_parallel`]).
//!
//! # Determinism
//!
//! The next node to finalize is picked by a linear scan in index order that
//! only replaces the current candidate on a strictly smaller distance, so
//! among equally distant nodes the lowest index always wins. Path output is
//! reproducible run to run.

use rayon::prelude::*;

use crate::error::{GraphError, Result};
use crate::graph::GraphModel;
use crate::types::{Distance, PathResult, ShortestPaths};

/// Compute the shortest path from `source` to every node of `graph`.
///
/// Destinations that cannot be reached come back as
/// [`Distance::Unreachable`] with an empty path; that is a normal outcome,
/// not an error. The only failure is a `source` outside the graph.
///
/// # Example
///
/// ```
/// use travel_core::{shortest_paths, Distance, GraphModel};
///
/// let graph = GraphModel::from_rows(&[[0, 4, 9], [4, 0, 3], [9, 3, 0]]).unwrap();
/// let paths = shortest_paths(&graph, 0).unwrap();
/// assert_eq!(paths[2].total_weight, Distance::Finite(7.0));
/// assert_eq!(paths[2].path, vec![0, 1, 2]);
/// ```
pub fn shortest_paths(graph: &GraphModel, source: usize) -> Result<ShortestPaths> {
    let n = graph.node_count();
    if source >= n {
        return Err(GraphError::out_of_range(source, n));
    }

    tracing::debug!(source, nodes = n, "computing shortest paths");

    let mut distance = vec![Distance::Unreachable; n];
    let mut visited = vec![false; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    distance[source] = Distance::Finite(0.0);
    let mut relaxations = 0usize;

    for _ in 1..n {
        let Some((u, base)) = closest_unvisited(&distance, &visited) else {
            tracing::debug!("no reachable unvisited nodes left, stopping early");
            break;
        };

        // Finalized: distance[u] never changes again.
        visited[u] = true;

        for v in 0..n {
            if visited[v] || !graph.has_edge(u, v) {
                continue;
            }
            let candidate = Distance::Finite(base + graph.weight(u, v));
            if candidate < distance[v] {
                distance[v] = candidate;
                predecessor[v] = Some(u);
                relaxations += 1;
            }
        }
    }

    tracing::debug!(
        source,
        finalized = visited.iter().filter(|&&v| v).count(),
        relaxations,
        "shortest paths done"
    );

    let results = (0..n)
        .map(|destination| PathResult {
            destination,
            total_weight: distance[destination],
            path: reconstruct_path(&predecessor, distance[destination], destination),
        })
        .collect();

    Ok(ShortestPaths::new(source, results))
}

/// Run [`shortest_paths`] from the same `source` over several graphs at once.
///
/// Results come back in the order of `graphs`. Fails with the first error
/// encountered if `source` is out of range for any graph.
pub fn shortest_paths_parallel(
    graphs: &[&GraphModel],
    source: usize,
) -> Result<Vec<ShortestPaths>> {
    graphs
        .par_iter()
        .map(|graph| shortest_paths(graph, source))
        .collect()
}

/// Unvisited node with the smallest finite distance, lowest index on ties.
fn closest_unvisited(distance: &[Distance], visited: &[bool]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, d) in distance.iter().enumerate() {
        if visited[idx] {
            continue;
        }
        if let Distance::Finite(w) = *d {
            if best.map_or(true, |(_, min)| w < min) {
                best = Some((idx, w));
            }
        }
    }
    best
}

/// Walk predecessor links back from `destination` and reverse them.
fn reconstruct_path(
    predecessor: &[Option<usize>],
    total: Distance,
    destination: usize,
) -> Vec<usize> {
    if !total.is_reachable() {
        return Vec::new();
    }

    let mut path = vec![destination];
    let mut current = destination;
    while let Some(prev) = predecessor[current] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
