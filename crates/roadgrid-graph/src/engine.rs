//! All-pairs shortest paths (Floyd-Warshall).
//!
//! The engine consumes one condition layer and produces a
//! [`DistanceResult`]: the distance matrix plus a successor matrix for
//! path reconstruction. Results are owned snapshots; they are never
//! updated in place and must be recomputed after the network changes.

use roadgrid_core::Condition;
use serde::Serialize;
use tracing::debug;

/// Shortest distances and next hops for one condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceResult {
    condition: Condition,

    /// Store revision this result was computed from.
    revision: u64,

    /// `distances[i][j]`, infinite when `j` is unreachable from `i`.
    distances: Vec<Vec<f64>>,

    /// `successors[i][j]`: the next stop after `i` on the way to `j`.
    /// `None` on the diagonal and for unreachable pairs.
    successors: Vec<Vec<Option<usize>>>,
}

impl DistanceResult {
    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of locations covered.
    pub fn size(&self) -> usize {
        self.distances.len()
    }

    /// Shortest travel time from `i` to `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i][j]
    }

    /// Next stop after `i` when travelling optimally towards `j`.
    pub fn successor(&self, i: usize, j: usize) -> Option<usize> {
        self.successors[i][j]
    }

    pub fn is_reachable(&self, i: usize, j: usize) -> bool {
        self.distances[i][j].is_finite()
    }

    pub fn distances(&self) -> &[Vec<f64>] {
        &self.distances
    }

    pub fn successors(&self) -> &[Vec<Option<usize>>] {
        &self.successors
    }
}

/// Runs Floyd-Warshall over one adjacency layer.
///
/// Relaxation only happens on strict improvement, and the loops run
/// `k`, then `i`, then `j`, so ties keep the first path found. When a
/// pair improves through `k`, its successor becomes the successor of
/// `i -> k`, which makes path reconstruction a simple forward walk.
///
/// Weights are assumed to be non-negative; the adjacency store rejects
/// anything else.
pub fn floyd_warshall(layer: &[Vec<f64>], condition: Condition, revision: u64) -> DistanceResult {
    let n = layer.len();
    debug!("Running Floyd-Warshall over {} locations ({})", n, condition);

    let mut distances: Vec<Vec<f64>> = layer.to_vec();
    let mut successors: Vec<Vec<Option<usize>>> = layer
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, w)| (i != j && w.is_finite()).then_some(j))
                .collect()
        })
        .collect();

    for k in 0..n {
        for i in 0..n {
            // Row `k` and column `k` do not change while `k` is the
            // intermediate, so both reads are safe to hoist.
            let d_ik = distances[i][k];
            if !d_ik.is_finite() {
                continue;
            }
            for j in 0..n {
                let d_kj = distances[k][j];
                if !d_kj.is_finite() {
                    continue;
                }
                let through = d_ik + d_kj;
                if through < distances[i][j] {
                    distances[i][j] = through;
                    successors[i][j] = successors[i][k];
                }
            }
        }
    }

    DistanceResult {
        condition,
        revision,
        distances,
        successors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::NO_EDGE;

    const INF: f64 = NO_EDGE;

    /// A=0, B=1, C=2 with A->B=10, B->C=5, A->C=20, C->A=18.
    fn triangle() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 10.0, 20.0],
            vec![INF, 0.0, 5.0],
            vec![18.0, INF, 0.0],
        ]
    }

    #[test]
    fn test_relaxes_through_intermediate() {
        let result = floyd_warshall(&triangle(), Condition::Normal, 0);

        assert_eq!(result.distance(0, 2), 15.0);
        assert_eq!(result.successor(0, 2), Some(1));
        assert_eq!(result.distance(1, 0), 23.0);
        assert_eq!(result.successor(1, 0), Some(2));
        assert_eq!(result.distance(2, 1), 28.0);
        assert_eq!(result.successor(2, 1), Some(0));
    }

    #[test]
    fn test_diagonal_and_unreachable() {
        let layer = vec![vec![0.0, 4.0], vec![INF, 0.0]];
        let result = floyd_warshall(&layer, Condition::Storm, 9);

        assert_eq!(result.distance(0, 0), 0.0);
        assert_eq!(result.successor(0, 0), None);
        assert!(!result.is_reachable(1, 0));
        assert_eq!(result.successor(1, 0), None);
        assert_eq!(result.condition(), Condition::Storm);
        assert_eq!(result.revision(), 9);
    }

    #[test]
    fn test_successor_is_first_hop_not_midpoint() {
        // 0 -> 1 -> 2 -> 3, each 1; direct 0 -> 3 is 10.
        let layer = vec![
            vec![0.0, 1.0, INF, 10.0],
            vec![INF, 0.0, 1.0, INF],
            vec![INF, INF, 0.0, 1.0],
            vec![INF, INF, INF, 0.0],
        ];
        let result = floyd_warshall(&layer, Condition::Normal, 0);

        assert_eq!(result.distance(0, 3), 3.0);
        assert_eq!(result.successor(0, 3), Some(1));
        assert_eq!(result.successor(1, 3), Some(2));
        assert_eq!(result.successor(2, 3), Some(3));
    }

    #[test]
    fn test_ties_keep_earliest_path() {
        // Two equal routes 0 -> 1 -> 3 and 0 -> 2 -> 3. Intermediate 1 is
        // considered first, and 2 is not strictly better.
        let layer = vec![
            vec![0.0, 1.0, 1.0, INF],
            vec![INF, 0.0, INF, 1.0],
            vec![INF, INF, 0.0, 1.0],
            vec![INF, INF, INF, 0.0],
        ];
        let result = floyd_warshall(&layer, Condition::Normal, 0);

        assert_eq!(result.distance(0, 3), 2.0);
        assert_eq!(result.successor(0, 3), Some(1));
    }

    #[test]
    fn test_empty_layer() {
        let result = floyd_warshall(&[], Condition::Normal, 0);
        assert_eq!(result.size(), 0);
    }

    #[test]
    fn test_matches_petgraph() {
        use petgraph::algo::floyd_warshall as oracle;
        use petgraph::graph::{DiGraph, NodeIndex};
        use petgraph::visit::EdgeRef;

        let layer = triangle();
        let mut graph = DiGraph::<(), f64>::new();
        let nodes: Vec<NodeIndex> = (0..layer.len()).map(|_| graph.add_node(())).collect();
        for (i, row) in layer.iter().enumerate() {
            for (j, &w) in row.iter().enumerate() {
                if i != j && w.is_finite() {
                    graph.add_edge(nodes[i], nodes[j], w);
                }
            }
        }

        let expected = oracle(&graph, |e| *e.weight()).unwrap();
        let result = floyd_warshall(&layer, Condition::Normal, 0);

        for i in 0..layer.len() {
            for j in 0..layer.len() {
                // petgraph reports unreachable pairs as the type's maximum.
                let want = match expected.get(&(nodes[i], nodes[j])) {
                    Some(&d) if d < f64::MAX => d,
                    _ => f64::INFINITY,
                };
                assert_eq!(result.distance(i, j), want, "pair ({}, {})", i, j);
            }
        }
    }
}
