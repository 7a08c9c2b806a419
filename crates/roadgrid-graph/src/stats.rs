//! Network statistics.
//!
//! Summaries of one condition layer: size, density, connectivity,
//! closeness centrality and degree spread.

use crate::engine::DistanceResult;
use crate::error::Result;
use crate::network::RoadNetwork;
use petgraph::algo::tarjan_scc;
use roadgrid_core::Condition;
use serde::Serialize;

/// Location with the highest closeness centrality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosenessLeader {
    pub location: String,
    pub score: f64,
}

/// Summary of one condition layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub condition: Condition,
    pub location_count: usize,
    pub connection_count: usize,
    /// `E / (V * (V - 1))`, zero for fewer than two locations.
    pub density: f64,
    pub strongly_connected: bool,
    pub component_count: usize,
    pub closeness_leader: Option<ClosenessLeader>,
    pub average_degree: f64,
    pub max_degree: usize,
    pub min_degree: usize,
}

impl NetworkStats {
    /// Returns a summary suitable for CLI output.
    pub fn summary(&self) -> String {
        format!(
            "{} locations, {} connections, density {:.4}, {} strongly connected component(s)",
            self.location_count, self.connection_count, self.density, self.component_count
        )
    }
}

/// Closeness centrality of every location, from its incoming distances.
///
/// Uses the Wasserman-Faust scaling so that locations reached from only
/// part of the network are not favoured: `(r / (n - 1)) * (r / sum)` where
/// `r` is the number of locations that reach it and `sum` their total
/// distance.
pub fn closeness_centrality(result: &DistanceResult) -> Vec<f64> {
    let n = result.size();
    if n < 2 {
        return vec![0.0; n];
    }

    let distances = result.distances();
    (0..n)
        .map(|j| {
            let (reachable, total) = (0..n)
                .map(|i| (i, distances[i][j]))
                .filter(|&(i, d)| i != j && d.is_finite())
                .fold((0usize, 0.0_f64), |(r, s), (_, d)| (r + 1, s + d));

            if total > 0.0 {
                let r = reachable as f64;
                (r / (n - 1) as f64) * (r / total)
            } else {
                0.0
            }
        })
        .collect()
}

impl RoadNetwork {
    /// Computes statistics for the condition `result` was computed under.
    pub fn statistics(&self, result: &DistanceResult) -> Result<NetworkStats> {
        self.check_result(result)?;
        let condition = result.condition();
        let n = self.location_count();
        let connections = self.connection_count(condition);

        let density = if n > 1 {
            connections as f64 / (n * (n - 1)) as f64
        } else {
            0.0
        };

        let components = tarjan_scc(&self.layer_graph(condition)).len();

        let closeness = closeness_centrality(result);
        let closeness_leader = closeness
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((i, score)),
            })
            .map(|(i, score)| ClosenessLeader {
                location: self.registry().name_of(i).to_string(),
                score,
            });

        let store = self.store();
        let degrees: Vec<usize> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        usize::from(store.has_edge(condition, i, j))
                            + usize::from(store.has_edge(condition, j, i))
                    })
                    .sum()
            })
            .collect();

        let average_degree = if n > 0 {
            degrees.iter().sum::<usize>() as f64 / n as f64
        } else {
            0.0
        };

        Ok(NetworkStats {
            condition,
            location_count: n,
            connection_count: connections,
            density,
            strongly_connected: components == 1,
            component_count: components,
            closeness_leader,
            average_degree,
            max_degree: degrees.iter().copied().max().unwrap_or(0),
            min_degree: degrees.iter().copied().min().unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadgrid_core::{EdgeRecord, Weights};

    fn worked_example() -> RoadNetwork {
        RoadNetwork::from_records([
            EdgeRecord::new("A", "B", Weights::uniform(10.0)),
            EdgeRecord::new("B", "C", Weights::uniform(5.0)),
            EdgeRecord::new("A", "C", Weights::uniform(20.0)),
            EdgeRecord::new("C", "A", Weights::uniform(18.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_statistics_of_strongly_connected_layer() {
        let network = worked_example();
        let result = network.compute(Condition::Normal);
        let stats = network.statistics(&result).unwrap();

        assert_eq!(stats.location_count, 3);
        assert_eq!(stats.connection_count, 4);
        assert!((stats.density - 4.0 / 6.0).abs() < 1e-12);
        assert!(stats.strongly_connected);
        assert_eq!(stats.component_count, 1);
        // Degrees: A = 3, B = 2, C = 3.
        assert_eq!(stats.max_degree, 3);
        assert_eq!(stats.min_degree, 2);
        assert!((stats.average_degree - 8.0 / 3.0).abs() < 1e-12);
        // C is reached from A and B in 15 + 5 = 20, the smallest total.
        assert_eq!(stats.closeness_leader.unwrap().location, "C");
    }

    #[test]
    fn test_statistics_after_interruption() {
        let mut network = worked_example();
        network.remove_connection("C", "A").unwrap();

        let result = network.compute(Condition::Normal);
        let stats = network.statistics(&result).unwrap();

        assert!(!stats.strongly_connected);
        assert_eq!(stats.component_count, 3);
        assert!(stats.summary().contains("3 strongly connected"));
    }

    #[test]
    fn test_closeness_penalises_partial_reach() {
        let network = RoadNetwork::from_records([
            EdgeRecord::new("A", "B", Weights::uniform(1.0)),
            EdgeRecord::new("B", "A", Weights::uniform(1.0)),
            EdgeRecord::new("B", "C", Weights::uniform(1.0)),
        ])
        .unwrap();
        let result = network.compute(Condition::Normal);
        let closeness = closeness_centrality(&result);

        // C is reached from A at 2 and from B at 1; A and B from one location each.
        assert!((closeness[2] - 2.0 / 3.0).abs() < 1e-12);
        assert!((closeness[0] - 0.5).abs() < 1e-12);
        assert!((closeness[1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_closeness_of_unreached_location_is_zero() {
        let network = RoadNetwork::from_records([
            EdgeRecord::new("A", "B", Weights::uniform(1.0)),
            EdgeRecord::new("B", "C", Weights::uniform(1.0)),
        ])
        .unwrap();
        let result = network.compute(Condition::Normal);
        let closeness = closeness_centrality(&result);

        assert_eq!(closeness[0], 0.0);
        assert!(closeness[2] > closeness[1]);
    }
}
