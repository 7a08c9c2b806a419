//! Condition-layered adjacency store.
//!
//! One dense V x V matrix of direct travel times per condition. Missing
//! edges hold the sentinel `f64::INFINITY`; the diagonal is always zero.
//! Edges are directed, so `[i][j]` and `[j][i]` are independent.

use crate::error::{GraphError, Result};
use roadgrid_core::{Condition, Weights};
use tracing::debug;

/// Travel time used for "no direct edge".
pub const NO_EDGE: f64 = f64::INFINITY;

/// Direct travel times for every condition layer.
#[derive(Debug, Clone)]
pub struct AdjacencyStore {
    size: usize,

    /// `layers[condition][i][j]`.
    layers: [Vec<Vec<f64>>; Condition::COUNT],

    /// Bumped on every mutation. Distance results remember the revision
    /// they were computed from.
    revision: u64,
}

impl AdjacencyStore {
    /// Allocates `size` x `size` layers with no edges.
    pub fn new(size: usize) -> Self {
        let empty = || {
            (0..size)
                .map(|i| {
                    let mut row = vec![NO_EDGE; size];
                    row[i] = 0.0;
                    row
                })
                .collect::<Vec<_>>()
        };

        Self {
            size,
            layers: [empty(), empty(), empty(), empty()],
            revision: 0,
        }
    }

    /// Number of locations per side.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The full matrix for one condition.
    pub fn layer(&self, condition: Condition) -> &[Vec<f64>] {
        &self.layers[condition.index()]
    }

    /// Direct travel time from `i` to `j`, `NO_EDGE` when absent.
    pub fn weight(&self, condition: Condition, i: usize, j: usize) -> f64 {
        self.layers[condition.index()][i][j]
    }

    /// Whether a direct edge `i -> j` exists under the condition.
    pub fn has_edge(&self, condition: Condition, i: usize, j: usize) -> bool {
        i != j && self.weight(condition, i, j).is_finite()
    }

    /// Number of directed edges in one layer (self-loops excluded).
    pub fn edge_count(&self, condition: Condition) -> usize {
        self.layer(condition)
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(j, w)| i != j && w.is_finite())
                    .count()
            })
            .sum()
    }

    /// Overwrites the directed entry `i -> j` in one layer.
    ///
    /// `NO_EDGE` removes the edge. Negative or NaN weights are rejected.
    pub fn set_edge(&mut self, condition: Condition, i: usize, j: usize, weight: f64) -> Result<()> {
        self.check_bounds(i, j)?;
        validate_weight(weight)?;
        if i == j {
            return Err(GraphError::InvalidInput(
                "an edge cannot start and end at the same location".to_string(),
            ));
        }

        self.layers[condition.index()][i][j] = weight;
        self.revision += 1;
        debug!("set {} -> {} = {} ({})", i, j, weight, condition);
        Ok(())
    }

    /// Writes `i -> j` in every layer at once.
    ///
    /// All four weights are validated before anything is written.
    pub fn set_edge_all_conditions(&mut self, i: usize, j: usize, weights: Weights) -> Result<()> {
        self.check_bounds(i, j)?;
        if let Some((condition, w)) = weights.first_invalid() {
            return Err(GraphError::InvalidInput(format!(
                "{} travel time must be non-negative, got {}",
                condition, w
            )));
        }
        if i == j {
            return Err(GraphError::InvalidInput(
                "an edge cannot start and end at the same location".to_string(),
            ));
        }

        for condition in Condition::ALL {
            self.layers[condition.index()][i][j] = weights.get(condition);
        }
        self.revision += 1;
        debug!("set {} -> {} = {:?}", i, j, weights.to_array());
        Ok(())
    }

    /// Removes `i -> j` from every layer. The reverse edge is untouched.
    pub fn clear_edge(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_bounds(i, j)?;
        if i == j {
            return Ok(());
        }

        for layer in self.layers.iter_mut() {
            layer[i][j] = NO_EDGE;
        }
        self.revision += 1;
        debug!("cleared {} -> {} in all layers", i, j);
        Ok(())
    }

    fn check_bounds(&self, i: usize, j: usize) -> Result<()> {
        if i >= self.size || j >= self.size {
            return Err(GraphError::InvalidInput(format!(
                "edge {} -> {} is outside a network of {} locations",
                i, j, self.size
            )));
        }
        Ok(())
    }
}

fn validate_weight(weight: f64) -> Result<()> {
    if weight.is_nan() || weight < 0.0 {
        return Err(GraphError::InvalidInput(format!(
            "travel time must be non-negative, got {}",
            weight
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_has_only_diagonal() {
        let store = AdjacencyStore::new(3);

        for condition in Condition::ALL {
            for i in 0..3 {
                for j in 0..3 {
                    let expected = if i == j { 0.0 } else { NO_EDGE };
                    assert_eq!(store.weight(condition, i, j), expected);
                }
            }
            assert_eq!(store.edge_count(condition), 0);
        }
    }

    #[test]
    fn test_set_edge_is_directed_and_per_layer() {
        let mut store = AdjacencyStore::new(2);
        store.set_edge(Condition::Rain, 0, 1, 7.5).unwrap();

        assert_eq!(store.weight(Condition::Rain, 0, 1), 7.5);
        assert_eq!(store.weight(Condition::Rain, 1, 0), NO_EDGE);
        assert_eq!(store.weight(Condition::Normal, 0, 1), NO_EDGE);
        assert!(store.has_edge(Condition::Rain, 0, 1));
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let mut store = AdjacencyStore::new(2);

        assert!(matches!(
            store.set_edge(Condition::Normal, 0, 1, -1.0),
            Err(GraphError::InvalidInput(_))
        ));
        assert!(store.set_edge(Condition::Normal, 0, 1, f64::NAN).is_err());

        let bad = Weights::new(1.0, 2.0, -3.0, 4.0);
        assert!(store.set_edge_all_conditions(0, 1, bad).is_err());
        // Nothing was written.
        assert_eq!(store.weight(Condition::Normal, 0, 1), NO_EDGE);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_infinite_weight_removes_edge() {
        let mut store = AdjacencyStore::new(2);
        store.set_edge(Condition::Snow, 0, 1, 3.0).unwrap();
        store.set_edge(Condition::Snow, 0, 1, NO_EDGE).unwrap();
        assert!(!store.has_edge(Condition::Snow, 0, 1));
    }

    #[test]
    fn test_clear_edge_hits_every_layer_one_direction() {
        let mut store = AdjacencyStore::new(2);
        store
            .set_edge_all_conditions(0, 1, Weights::new(1.0, 2.0, 3.0, 4.0))
            .unwrap();
        store
            .set_edge_all_conditions(1, 0, Weights::uniform(5.0))
            .unwrap();

        store.clear_edge(0, 1).unwrap();

        for condition in Condition::ALL {
            assert!(!store.has_edge(condition, 0, 1));
            assert_eq!(store.weight(condition, 1, 0), 5.0);
        }
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut store = AdjacencyStore::new(2);
        assert!(store.clear_edge(0, 2).is_err());
        assert!(store.set_edge(Condition::Normal, 3, 0, 1.0).is_err());
    }
}
