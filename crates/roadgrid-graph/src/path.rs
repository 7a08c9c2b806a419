//! Path reconstruction from a successor matrix.

use crate::engine::DistanceResult;
use crate::error::{GraphError, Result};
use crate::registry::LocationRegistry;
use serde::Serialize;

/// A shortest route between two locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Stops in travel order, both endpoints included.
    pub stops: Vec<String>,
    /// Total travel time.
    pub total_time: f64,
}

impl Route {
    /// Number of legs travelled.
    pub fn legs(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stops.join(" -> "))
    }
}

/// Walks the successor matrix from `origin` to `destination`.
///
/// Returns the index sequence, both endpoints included, or `None` when
/// the destination is unreachable. `origin == destination` yields a
/// single stop.
pub fn walk(result: &DistanceResult, origin: usize, destination: usize) -> Option<Vec<usize>> {
    if origin == destination {
        return Some(vec![origin]);
    }

    let mut stops = vec![origin];
    let mut current = origin;
    // A shortest path visits each location at most once.
    for _ in 0..result.size() {
        current = result.successor(current, destination)?;
        stops.push(current);
        if current == destination {
            return Some(stops);
        }
    }
    None
}

/// Reconstructs the named stops between two locations.
///
/// Fails with `NoSuchLocation` for unknown names, `NoPathExists` when the
/// destination cannot be reached, and `InvalidInput` when `result` was not
/// computed over `registry`'s locations.
pub fn reconstruct_path(
    registry: &LocationRegistry,
    origin: &str,
    destination: &str,
    result: &DistanceResult,
) -> Result<Vec<String>> {
    if result.size() != registry.len() {
        return Err(GraphError::InvalidInput(format!(
            "distance result covers {} locations, registry has {}",
            result.size(),
            registry.len()
        )));
    }

    let from = registry.require(origin)?;
    let to = registry.require(destination)?;

    let indexes = walk(result, from, to).ok_or_else(|| GraphError::NoPathExists {
        origin: origin.to_string(),
        destination: destination.to_string(),
    })?;

    Ok(indexes
        .into_iter()
        .map(|i| registry.name_of(i).to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::NO_EDGE;
    use crate::engine::floyd_warshall;
    use roadgrid_core::Condition;

    fn fixture() -> (LocationRegistry, DistanceResult) {
        let registry = LocationRegistry::build(["A", "B", "C", "D"]).unwrap();
        let layer = vec![
            vec![0.0, 10.0, 20.0, NO_EDGE],
            vec![NO_EDGE, 0.0, 5.0, NO_EDGE],
            vec![18.0, NO_EDGE, 0.0, NO_EDGE],
            vec![NO_EDGE, NO_EDGE, NO_EDGE, 0.0],
        ];
        (registry, floyd_warshall(&layer, Condition::Normal, 0))
    }

    #[test]
    fn test_reconstruct_via_intermediate() {
        let (registry, result) = fixture();
        let path = reconstruct_path(&registry, "A", "C", &result).unwrap();
        assert_eq!(path, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_same_origin_and_destination() {
        let (registry, result) = fixture();
        let path = reconstruct_path(&registry, "B", "B", &result).unwrap();
        assert_eq!(path, vec!["B"]);
    }

    #[test]
    fn test_unknown_location() {
        let (registry, result) = fixture();
        let err = reconstruct_path(&registry, "CiudadX", "CiudadY", &result).unwrap_err();
        assert!(matches!(err, GraphError::NoSuchLocation(name) if name == "CiudadX"));
    }

    #[test]
    fn test_unreachable_destination() {
        let (registry, result) = fixture();
        let err = reconstruct_path(&registry, "A", "D", &result).unwrap_err();
        assert!(matches!(err, GraphError::NoPathExists { .. }));
    }

    #[test]
    fn test_result_size_must_match_registry() {
        let (_, result) = fixture();
        let registry = LocationRegistry::build(["A", "B"]).unwrap();
        let err = reconstruct_path(&registry, "A", "B", &result).unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput(_)));

        let (registry, _) = fixture();
        let small = floyd_warshall(&[vec![0.0, 1.0], vec![NO_EDGE, 0.0]], Condition::Normal, 0);
        let err = reconstruct_path(&registry, "A", "D", &small).unwrap_err();
        assert!(matches!(err, GraphError::InvalidInput(_)));
    }

    #[test]
    fn test_route_display() {
        let route = Route {
            stops: vec!["A".into(), "B".into(), "C".into()],
            total_time: 15.0,
        };
        assert_eq!(route.to_string(), "A -> B -> C");
        assert_eq!(route.legs(), 2);
    }
}
