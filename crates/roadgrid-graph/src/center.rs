//! Graph center.
//!
//! The center is the location whose worst-case travel time to any other
//! location (its eccentricity) is smallest.

use crate::engine::DistanceResult;
use crate::error::{GraphError, Result};

/// Eccentricity of every location, in index order.
///
/// Unreachable destinations count as infinite, so any location that
/// cannot reach everyone has an infinite eccentricity.
pub fn eccentricities(result: &DistanceResult) -> Vec<f64> {
    result
        .distances()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .fold(0.0_f64, |max, (_, &d)| if d > max { d } else { max })
        })
        .collect()
}

/// Index of the location with minimum eccentricity.
///
/// Ties go to the lowest index, which is the alphabetically first name.
/// When every eccentricity is infinite the first location is returned.
pub fn locate_center(result: &DistanceResult) -> Result<usize> {
    let ecc = eccentricities(result);
    if ecc.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let mut center = 0;
    for (i, &e) in ecc.iter().enumerate().skip(1) {
        if e < ecc[center] {
            center = i;
        }
    }
    Ok(center)
}
