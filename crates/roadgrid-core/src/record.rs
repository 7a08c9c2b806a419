//! Edge records.
//!
//! An edge record is one directed connection between two named locations
//! with a travel time for every condition.

use crate::condition::Condition;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Travel times for one directed edge, one per condition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub normal: f64,
    pub rain: f64,
    pub snow: f64,
    pub storm: f64,
}

impl Weights {
    pub fn new(normal: f64, rain: f64, snow: f64, storm: f64) -> Self {
        Self {
            normal,
            rain,
            snow,
            storm,
        }
    }

    /// The same travel time under every condition.
    pub fn uniform(time: f64) -> Self {
        Self::new(time, time, time, time)
    }

    /// Travel time under the given condition.
    pub fn get(&self, condition: Condition) -> f64 {
        match condition {
            Condition::Normal => self.normal,
            Condition::Rain => self.rain,
            Condition::Snow => self.snow,
            Condition::Storm => self.storm,
        }
    }

    /// Weights in layer order.
    pub fn to_array(self) -> [f64; Condition::COUNT] {
        [self.normal, self.rain, self.snow, self.storm]
    }

    /// Returns the first condition whose time is negative or NaN.
    ///
    /// Infinity is accepted: it means "no edge" in that layer.
    pub fn first_invalid(&self) -> Option<(Condition, f64)> {
        Condition::ALL
            .iter()
            .map(|&c| (c, self.get(c)))
            .find(|(_, w)| w.is_nan() || *w < 0.0)
    }
}

impl From<[f64; Condition::COUNT]> for Weights {
    fn from(w: [f64; Condition::COUNT]) -> Self {
        Self::new(w[0], w[1], w[2], w[3])
    }
}

/// One validated line of a route file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub origin: String,
    pub destination: String,
    pub weights: Weights,
}

impl EdgeRecord {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, weights: Weights) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weights,
        }
    }

    /// Travel time under the given condition.
    pub fn weight(&self, condition: Condition) -> f64 {
        self.weights.get(condition)
    }

    /// Parses `origin destination normal rain snow storm` from whitespace
    /// separated fields. Fields past the sixth are ignored.
    ///
    /// `line` is only used for error reporting.
    pub fn parse_line(text: &str, line: usize) -> Result<Self, CoreError> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < 6 {
            return Err(CoreError::InvalidRecord {
                line,
                reason: format!("expected 6 fields, found {}", fields.len()),
            });
        }

        let mut times = [0.0; Condition::COUNT];
        for (slot, raw) in times.iter_mut().zip(&fields[2..6]) {
            *slot = raw.parse::<f64>().map_err(|_| CoreError::InvalidRecord {
                line,
                reason: format!("'{}' is not a number", raw),
            })?;
        }

        let weights = Weights::from(times);
        if let Some((condition, w)) = weights.first_invalid() {
            return Err(CoreError::InvalidRecord {
                line,
                reason: format!("{} time {} is not a non-negative number", condition, w),
            });
        }

        Ok(Self::new(fields[0], fields[1], weights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let record = EdgeRecord::parse_line("CiudadA CiudadB 10 15 20 50", 1).unwrap();
        assert_eq!(record.origin, "CiudadA");
        assert_eq!(record.destination, "CiudadB");
        assert_eq!(record.weights, Weights::new(10.0, 15.0, 20.0, 50.0));
        assert_eq!(record.weight(Condition::Storm), 50.0);
    }

    #[test]
    fn test_parse_line_ignores_trailing_fields() {
        let record = EdgeRecord::parse_line("A B 1 2 3 4 extra words", 3).unwrap();
        assert_eq!(record.weights.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_parse_line_rejects_short_lines() {
        let err = EdgeRecord::parse_line("A B 1 2 3", 7).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRecord { line: 7, .. }));
    }

    #[test]
    fn test_parse_line_rejects_negative_and_garbage() {
        assert!(EdgeRecord::parse_line("A B 1 -2 3 4", 1).is_err());
        assert!(EdgeRecord::parse_line("A B 1 two 3 4", 1).is_err());
        assert!(EdgeRecord::parse_line("A B 1 NaN 3 4", 1).is_err());
    }

    #[test]
    fn test_first_invalid_accepts_infinity() {
        let w = Weights::new(1.0, f64::INFINITY, 2.0, 3.0);
        assert_eq!(w.first_invalid(), None);
        let w = Weights::new(1.0, 2.0, -0.5, 3.0);
        assert_eq!(w.first_invalid(), Some((Condition::Snow, -0.5)));
    }
}
