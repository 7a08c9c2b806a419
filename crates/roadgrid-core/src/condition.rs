//! Weather conditions.
//!
//! Each condition selects one independent edge-weight layer. The set is
//! closed and small, so it is a plain enum indexed `0..=3` rather than a
//! string key.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A discrete travel regime selecting one weight layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Clear weather.
    #[default]
    Normal = 0,
    /// Rain, travel times increased.
    Rain = 1,
    /// Snow, larger impact.
    Snow = 2,
    /// Storm, the most severe regime.
    Storm = 3,
}

impl Condition {
    /// Number of conditions, and so of weight layers.
    pub const COUNT: usize = 4;

    /// All conditions in layer order, mildest first.
    pub const ALL: [Condition; Self::COUNT] = [
        Condition::Normal,
        Condition::Rain,
        Condition::Snow,
        Condition::Storm,
    ];

    /// Layer index of this condition.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Condition::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Storm => "storm",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Condition {
    type Err = CoreError;

    /// Accepts the English name, the legacy Spanish label, or the layer digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "0" => Ok(Self::Normal),
            "rain" | "lluvia" | "1" => Ok(Self::Rain),
            "snow" | "nieve" | "2" => Ok(Self::Snow),
            "storm" | "tormenta" | "3" => Ok(Self::Storm),
            _ => Err(CoreError::UnknownCondition(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_layer_order() {
        for (i, condition) in Condition::ALL.iter().enumerate() {
            assert_eq!(condition.index(), i);
            assert_eq!(Condition::from_index(i), Some(*condition));
        }
        assert_eq!(Condition::from_index(Condition::COUNT), None);
    }

    #[test]
    fn test_parse_names_and_digits() {
        assert_eq!("Rain".parse::<Condition>().unwrap(), Condition::Rain);
        assert_eq!("tormenta".parse::<Condition>().unwrap(), Condition::Storm);
        assert_eq!(" 2 ".parse::<Condition>().unwrap(), Condition::Snow);
        assert!(matches!(
            "hail".parse::<Condition>(),
            Err(CoreError::UnknownCondition(_))
        ));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Condition::Storm).unwrap();
        assert_eq!(json, "\"storm\"");
    }
}
