//! JSON snapshots of a network.
//!
//! A snapshot lists every location and every connection with its travel
//! time per condition. Layers without the connection are omitted, so the
//! JSON never has to encode infinity.

use crate::error::Result;
use crate::network::RoadNetwork;
use crate::registry::LocationRegistry;
use roadgrid_core::Condition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// One directed connection in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotConnection {
    pub origin: String,
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rain: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storm: Option<f64>,
}

impl SnapshotConnection {
    fn get(&self, condition: Condition) -> Option<f64> {
        match condition {
            Condition::Normal => self.normal,
            Condition::Rain => self.rain,
            Condition::Snow => self.snow,
            Condition::Storm => self.storm,
        }
    }
}

/// Serializable form of a [`RoadNetwork`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub version: String,
    pub locations: Vec<String>,
    pub connections: Vec<SnapshotConnection>,
}

impl RoadNetwork {
    /// Captures the current locations and connections.
    pub fn snapshot(&self) -> NetworkSnapshot {
        let store = self.store();
        let n = self.location_count();
        let mut connections = Vec::new();

        for i in 0..n {
            for j in 0..n {
                let layer_weight = |condition: Condition| {
                    store
                        .has_edge(condition, i, j)
                        .then(|| store.weight(condition, i, j))
                };
                if Condition::ALL.iter().all(|&c| layer_weight(c).is_none()) {
                    continue;
                }
                connections.push(SnapshotConnection {
                    origin: self.registry().name_of(i).to_string(),
                    destination: self.registry().name_of(j).to_string(),
                    normal: layer_weight(Condition::Normal),
                    rain: layer_weight(Condition::Rain),
                    snow: layer_weight(Condition::Snow),
                    storm: layer_weight(Condition::Storm),
                });
            }
        }

        NetworkSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            locations: self.locations().to_vec(),
            connections,
        }
    }
}

impl NetworkSnapshot {
    /// Rebuilds a network from the snapshot.
    pub fn restore(&self) -> Result<RoadNetwork> {
        let registry = LocationRegistry::build(self.locations.iter().cloned())?;
        let mut network = RoadNetwork::new(registry);

        for connection in &self.connections {
            for condition in Condition::ALL {
                if let Some(w) = connection.get(condition) {
                    network.set_connection(
                        condition,
                        &connection.origin,
                        &connection.destination,
                        w,
                    )?;
                }
            }
        }
        Ok(network)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the snapshot to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path.as_ref(), self.to_json()?).map_err(roadgrid_core::CoreError::from)?;
        debug!("Saved snapshot to {}", path.as_ref().display());
        Ok(())
    }

    /// Reads a snapshot from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref()).map_err(roadgrid_core::CoreError::from)?;
        Self::from_json(&json)
    }
}
