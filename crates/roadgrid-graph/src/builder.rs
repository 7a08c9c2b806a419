//! Network builder.
//!
//! Building happens in two passes:
//! 1. Collect every location named by a record (plus any added directly)
//!    and assign indexes in sorted order.
//! 2. Write each record into all condition layers.

use crate::error::Result;
use crate::network::RoadNetwork;
use crate::registry::LocationRegistry;
use roadgrid_core::EdgeRecord;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// Builds a [`RoadNetwork`] from edge records.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    locations: BTreeSet<String>,
    records: Vec<EdgeRecord>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a location that may have no connections.
    pub fn add_location(&mut self, name: impl Into<String>) -> &mut Self {
        self.locations.insert(name.into());
        self
    }

    pub fn add_record(&mut self, record: EdgeRecord) -> &mut Self {
        self.locations.insert(record.origin.clone());
        self.locations.insert(record.destination.clone());
        self.records.push(record);
        self
    }

    pub fn add_records<I>(&mut self, records: I) -> &mut Self
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        for record in records {
            self.add_record(record);
        }
        self
    }

    /// Finishes building.
    ///
    /// Later records for the same ordered pair replace earlier ones.
    /// Records from a location to itself are skipped. Fails with
    /// `InvalidInput` when there are no locations or a weight is negative.
    pub fn build(self) -> Result<RoadNetwork> {
        let registry = LocationRegistry::build(self.locations)?;
        let mut network = RoadNetwork::new(registry);

        for record in self.records {
            if record.origin == record.destination {
                warn!("Skipping self-loop at {}", record.origin);
                continue;
            }
            network.add_connection(&record.origin, &record.destination, record.weights)?;
        }

        debug!("Built network with {} locations", network.location_count());
        Ok(network)
    }
}
