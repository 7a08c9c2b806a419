//! The road network.
//!
//! `RoadNetwork` ties the location registry to the layered adjacency
//! store. It is the context object every operation goes through: there is
//! no shared global network, so independent networks can coexist.
//!
//! Mutations never recompute shortest paths. They bump the store
//! revision instead, and [`RoadNetwork::is_stale`] tells callers when a
//! [`DistanceResult`] needs to be recomputed.

use crate::adjacency::AdjacencyStore;
use crate::builder::NetworkBuilder;
use crate::center::{eccentricities, locate_center};
use crate::engine::{floyd_warshall, DistanceResult};
use crate::error::{GraphError, Result};
use crate::path::{reconstruct_path, Route};
use crate::registry::LocationRegistry;
use petgraph::graph::DiGraph;
use roadgrid_core::{load_records, Condition, EdgeRecord, Weights};
use std::path::Path;
use tracing::{debug, info};

/// A directed road network with one weight layer per condition.
#[derive(Debug, Clone)]
pub struct RoadNetwork {
    registry: LocationRegistry,
    store: AdjacencyStore,
}

impl RoadNetwork {
    /// Creates a network over `registry` with no connections.
    pub fn new(registry: LocationRegistry) -> Self {
        let store = AdjacencyStore::new(registry.len());
        Self { registry, store }
    }

    /// Builds a network from edge records.
    ///
    /// Every origin and destination becomes a location.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut builder = NetworkBuilder::new();
        builder.add_records(records);
        builder.build()
    }

    /// Loads a route file and builds the network from its valid lines.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let report = load_records(path.as_ref())?;
        let skipped = report.skipped.len();
        let network = Self::from_records(report.records)?;
        info!(
            "Loaded {} locations and {} connections from {} ({} lines skipped)",
            network.location_count(),
            network.connection_count(Condition::Normal),
            path.as_ref().display(),
            skipped
        );
        Ok(network)
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn store(&self) -> &AdjacencyStore {
        &self.store
    }

    /// Location names in index order.
    pub fn locations(&self) -> &[String] {
        self.registry.names()
    }

    pub fn location_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of directed connections usable under a condition.
    pub fn connection_count(&self, condition: Condition) -> usize {
        self.store.edge_count(condition)
    }

    /// Direct travel time between two named locations, `None` when there
    /// is no direct connection under the condition.
    pub fn weight(&self, condition: Condition, origin: &str, destination: &str) -> Result<Option<f64>> {
        let i = self.registry.require(origin)?;
        let j = self.registry.require(destination)?;
        let w = self.store.weight(condition, i, j);
        Ok(w.is_finite().then_some(w))
    }

    /// Runs the shortest-path engine over one condition layer.
    pub fn compute(&self, condition: Condition) -> DistanceResult {
        floyd_warshall(self.store.layer(condition), condition, self.store.revision())
    }

    /// Whether the network changed since `result` was computed.
    pub fn is_stale(&self, result: &DistanceResult) -> bool {
        result.revision() != self.store.revision() || result.size() != self.location_count()
    }

    /// Rejects a result computed over a different set of locations.
    pub(crate) fn check_result(&self, result: &DistanceResult) -> Result<()> {
        if result.size() != self.location_count() {
            return Err(GraphError::InvalidInput(format!(
                "distance result covers {} locations, network has {}",
                result.size(),
                self.location_count()
            )));
        }
        Ok(())
    }

    /// Shortest travel time between two named locations (∞ if unreachable).
    pub fn distance(&self, origin: &str, destination: &str, result: &DistanceResult) -> Result<f64> {
        self.check_result(result)?;
        let i = self.registry.require(origin)?;
        let j = self.registry.require(destination)?;
        Ok(result.distance(i, j))
    }

    /// Ordered stops of the shortest path between two named locations.
    pub fn shortest_path(
        &self,
        origin: &str,
        destination: &str,
        result: &DistanceResult,
    ) -> Result<Vec<String>> {
        reconstruct_path(&self.registry, origin, destination, result)
    }

    /// Shortest path together with its total travel time.
    pub fn route(&self, origin: &str, destination: &str, result: &DistanceResult) -> Result<Route> {
        let stops = self.shortest_path(origin, destination, result)?;
        let total_time = self.distance(origin, destination, result)?;
        Ok(Route { stops, total_time })
    }

    /// Name of the location with minimum eccentricity.
    pub fn center(&self, result: &DistanceResult) -> Result<&str> {
        self.check_result(result)?;
        let index = locate_center(result)?;
        Ok(self.registry.name_of(index))
    }

    /// Eccentricity per location name, in index order.
    pub fn eccentricities(&self, result: &DistanceResult) -> Result<Vec<(&str, f64)>> {
        self.check_result(result)?;
        Ok(eccentricities(result)
            .into_iter()
            .enumerate()
            .map(|(i, e)| (self.registry.name_of(i), e))
            .collect())
    }

    /// Adds or replaces the connection `origin -> destination` in every
    /// condition layer.
    ///
    /// Both locations must already exist.
    pub fn add_connection(&mut self, origin: &str, destination: &str, weights: Weights) -> Result<()> {
        let (i, j) = self.endpoints(origin, destination)?;
        self.store.set_edge_all_conditions(i, j, weights)?;
        debug!("Connected {} -> {}", origin, destination);
        Ok(())
    }

    /// Sets the travel time of `origin -> destination` in a single layer.
    ///
    /// An infinite weight removes the connection from that layer only.
    pub fn set_connection(
        &mut self,
        condition: Condition,
        origin: &str,
        destination: &str,
        weight: f64,
    ) -> Result<()> {
        let (i, j) = self.endpoints(origin, destination)?;
        self.store.set_edge(condition, i, j, weight)
    }

    /// Interrupts traffic from `origin` to `destination` under every
    /// condition. The opposite direction keeps its connection.
    pub fn remove_connection(&mut self, origin: &str, destination: &str) -> Result<()> {
        let (i, j) = self.endpoints(origin, destination)?;
        self.store.clear_edge(i, j)?;
        debug!("Interrupted {} -> {}", origin, destination);
        Ok(())
    }

    fn endpoints(&self, origin: &str, destination: &str) -> Result<(usize, usize)> {
        let lookup = |name: &str| {
            self.registry
                .index_of(name)
                .ok_or_else(|| GraphError::InvalidInput(format!("unknown location '{}'", name)))
        };
        Ok((lookup(origin)?, lookup(destination)?))
    }

    /// Builds a petgraph view of one layer.
    ///
    /// Node `i` of the returned graph is location `i` of the registry.
    pub fn layer_graph(&self, condition: Condition) -> DiGraph<String, f64> {
        let n = self.location_count();
        let mut graph = DiGraph::with_capacity(n, self.connection_count(condition));
        let nodes: Vec<_> = self
            .registry
            .names()
            .iter()
            .map(|name| graph.add_node(name.clone()))
            .collect();

        for (i, row) in self.store.layer(condition).iter().enumerate() {
            for (j, &w) in row.iter().enumerate() {
                if i != j && w.is_finite() {
                    graph.add_edge(nodes[i], nodes[j], w);
                }
            }
        }
        graph
    }
}
