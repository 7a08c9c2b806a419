//! Roadgrid Graph - Weather-layered road network
//!
//! This crate holds the road network and its shortest-path machinery.
//! Travel times vary by weather, so every directed connection carries
//! one weight per [`Condition`], stored as a dense matrix per layer.
//!
//! # Architecture
//!
//! - `LocationRegistry` gives each location a stable index (sorted order)
//! - `AdjacencyStore` holds one V x V matrix per condition
//! - `floyd_warshall` turns one layer into a `DistanceResult`
//! - path reconstruction and center location read that result
//! - `RoadNetwork` is the context object tying it all together
//!
//! Results are snapshots. Mutating the network does not update them;
//! recompute and check [`RoadNetwork::is_stale`] when in doubt.
//!
//! # Example
//!
//! ```
//! use roadgrid_graph::{Condition, EdgeRecord, RoadNetwork, Weights};
//!
//! let mut network = RoadNetwork::from_records([
//!     EdgeRecord::new("A", "B", Weights::uniform(10.0)),
//!     EdgeRecord::new("B", "C", Weights::uniform(5.0)),
//!     EdgeRecord::new("A", "C", Weights::uniform(20.0)),
//! ])
//! .unwrap();
//!
//! let result = network.compute(Condition::Normal);
//! assert_eq!(network.shortest_path("A", "C", &result).unwrap(), vec!["A", "B", "C"]);
//!
//! network.remove_connection("A", "B").unwrap();
//! assert!(network.is_stale(&result));
//! ```

mod adjacency;
mod builder;
mod center;
mod engine;
mod error;
mod network;
mod path;
mod registry;
mod snapshot;
mod stats;

pub use adjacency::{AdjacencyStore, NO_EDGE};
pub use builder::NetworkBuilder;
pub use center::{eccentricities, locate_center};
pub use engine::{floyd_warshall, DistanceResult};
pub use error::{GraphError, Result};
pub use network::RoadNetwork;
pub use path::{reconstruct_path, walk, Route};
pub use registry::LocationRegistry;
pub use snapshot::{NetworkSnapshot, SnapshotConnection};
pub use stats::{closeness_centrality, ClosenessLeader, NetworkStats};

pub use roadgrid_core::{Condition, EdgeRecord, Weights};
