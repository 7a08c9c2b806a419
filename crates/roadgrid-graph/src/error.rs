use roadgrid_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No such location: {0}")]
    NoSuchLocation(String),

    #[error("No path exists from {origin} to {destination}")]
    NoPathExists { origin: String, destination: String },

    #[error("The network has no locations")]
    EmptyGraph,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
