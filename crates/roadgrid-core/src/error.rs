//! Error types for Roadgrid core.

use thiserror::Error;

/// Errors raised while reading route data.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("Unknown condition '{0}' (expected normal, rain, snow, storm or 0-3)")]
    UnknownCondition(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
