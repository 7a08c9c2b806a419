//! Roadgrid Core - Travel conditions and edge records
//!
//! This crate holds the vocabulary shared by the rest of Roadgrid:
//! the closed set of weather conditions that select an edge-weight
//! layer, the edge record that carries one weight per condition, and
//! the loader that turns a plain-text route file into records.
//!
//! # Example
//!
//! ```
//! use roadgrid_core::{parse_records, Condition};
//!
//! let report = parse_records("Mixco Antigua 30 35 45 60\n");
//! assert_eq!(report.records.len(), 1);
//! assert_eq!(report.records[0].weight(Condition::Snow), 45.0);
//! ```

mod condition;
pub mod error;
mod parser;
mod record;

pub use condition::Condition;
pub use error::{CoreError, Result};
pub use parser::{load_records, parse_records, ParseReport, SkippedLine};
pub use record::{EdgeRecord, Weights};
