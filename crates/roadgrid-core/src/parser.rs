//! Route file loader.
//!
//! A route file holds one directed connection per line:
//!
//! ```text
//! origin destination normal rain snow storm
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Any other line that
//! does not have that shape is skipped and reported, so a single bad line
//! never prevents the rest of the network from loading.

use crate::error::{CoreError, Result};
use crate::record::EdgeRecord;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// A line that was skipped while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    pub reason: String,
}

/// Result of parsing a route file.
#[derive(Debug, Default)]
pub struct ParseReport {
    /// Valid records in file order.
    pub records: Vec<EdgeRecord>,
    /// Lines that did not match the record shape.
    pub skipped: Vec<SkippedLine>,
}

impl ParseReport {
    /// Every distinct location named as an origin or a destination.
    pub fn location_names(&self) -> BTreeSet<String> {
        self.records
            .iter()
            .flat_map(|r| [r.origin.clone(), r.destination.clone()])
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parses route data held in memory.
pub fn parse_records(source: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (i, text) in source.lines().enumerate() {
        let line = i + 1;
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match EdgeRecord::parse_line(trimmed, line) {
            Ok(record) => report.records.push(record),
            Err(err) => {
                let reason = match err {
                    CoreError::InvalidRecord { reason, .. } => reason,
                    other => other.to_string(),
                };
                warn!("Skipping line {}: {}", line, reason);
                report.skipped.push(SkippedLine { line, reason });
            }
        }
    }

    debug!(
        "Parsed {} records ({} lines skipped)",
        report.records.len(),
        report.skipped.len()
    );
    report
}

/// Reads and parses a route file.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<ParseReport> {
    let source = fs::read_to_string(path.as_ref())?;
    debug!("Loading route file {}", path.as_ref().display());
    Ok(parse_records(&source))
}
