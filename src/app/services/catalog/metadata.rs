//! Catalog metadata and load statistics
//!
//! This module defines the data structures for tracking what happened while
//! the dataset was read and what the resulting catalog holds.

use crate::constants::MAX_STORED_WARNINGS;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Statistics about the catalog loading process
#[derive(Debug, Clone, Serialize)]
pub struct LoadStats {
    /// Number of lines read from the source, blank ones included
    pub lines_read: usize,

    /// Number of records added to the catalog
    pub records_loaded: usize,

    /// Number of blank or whitespace-only lines skipped
    pub blank_lines: usize,

    /// Number of rank fields that were not non-negative integers
    pub malformed_fields: usize,

    /// Number of records whose name was already loaded
    pub duplicate_names: usize,

    /// Time taken to load the catalog
    pub load_duration: Duration,

    /// Per-line warnings collected during loading, the first
    /// `MAX_STORED_WARNINGS` only
    pub warnings: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            records_loaded: 0,
            blank_lines: 0,
            malformed_fields: 0,
            duplicate_names: 0,
            load_duration: Duration::ZERO,
            warnings: Vec::new(),
        }
    }

    /// Loading rate in records per second
    pub fn loading_rate(&self) -> f64 {
        if self.load_duration.is_zero() {
            0.0
        } else {
            self.records_loaded as f64 / self.load_duration.as_secs_f64()
        }
    }

    /// Log a per-line warning and keep it if there is still room
    pub fn record_warning(&mut self, warning: String) {
        debug!("{}", warning);
        if self.warnings.len() < MAX_STORED_WARNINGS {
            self.warnings.push(warning);
        }
    }

    /// Number of malformed fields and duplicate names recovered from
    pub fn recoveries(&self) -> usize {
        self.malformed_fields + self.duplicate_names
    }

    /// Check if any field or line needed recovery
    pub fn has_warnings(&self) -> bool {
        self.recoveries() > 0
    }

    /// Get a summary string of the loading process
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} names from {} lines ({} malformed fields, {} duplicate names) in {:.2}s",
            self.records_loaded,
            self.lines_read,
            self.malformed_fields,
            self.duplicate_names,
            self.load_duration.as_secs_f64()
        )
    }
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Metadata about a loaded catalog
#[derive(Debug, Clone)]
pub struct CatalogMetadata {
    /// Dataset path, when loaded from a file
    pub source: Option<PathBuf>,

    /// Records held, duplicates included
    pub record_count: usize,

    /// Names reachable through lookup
    pub distinct_names: usize,
}

impl CatalogMetadata {
    /// Records that can never be returned by a lookup
    pub fn shadowed_records(&self) -> usize {
        self.record_count.saturating_sub(self.distinct_names)
    }
}
