//! Name catalog service for case-insensitive record lookups
//!
//! This module holds every record loaded from the dataset in load order and
//! resolves names to records without regard to letter case.

use crate::app::models::NameRecord;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::PathBuf;

pub mod loader;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::{CatalogMetadata, LoadStats};

/// Catalog of all name records in the dataset
///
/// Records keep their load order. Lookups go through a lowercase key index
/// that points at the first record loaded under each key, so duplicate names
/// after the first are stored but never returned by a lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Records in the order they were loaded
    pub(crate) records: Vec<NameRecord>,

    /// Lowercased name -> position of the first record with that name
    pub(crate) index: HashMap<String, usize>,

    /// Dataset the catalog was loaded from, if any
    pub(crate) source: Option<PathBuf>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            source: None,
        }
    }

    /// Append a record during loading
    ///
    /// Returns false when the name was already present, in which case the
    /// earlier record keeps answering lookups.
    pub(crate) fn insert(&mut self, record: NameRecord) -> bool {
        let position = self.records.len();
        let is_new = match self.index.entry(lookup_key(record.name())) {
            Entry::Vacant(entry) => {
                entry.insert(position);
                true
            }
            Entry::Occupied(_) => false,
        };
        self.records.push(record);
        is_new
    }

    /// Find a record by exact name, ignoring letter case
    pub fn lookup(&self, name: &str) -> Option<&NameRecord> {
        self.index
            .get(&lookup_key(name))
            .and_then(|&position| self.records.get(position))
    }

    /// Total number of records, duplicates included
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were loaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in load order
    pub fn iter(&self) -> impl Iterator<Item = &NameRecord> {
        self.records.iter()
    }

    /// Iterate in load order over the records a lookup can return
    ///
    /// Duplicates shadowed by an earlier record with the same name are skipped.
    pub fn reachable(&self) -> impl Iterator<Item = &NameRecord> {
        self.records
            .iter()
            .enumerate()
            .filter(|(position, record)| {
                self.index.get(&lookup_key(record.name())) == Some(position)
            })
            .map(|(_, record)| record)
    }

    /// Get catalog metadata
    pub fn metadata(&self) -> CatalogMetadata {
        CatalogMetadata {
            source: self.source.clone(),
            record_count: self.records.len(),
            distinct_names: self.index.len(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalise a name for case-insensitive comparison
///
/// Folds one character at a time so the result does not depend on where a
/// letter sits in the word (a final capital sigma folds like any other).
fn lookup_key(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}
