//! Shared test utilities and fixtures for catalog tests

use crate::app::services::catalog::Catalog;
use std::fs;
use std::path::{Path, PathBuf};


/// Small dataset covering the interesting record shapes
pub const SAMPLE_DATASET: &str = "\
Emma 3 1 4 8 12 20 30 25 14 6 2
Ida 0 0 5 0 3 0 0 0 0 0 0
Tie 7 7 0 0 0 0 0 0 0 0 0
Ghost 0 0 0 0 0 0 0 0 0 0 0
Bob abc 5
Zelda 100 200
";

/// Build a catalog straight from dataset lines
pub fn create_test_catalog(lines: &[&str]) -> Catalog {
    let data = lines.join("\n");
    let (catalog, _) = Catalog::load_from_reader(data.as_bytes()).unwrap();
    catalog
}

/// Catalog holding the sample dataset
pub fn create_sample_catalog() -> Catalog {
    let (catalog, _) = Catalog::load_from_reader(SAMPLE_DATASET.as_bytes()).unwrap();
    catalog
}

/// Write a dataset file into `dir` and return its path
pub fn create_test_dataset_file(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}
