//! Name Surfer Library
//!
//! A Rust library for exploring the popularity of baby names across the
//! decades from 1900 to 2000.
//!
//! This library provides tools for:
//! - Parsing the whitespace-separated name/rank dataset with per-field recovery
//! - Loading all records into a catalog with case-insensitive lookup
//! - Answering best-year, best-rank and full-series queries
//! - Rendering a name's series as a text chart
//! - Driving an interactive request/response menu session

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog;
        pub mod chart;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BestRank, NameRecord, Series, SeriesPoint};
pub use app::services::catalog::{Catalog, LoadStats};
pub use config::SurferConfig;

/// Result type alias for name-surfer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for name-surfer operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Dataset file is missing or cannot be opened
    #[error("Could not find dataset file: {path}")]
    DatasetNotFound { path: String },

    /// A dataset line could not be turned into a record
    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    /// Lookup miss surfaced by a one-shot command
    #[error("Name '{name}' not found")]
    NameNotFound { name: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// CSV output error
    #[error("CSV writing error: {message}")]
    CsvWriting {
        message: String,
        #[source]
        source: csv::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a dataset not found error
    pub fn dataset_not_found(path: impl Into<String>) -> Self {
        Self::DatasetNotFound { path: path.into() }
    }

    /// Create an invalid record error
    pub fn invalid_record(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            line,
            message: message.into(),
        }
    }

    /// Create a name not found error
    pub fn name_not_found(name: impl Into<String>) -> Self {
        Self::NameNotFound { name: name.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV writing error with context
    pub fn csv_writing(message: impl Into<String>, source: csv::Error) -> Self {
        Self::CsvWriting {
            message: message.into(),
            source,
        }
    }

    /// Whether this error is a lookup miss rather than a failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NameNotFound { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvWriting {
            message: "CSV output failed".to_string(),
            source: error,
        }
    }
}
