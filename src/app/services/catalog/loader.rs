//! Catalog loading from the name dataset
//!
//! This module reads the line-oriented dataset, turns each non-blank line into
//! a record and reports per-field recoveries. Only a source that cannot be
//! opened or read is treated as an error.

use super::Catalog;
use super::metadata::LoadStats;
use crate::app::models::NameRecord;
use crate::constants::decade_to_year;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Lines between progress bar refreshes
const PROGRESS_REFRESH_LINES: usize = 256;

impl Catalog {
    /// Load every record from a dataset file
    ///
    /// # Arguments
    /// * `path` - Dataset file, one `<name> <rank_0> ... <rank_10>` per line
    /// * `show_progress` - Whether to display a progress spinner
    ///
    /// # Errors
    /// * Returns `Error::DatasetNotFound` if the file does not exist
    /// * Returns `Error::Io` if the file cannot be opened or read
    pub fn load_from_path(path: &Path, show_progress: bool) -> Result<(Self, LoadStats)> {
        info!("Loading name dataset from {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::dataset_not_found(path.display().to_string()),
            _ => Error::io(format!("Failed to open dataset {}", path.display()), e),
        })?;

        let progress_bar = show_progress.then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} [{elapsed_precise}] {pos} lines {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message("Loading names...");
            pb
        });

        let (mut catalog, stats) =
            Self::load_lines(BufReader::new(file), progress_bar.as_ref()).map_err(|e| match e {
                Error::Io { source, .. } => {
                    Error::io(format!("Failed to read dataset {}", path.display()), source)
                }
                other => other,
            })?;
        catalog.source = Some(path.to_path_buf());

        if let Some(pb) = progress_bar {
            pb.finish_with_message(format!("Loaded {} names", stats.records_loaded));
        }

        info!("{}", stats.summary());
        if stats.has_warnings() {
            warn!(
                "Dataset {} needed {} recoveries (see debug log for details)",
                path.display(),
                stats.recoveries()
            );
        }

        Ok((catalog, stats))
    }

    /// Load every record from an already open line source
    pub fn load_from_reader<R: BufRead>(reader: R) -> Result<(Self, LoadStats)> {
        Self::load_lines(reader, None)
    }

    fn load_lines<R: BufRead>(
        mut reader: R,
        progress_bar: Option<&ProgressBar>,
    ) -> Result<(Self, LoadStats)> {
        let start_time = Instant::now();
        let mut catalog = Self::new();
        let mut stats = LoadStats::new();
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            let read = reader
                .read_until(b'\n', &mut buffer)
                .map_err(|e| Error::io("Failed to read dataset line", e))?;
            if read == 0 {
                break;
            }

            stats.lines_read += 1;
            let line_number = stats.lines_read;
            let line = String::from_utf8_lossy(&buffer);

            if line.trim().is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            // Any non-blank line has a name token, so parsing cannot fail here
            let parsed = NameRecord::parse_line(&line).map_err(|e| match e {
                Error::InvalidRecord { message, .. } => Error::invalid_record(line_number, message),
                other => other,
            })?;

            for &decade in &parsed.malformed_decades {
                stats.malformed_fields += 1;
                stats.record_warning(format!(
                    "line {}: rank for '{}' in {} is not a non-negative integer, \
                     treated as unranked",
                    line_number,
                    parsed.record.name(),
                    decade_to_year(decade)
                ));
            }

            let name = parsed.record.name().to_string();
            stats.records_loaded += 1;
            if !catalog.insert(parsed.record) {
                stats.duplicate_names += 1;
                stats.record_warning(format!(
                    "line {}: duplicate name '{}', earlier record is kept for lookups",
                    line_number, name
                ));
            }

            if let Some(pb) = progress_bar {
                if line_number % PROGRESS_REFRESH_LINES == 0 {
                    pb.set_position(line_number as u64);
                }
            }
        }

        if let Some(pb) = progress_bar {
            pb.set_position(stats.lines_read as u64);
        }

        stats.load_duration = start_time.elapsed();

        debug!(
            "Read {} lines into {} records ({} blank)",
            stats.lines_read, stats.records_loaded, stats.blank_lines
        );

        Ok((catalog, stats))
    }
}
