//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::Result;
use crate::app::services::catalog::{Catalog, LoadStats};
use crate::app::services::chart::chart_color;
use crate::cli::args::Args;
use crate::config::{ChartConfig, SurferConfig};
use colored::Colorize;
use tracing::{debug, info};

/// Statistics reported by every command
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of records in the loaded catalog
    pub records_loaded: usize,
    /// Number of queries that found a name
    pub queries_answered: usize,
    /// Number of queries for names that are not in the dataset
    pub names_not_found: usize,
    /// Total run time
    pub elapsed: std::time::Duration,
}

impl RunStats {
    /// Total number of name queries handled
    pub fn total_queries(&self) -> usize {
        self.queries_answered + self.names_not_found
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("name_surfer={}", log_level)));

    // A subscriber may already be installed when commands run more than once in a process
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}

/// Load the dataset named by the configuration
///
/// A missing or unreadable dataset is returned as an error; the caller is
/// expected to stop rather than continue with an empty catalog.
pub fn load_catalog(config: &SurferConfig) -> Result<(Catalog, LoadStats)> {
    let data_path = config.resolve_data_path();
    debug!("Resolved dataset path: {}", data_path.display());

    let (catalog, stats) = Catalog::load_from_path(&data_path, config.show_progress)?;

    info!(
        "Successfully loaded {} names from {}",
        catalog.len(),
        data_path.display()
    );

    Ok((catalog, stats))
}

/// Apply the configured chart color, if any
pub fn paint_chart(chart: &str, name: &str, config: &ChartConfig) -> String {
    if !config.use_color {
        return chart.to_string();
    }
    let color = config
        .color
        .clone()
        .unwrap_or_else(|| chart_color(name).to_string());
    chart.color(color).to_string()
}
