//! Configuration management and validation.
//!
//! Provides the configuration structures for dataset location, load-time
//! progress display and chart rendering, and resolves the dataset path when
//! none is given on the command line.

use crate::constants::{
    CHART_COLORS, DATA_DIR_NAME, DEFAULT_CHART_HEIGHT, DEFAULT_DATA_FILE, DEFAULT_RANK_CEILING,
    RANK_TICK_STEP,
};
use crate::{Error, Result};
use colored::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Chart rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Number of text rows for the rank axis
    pub height: usize,

    /// Largest rank shown; worse ranks are pinned to the bottom row
    pub rank_ceiling: u32,

    /// Draw charts in color when writing to a terminal
    pub use_color: bool,

    /// Fixed chart color; picked per name when unset
    pub color: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_CHART_HEIGHT,
            rank_ceiling: DEFAULT_RANK_CEILING,
            use_color: true,
            color: None,
        }
    }
}

/// Top-level configuration for name-surfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurferConfig {
    /// Dataset file; resolved by [`SurferConfig::resolve_data_path`] when unset
    pub data_path: Option<PathBuf>,

    /// Show a progress spinner while loading
    pub show_progress: bool,

    /// Chart rendering settings
    pub chart: ChartConfig,
}

impl Default for SurferConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            show_progress: true,
            chart: ChartConfig::default(),
        }
    }
}

impl SurferConfig {
    /// Use a specific dataset file
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Disable the load progress spinner
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Disable colored chart output
    pub fn without_color(mut self) -> Self {
        self.chart.use_color = false;
        self
    }

    /// Set the chart height in rows
    pub fn with_chart_height(mut self, height: usize) -> Self {
        self.chart.height = height;
        self
    }

    /// Set a fixed chart color
    pub fn with_chart_color(mut self, color: impl Into<String>) -> Self {
        self.chart.color = Some(color.into());
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chart.height < 2 {
            return Err(Error::configuration(format!(
                "Chart height {} is too small: at least 2 rows are needed",
                self.chart.height
            )));
        }

        if self.chart.rank_ceiling < RANK_TICK_STEP {
            return Err(Error::configuration(format!(
                "Rank ceiling {} must be at least {}",
                self.chart.rank_ceiling, RANK_TICK_STEP
            )));
        }

        if let Some(color) = &self.chart.color {
            if color.parse::<Color>().is_err() {
                return Err(Error::configuration(format!(
                    "Unknown chart color '{}' (try one of: {})",
                    color,
                    CHART_COLORS.join(", ")
                )));
            }
        }

        if let Some(path) = &self.data_path {
            if path.as_os_str().is_empty() {
                return Err(Error::configuration("Dataset path cannot be empty"));
            }
        }

        Ok(())
    }

    /// Dataset path to load
    ///
    /// An explicit path is used as given. Otherwise `name_data.txt` in the
    /// working directory is preferred, then the copy in the user data
    /// directory. When neither exists the working directory path is
    /// returned so the load reports it as missing.
    pub fn resolve_data_path(&self) -> PathBuf {
        if let Some(path) = &self.data_path {
            return path.clone();
        }

        let local = PathBuf::from(DEFAULT_DATA_FILE);
        if local.exists() {
            return local;
        }

        match user_data_file() {
            Some(path) if path.exists() => {
                debug!("Using dataset from user data directory: {}", path.display());
                path
            }
            _ => local,
        }
    }
}

/// Dataset location under the platform's user data directory
pub fn user_data_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| data_file_in(&dir))
}

fn data_file_in(data_dir: &Path) -> PathBuf {
    data_dir.join(DATA_DIR_NAME).join(DEFAULT_DATA_FILE)
}
