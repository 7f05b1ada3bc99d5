//! Command-line argument definitions for name-surfer
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::config::SurferConfig;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the name popularity explorer
///
/// Looks up how popular a baby name was in each decade from 1900 to 2000,
/// reports its best year and rank, and charts its popularity over time.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "name-surfer",
    version,
    about = "Explore the popularity of baby names from 1900 to 2000",
    long_about = "Loads a dataset of names with their popularity rank in each decade from 1900 \
                  to 2000 and answers questions about a name: the year it peaked, its best rank, \
                  and its full popularity history as a chart. Without a subcommand an \
                  interactive menu is started."
)]
pub struct Args {
    /// Dataset file with one `<name> <rank_1900> ... <rank_2000>` line per name
    ///
    /// If not specified, uses ./name_data.txt, falling back to
    /// name-surfer/name_data.txt under the user data directory.
    #[arg(
        short = 'f',
        long = "data",
        value_name = "PATH",
        global = true,
        help = "Dataset file to load"
    )]
    pub data_path: Option<PathBuf>,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Do not show a progress spinner while loading
    #[arg(long = "no-progress", global = true)]
    pub no_progress: bool,

    /// Do not color charts
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the year in which a name was most popular
    BestYear(NameArgs),
    /// Print a name's best rank and the year it was reached
    BestRank(NameArgs),
    /// Print a name's rank for every decade
    Series(SeriesArgs),
    /// Draw a name's popularity over time as a text chart
    Plot(PlotArgs),
    /// Report statistics about the loaded dataset
    Stats(StatsArgs),
    /// Start the interactive menu (default)
    Interactive,
}

/// Arguments shared by single-name queries
#[derive(Debug, Clone, Parser)]
pub struct NameArgs {
    /// Name to look up (letter case is ignored)
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Arguments for the series command
#[derive(Debug, Clone, Parser)]
pub struct SeriesArgs {
    /// Name to look up (letter case is ignored)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,
}

/// Arguments for the plot command
#[derive(Debug, Clone, Parser)]
pub struct PlotArgs {
    /// Name to plot (letter case is ignored)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Number of rows in the chart
    #[arg(long = "height", value_name = "ROWS")]
    pub height: Option<usize>,

    /// Chart color (e.g. red, "bright blue"); chosen from the name if omitted
    #[arg(long = "color", value_name = "COLOR")]
    pub color: Option<String>,
}

/// Arguments for the stats command
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    /// Output format (csv is not supported for stats)
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command to run, defaulting to the interactive menu
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Interactive)
    }

    /// Get the log level implied by -q / -v flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }

    /// Build the runtime configuration from the arguments
    pub fn to_config(&self) -> Result<SurferConfig> {
        let mut config = SurferConfig::default();

        if let Some(path) = &self.data_path {
            config = config.with_data_path(path.clone());
        }
        if !self.show_progress() {
            config = config.without_progress();
        }
        if self.no_color {
            config = config.without_color();
        }
        if let Some(Commands::Plot(plot)) = &self.command {
            if let Some(height) = plot.height {
                config = config.with_chart_height(height);
            }
            if let Some(color) = &plot.color {
                config = config.with_chart_color(color.clone());
            }
        }
        if let Some(Commands::Stats(stats)) = &self.command {
            if stats.output_format == OutputFormat::Csv {
                return Err(Error::configuration(
                    "CSV output is not supported for stats; use human or json",
                ));
            }
        }

        config.validate()?;
        Ok(config)
    }
}
