//! Application constants for name-surfer
//!
//! This module contains the dataset layout, default paths, chart geometry
//! and menu text used throughout the application.

// =============================================================================
// Dataset Layout
// =============================================================================

/// First year covered by the dataset
pub const START: i32 = 1900;

/// Number of decades each record carries a rank for (1900-2000)
pub const DECADES: usize = 11;

/// Years between consecutive rank columns
pub const DECADE_SPAN: i32 = 10;

/// Rank value meaning "not ranked in this decade"
pub const UNRANKED: u32 = 0;

/// Per-line load warnings kept in memory; counters stay exact past this
pub const MAX_STORED_WARNINGS: usize = 100;

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Dataset filename looked up in the working directory when none is given
pub const DEFAULT_DATA_FILE: &str = "name_data.txt";

/// Directory under the user data directory that may hold the dataset
pub const DATA_DIR_NAME: &str = "name-surfer";

// =============================================================================
// Chart Geometry
// =============================================================================

/// Largest rank shown on the chart's rank axis
pub const DEFAULT_RANK_CEILING: u32 = 1000;

/// Spacing between labelled rank ticks
pub const RANK_TICK_STEP: u32 = 200;

/// Number of text rows used for the rank axis
pub const DEFAULT_CHART_HEIGHT: usize = 20;

/// Character width of one decade column
pub const CHART_COLUMN_WIDTH: usize = 6;

/// Colors a chart may be drawn in; one is picked per name
pub const CHART_COLORS: &[&str] = &[
    "blue", "cyan", "green", "magenta", "red", "yellow", "bright blue", "bright green",
];

// =============================================================================
// Interactive Menu
// =============================================================================

/// Menu entries shown by the interactive session, in selection order
pub const MENU_ENTRIES: &[&str] = &[
    "Find the best year for a name",
    "Find the best rank for a name",
    "Plot the popularity of a name",
    "Clear the plot",
    "Quit",
];

/// Convert a decade index into the first year of that decade
pub const fn decade_to_year(decade: usize) -> i32 {
    START + (decade as i32) * DECADE_SPAN
}
