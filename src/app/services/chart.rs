//! Text chart rendering for a name's popularity series
//!
//! Years run left to right, one column per decade starting at 1900. Rank runs
//! top to bottom so rank 1 sits on the top row. Unranked decades are gaps:
//! a ranked decade next to another ranked decade is drawn as `*` with a dotted
//! line between them, a ranked decade with no ranked neighbour as `o`.

use crate::app::models::Series;
use crate::config::ChartConfig;
use crate::constants::{CHART_COLORS, CHART_COLUMN_WIDTH, RANK_TICK_STEP};

/// Width of the rank label gutter, including the axis character
const GUTTER_WIDTH: usize = 6;

const CONNECTED_MARKER: char = '*';
const ISOLATED_MARKER: char = 'o';
const LINE_MARKER: char = '.';

/// Something that can turn a series into a displayable chart
pub trait ChartRenderer {
    fn render(&self, series: &Series) -> String;
}

/// Renders a series as a fixed-size character grid
#[derive(Debug, Clone)]
pub struct TextChart {
    height: usize,
    rank_ceiling: u32,
}

impl TextChart {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            height: config.height.max(2),
            rank_ceiling: config.rank_ceiling.max(1),
        }
    }

    /// Row for a rank; ranks beyond the ceiling are pinned to the bottom row
    fn row_for_rank(&self, rank: u32) -> usize {
        let clamped = rank.clamp(1, self.rank_ceiling) as usize;
        let span = (self.rank_ceiling as usize).saturating_sub(1).max(1);
        ((clamped - 1) * (self.height - 1) + span / 2) / span
    }

    fn column_for_point(index: usize) -> usize {
        index * CHART_COLUMN_WIDTH + CHART_COLUMN_WIDTH / 2
    }

    /// Rank labels for the gutter, keyed by row
    fn tick_labels(&self) -> Vec<Option<u32>> {
        let mut labels = vec![None; self.height];
        let ticks = std::iter::once(1)
            .chain((RANK_TICK_STEP..=self.rank_ceiling).step_by(RANK_TICK_STEP as usize));
        for tick in ticks {
            let row = self.row_for_rank(tick);
            if labels[row].is_none() {
                labels[row] = Some(tick);
            }
        }
        labels
    }
}

impl Default for TextChart {
    fn default() -> Self {
        Self::new(&ChartConfig::default())
    }
}

impl ChartRenderer for TextChart {
    fn render(&self, series: &Series) -> String {
        let width = series.points.len() * CHART_COLUMN_WIDTH;
        let mut grid = vec![vec![' '; width]; self.height];

        // Lines first so markers overwrite them
        for (index, pair) in series.points.windows(2).enumerate() {
            let (from, to) = (pair[0], pair[1]);
            if from.is_gap() || to.is_gap() {
                continue;
            }
            let (x0, x1) = (
                Self::column_for_point(index),
                Self::column_for_point(index + 1),
            );
            let (y0, y1) = (
                self.row_for_rank(from.rank) as f64,
                self.row_for_rank(to.rank) as f64,
            );
            for x in (x0 + 1)..x1 {
                let t = (x - x0) as f64 / (x1 - x0) as f64;
                let y = (y0 + (y1 - y0) * t).round() as usize;
                grid[y][x] = LINE_MARKER;
            }
        }

        for (index, point) in series.points.iter().enumerate() {
            if point.is_gap() {
                continue;
            }
            let marker = if series.is_connected(index) {
                CONNECTED_MARKER
            } else {
                ISOLATED_MARKER
            };
            grid[self.row_for_rank(point.rank)][Self::column_for_point(index)] = marker;
        }

        let mut output = format!("Popularity of \"{}\" Over Time\n", series.name);
        let blank_gutter = " ".repeat(GUTTER_WIDTH - 1);

        for (row, label) in grid.iter().zip(self.tick_labels()) {
            let gutter = match label {
                Some(rank) => format!("{:>width$} |", rank, width = GUTTER_WIDTH - 2),
                None => format!("{}|", blank_gutter),
            };
            let line: String = row.iter().collect();
            output.push_str(&format!("{}{}\n", gutter, line.trim_end()));
        }

        let mut tick = "-".repeat(CHART_COLUMN_WIDTH);
        tick.replace_range(CHART_COLUMN_WIDTH / 2..=CHART_COLUMN_WIDTH / 2, "+");
        let axis = tick.repeat(series.points.len());
        output.push_str(&format!("{}+{}\n", blank_gutter, axis));

        let years: String = series
            .points
            .iter()
            .map(|point| format!("{:^width$}", point.year, width = CHART_COLUMN_WIDTH))
            .collect();
        output.push_str(&format!("{} {}\n", blank_gutter, years.trim_end()));

        if series.ranked_points().next().is_none() {
            output.push_str(&format!("\"{}\" was never ranked\n", series.name));
        }

        output
    }
}

/// Display color for a name's chart
///
/// Picked from the name so repeated plots of one name look the same while
/// different names tend to differ.
pub fn chart_color(name: &str) -> &'static str {
    let hash = name
        .to_lowercase()
        .bytes()
        .fold(0usize, |acc, byte| acc.wrapping_mul(31) ^ byte as usize);
    CHART_COLORS[hash % CHART_COLORS.len()]
}
