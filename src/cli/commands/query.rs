//! Single-name query commands: best-year, best-rank, series and plot
//!
//! Each command answers one question about one name. A name that is not in
//! the dataset is reported as `Error::NameNotFound` so the process exits
//! with a failure status.

use super::shared::paint_chart;
use crate::app::models::{BestRank, NameRecord, Series};
use crate::app::services::catalog::Catalog;
use crate::app::services::chart::{ChartRenderer, TextChart};
use crate::cli::args::{NameArgs, OutputFormat, PlotArgs, SeriesArgs};
use crate::config::SurferConfig;
use crate::constants::{DECADES, START, decade_to_year};
use crate::{Error, Result};
use std::io::Write;
use tracing::debug;

/// Sentence reporting a name's best year
pub fn best_year_message(record: &NameRecord) -> String {
    format!("{}'s best year was {}", record.name(), record.best_year())
}

/// Sentence reporting a name's best rank, or that it was never ranked
pub fn best_rank_message(name: &str, best: &BestRank) -> String {
    if best.is_ranked() {
        format!("{}'s best rank was {} in {}", name, best.rank, best.year)
    } else {
        format!(
            "{} was never ranked between {} and {}",
            name,
            START,
            decade_to_year(DECADES - 1)
        )
    }
}

/// Print the year in which a name was most popular
pub fn run_best_year<W: Write>(catalog: &Catalog, args: &NameArgs, out: &mut W) -> Result<()> {
    let record = catalog.require(&args.name)?;
    if record.is_ranked() {
        writeln!(out, "{}", best_year_message(record))?;
    } else {
        let best = record.best_rank();
        writeln!(out, "{}", best_rank_message(record.name(), &best))?;
    }
    Ok(())
}

/// Print a name's best rank and the year it was reached
pub fn run_best_rank<W: Write>(catalog: &Catalog, args: &NameArgs, out: &mut W) -> Result<()> {
    let record = catalog.require(&args.name)?;
    let best = record.best_rank();
    writeln!(out, "{}", best_rank_message(record.name(), &best))?;
    Ok(())
}

/// Print a name's rank for every decade in the requested format
pub fn run_series<W: Write>(catalog: &Catalog, args: &SeriesArgs, out: &mut W) -> Result<()> {
    let series = catalog
        .get_series(&args.name)
        .ok_or_else(|| Error::name_not_found(&args.name))?;
    debug!(
        "Writing series for '{}' as {:?}",
        series.name, args.output_format
    );

    match args.output_format {
        OutputFormat::Human => write_human_series(&series, out),
        OutputFormat::Json => write_json_series(&series, out),
        OutputFormat::Csv => write_csv_series(&series, out),
    }
}

fn write_human_series<W: Write>(series: &Series, out: &mut W) -> Result<()> {
    writeln!(out, "Popularity of \"{}\"", series.name)?;
    writeln!(out, "{:<6} {:>6}", "Year", "Rank")?;
    for point in &series.points {
        if point.is_gap() {
            writeln!(out, "{:<6} {:>6}", point.year, "-")?;
        } else {
            writeln!(out, "{:<6} {:>6}", point.year, point.rank)?;
        }
    }
    Ok(())
}

fn write_json_series<W: Write>(series: &Series, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, series)
        .map_err(|e| Error::serialization("Failed to write series as JSON", e))?;
    writeln!(out)?;
    Ok(())
}

fn write_csv_series<W: Write>(series: &Series, out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer
        .write_record(["name", "year", "rank"])
        .map_err(|e| Error::csv_writing("Failed to write CSV header", e))?;
    for point in &series.points {
        writer
            .write_record([
                series.name.clone(),
                point.year.to_string(),
                point.rank.to_string(),
            ])
            .map_err(|e| Error::csv_writing("Failed to write CSV row", e))?;
    }
    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush CSV output", e))?;
    Ok(())
}

/// Draw a name's popularity over time
pub fn run_plot<W: Write>(
    catalog: &Catalog,
    args: &PlotArgs,
    config: &SurferConfig,
    out: &mut W,
) -> Result<()> {
    let series = catalog
        .get_series(&args.name)
        .ok_or_else(|| Error::name_not_found(&args.name))?;

    let chart = TextChart::new(&config.chart).render(&series);
    write!(out, "{}", paint_chart(&chart, &series.name, &config.chart))?;
    Ok(())
}
