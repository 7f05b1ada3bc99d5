//! Stats command implementation
//!
//! Reports what was loaded from the dataset: line and record counts, the
//! recoveries made while parsing, and the top-ranked name of each decade.

use crate::app::services::catalog::{Catalog, LoadStats};
use crate::cli::args::{OutputFormat, StatsArgs};
use crate::constants::{DECADES, decade_to_year};
use crate::{Error, Result};
use serde::Serialize;
use std::io::Write;

/// Most popular name of one decade
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadeLeader {
    pub year: i32,
    /// First loaded name holding the decade's best rank, if any name was ranked
    pub name: Option<String>,
    pub rank: u32,
}

/// Summary of a loaded dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub source: Option<String>,
    pub distinct_names: usize,
    /// Duplicate records that no lookup can return
    pub shadowed_records: usize,
    pub never_ranked: usize,
    /// Records loaded per second
    pub loading_rate: f64,
    pub load: LoadStats,
    pub leaders: Vec<DecadeLeader>,
}

impl DatasetReport {
    pub fn new(catalog: &Catalog, load: &LoadStats) -> Self {
        let metadata = catalog.metadata();
        Self {
            source: metadata.source.as_ref().map(|path| path.display().to_string()),
            distinct_names: metadata.distinct_names,
            shadowed_records: metadata.shadowed_records(),
            never_ranked: catalog.reachable().filter(|r| !r.is_ranked()).count(),
            loading_rate: load.loading_rate(),
            load: load.clone(),
            leaders: decade_leaders(catalog),
        }
    }
}

/// Best-ranked name of every decade, earliest loaded name on ties
///
/// Only records a lookup can return are considered, so a leader's rank always
/// matches what a query for that name reports.
pub fn decade_leaders(catalog: &Catalog) -> Vec<DecadeLeader> {
    (0..DECADES)
        .map(|decade| {
            let leader = catalog
                .reachable()
                .filter(|record| record.rank(decade) > 0)
                .min_by_key(|record| record.rank(decade));
            DecadeLeader {
                year: decade_to_year(decade),
                name: leader.map(|record| record.name().to_string()),
                rank: leader.map_or(0, |record| record.rank(decade)),
            }
        })
        .collect()
}

/// Write the dataset report in the requested format
pub fn run_stats<W: Write>(
    catalog: &Catalog,
    load: &LoadStats,
    args: &StatsArgs,
    out: &mut W,
) -> Result<()> {
    let report = DatasetReport::new(catalog, load);

    match args.output_format {
        OutputFormat::Human => write_human_report(&report, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)
                .map_err(|e| Error::serialization("Failed to write report as JSON", e))?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => Err(Error::configuration(
            "CSV output is not supported for stats; use human or json",
        )),
    }
}

fn write_human_report<W: Write>(report: &DatasetReport, out: &mut W) -> Result<()> {
    writeln!(out, "📊 Name Dataset Report")?;
    writeln!(out, "======================")?;
    writeln!(
        out,
        "📁 Dataset: {}",
        report.source.as_deref().unwrap_or("(in memory)")
    )?;
    writeln!(
        out,
        "👶 Names: {} ({} distinct, {} never ranked)",
        report.load.records_loaded, report.distinct_names, report.never_ranked
    )?;
    writeln!(
        out,
        "📄 Lines: {} ({} blank)",
        report.load.lines_read, report.load.blank_lines
    )?;
    writeln!(
        out,
        "⏱️  Load Time: {:.2}s ({:.0} names/s)",
        report.load.load_duration.as_secs_f64(),
        report.loading_rate
    )?;

    if report.load.has_warnings() {
        writeln!(
            out,
            "⚠️  Recovered: {} malformed rank fields, {} duplicate names ({} shadowed)",
            report.load.malformed_fields, report.load.duplicate_names, report.shadowed_records
        )?;
        writeln!(out, "    Run with -vv to see each recovered line")?;
    }

    writeln!(out)?;
    writeln!(out, "Most popular name by decade:")?;
    for leader in &report.leaders {
        match &leader.name {
            Some(name) => writeln!(out, "  {}  {} (rank {})", leader.year, name, leader.rank)?,
            None => writeln!(out, "  {}  -", leader.year)?,
        }
    }
    Ok(())
}
