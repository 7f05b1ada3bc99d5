//! Command implementations for name-surfer CLI
//!
//! This module contains the command dispatch, logging setup and dataset
//! loading shared by all subcommands. Each command is implemented in its own
//! module:
//! - `query`: best-year, best-rank, series and plot for a single name
//! - `stats`: dataset load report
//! - `interactive`: the menu session

pub mod interactive;
pub mod query;
pub mod shared;
pub mod stats;

pub use shared::RunStats;

use crate::Result;
use crate::app::services::chart::TextChart;
use crate::cli::args::{Args, Commands};
use interactive::MenuSession;
use shared::{load_catalog, setup_logging};
use std::io::{self, IsTerminal};
use std::time::Instant;
use tracing::{debug, info};

/// Main command runner
///
/// Sets up logging, loads the dataset once, then dispatches to the selected
/// subcommand. Failing to load the dataset stops here with an error.
pub fn run(args: Args) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(&args)?;
    debug!("Arguments: {:?}", args);

    let mut config = args.to_config()?;
    if !io::stdout().is_terminal() {
        config = config.without_color();
    }

    let (catalog, load_stats) = load_catalog(&config)?;

    let mut outcome = RunStats {
        records_loaded: catalog.len(),
        ..Default::default()
    };

    let command = args.get_command();
    let one_shot = !matches!(command, Commands::Interactive);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::BestYear(name) => query::run_best_year(&catalog, &name, &mut out)?,
        Commands::BestRank(name) => query::run_best_rank(&catalog, &name, &mut out)?,
        Commands::Series(series) => query::run_series(&catalog, &series, &mut out)?,
        Commands::Plot(plot) => query::run_plot(&catalog, &plot, &config, &mut out)?,
        Commands::Stats(stats_args) => {
            stats::run_stats(&catalog, &load_stats, &stats_args, &mut out)?
        }
        Commands::Interactive => {
            let renderer = TextChart::new(&config.chart);
            let session = MenuSession::new(
                &catalog,
                &renderer,
                config.chart.clone(),
                io::stdin().lock(),
                &mut out,
            )
            .with_clear_screen(io::stdout().is_terminal())
            .run()?;
            outcome.queries_answered = session.queries_answered;
            outcome.names_not_found = session.names_not_found;
        }
    }
    if one_shot {
        outcome.queries_answered += 1;
    }

    outcome.elapsed = start_time.elapsed();
    info!("Command completed in {:.2}s", outcome.elapsed.as_secs_f64());
    Ok(outcome)
}
