//! Interactive menu session
//!
//! The menu loop reads a selection and a name, turns them into a [`Request`],
//! and prints the [`Response`] from [`handle_request`]. All menu state lives in
//! the session value, so the loop runs the same against a terminal or an
//! in-memory reader and writer.

use super::query::best_rank_message;
use super::shared::{RunStats, paint_chart};
use crate::Result;
use crate::app::models::BestRank;
use crate::app::services::catalog::Catalog;
use crate::app::services::chart::ChartRenderer;
use crate::config::ChartConfig;
use crate::constants::MENU_ENTRIES;
use colored::Colorize;
use std::fmt;
use std::io::{BufRead, Write};
use tracing::debug;

/// ANSI sequence that clears the terminal and homes the cursor
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// One user query against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    BestYear(String),
    BestRank(String),
    Plot(String),
    ClearPlot,
    Quit,
}

/// Answer to a [`Request`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    BestYear { name: String, year: i32 },
    BestRank { name: String, best: BestRank },
    Chart { name: String, chart: String },
    NotFound { name: String },
    PlotCleared,
    Goodbye,
}

impl Response {
    /// Whether the request named a name that is not in the dataset
    pub fn is_not_found(&self) -> bool {
        matches!(self, Response::NotFound { .. })
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::BestYear { name, year } => write!(f, "{}'s best year was {}", name, year),
            Response::BestRank { name, best } => write!(f, "{}", best_rank_message(name, best)),
            Response::Chart { chart, .. } => write!(f, "{}", chart.trim_end()),
            Response::NotFound { name } => write!(f, "Error: Name '{}' not found.", name),
            Response::PlotCleared => write!(f, "Plot cleared."),
            Response::Goodbye => write!(f, "Thanks for using Name Surfer!"),
        }
    }
}

/// Answer one request from the catalog
pub fn handle_request(
    catalog: &Catalog,
    renderer: &dyn ChartRenderer,
    request: &Request,
) -> Response {
    debug!("Handling request: {:?}", request);

    let not_found = |name: &str| Response::NotFound {
        name: name.to_string(),
    };

    match request {
        Request::BestYear(name) => match catalog.lookup(name) {
            Some(record) if record.is_ranked() => Response::BestYear {
                name: record.name().to_string(),
                year: record.best_year(),
            },
            Some(record) => Response::BestRank {
                name: record.name().to_string(),
                best: record.best_rank(),
            },
            None => not_found(name),
        },
        Request::BestRank(name) => match catalog.lookup(name) {
            Some(record) => Response::BestRank {
                name: record.name().to_string(),
                best: record.best_rank(),
            },
            None => not_found(name),
        },
        Request::Plot(name) => match catalog.get_series(name) {
            Some(series) => Response::Chart {
                chart: renderer.render(&series),
                name: series.name,
            },
            None => not_found(name),
        },
        Request::ClearPlot => Response::PlotCleared,
        Request::Quit => Response::Goodbye,
    }
}

/// Menu selection entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BestYear,
    BestRank,
    Plot,
    ClearPlot,
    Quit,
}

impl MenuChoice {
    /// Parse a menu number; anything else is an invalid selection
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(Self::BestYear),
            2 => Some(Self::BestRank),
            3 => Some(Self::Plot),
            4 => Some(Self::ClearPlot),
            5 => Some(Self::Quit),
            _ => None,
        }
    }

    fn needs_name(self) -> bool {
        matches!(self, Self::BestYear | Self::BestRank | Self::Plot)
    }

    fn into_request(self, name: String) -> Request {
        match self {
            Self::BestYear => Request::BestYear(name),
            Self::BestRank => Request::BestRank(name),
            Self::Plot => Request::Plot(name),
            Self::ClearPlot => Request::ClearPlot,
            Self::Quit => Request::Quit,
        }
    }
}

/// Interactive menu over a loaded catalog
pub struct MenuSession<'a, R, W> {
    catalog: &'a Catalog,
    renderer: &'a dyn ChartRenderer,
    chart_config: ChartConfig,
    input: R,
    output: W,
    clear_screen: bool,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(
        catalog: &'a Catalog,
        renderer: &'a dyn ChartRenderer,
        chart_config: ChartConfig,
        input: R,
        output: W,
    ) -> Self {
        Self {
            catalog,
            renderer,
            chart_config,
            input,
            output,
            clear_screen: false,
        }
    }

    /// Clear the terminal when the plot is cleared
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Run the menu until the user quits or input ends
    pub fn run(&mut self) -> Result<RunStats> {
        let mut stats = RunStats {
            records_loaded: self.catalog.len(),
            ..Default::default()
        };

        loop {
            self.write_menu()?;

            let Some(selection) = self.prompt("Enter your selection: ")? else {
                break;
            };

            let Some(choice) = MenuChoice::parse(&selection) else {
                writeln!(self.output, "Invalid selection. Please try again.")?;
                continue;
            };

            let name = if choice.needs_name() {
                match self.prompt("Enter a name: ")? {
                    Some(name) => name,
                    None => break,
                }
            } else {
                String::new()
            };

            let response = handle_request(self.catalog, self.renderer, &choice.into_request(name));
            match &response {
                Response::NotFound { .. } => stats.names_not_found += 1,
                Response::PlotCleared | Response::Goodbye => {}
                _ => stats.queries_answered += 1,
            }

            self.write_response(&response)?;
            if response == Response::Goodbye {
                break;
            }
        }

        debug!(
            "Menu session ended after {} queries ({} not found)",
            stats.total_queries(),
            stats.names_not_found
        );
        Ok(stats)
    }

    fn write_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        for (index, entry) in MENU_ENTRIES.iter().enumerate() {
            writeln!(
                self.output,
                "{} – {}",
                (index + 1).to_string().bright_yellow().bold(),
                entry
            )?;
        }
        Ok(())
    }

    /// Write a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn write_response(&mut self, response: &Response) -> Result<()> {
        match response {
            Response::Chart { name, chart } => {
                let painted = paint_chart(chart, name, &self.chart_config);
                write!(self.output, "{}", painted)?;
            }
            Response::PlotCleared if self.clear_screen => {
                write!(self.output, "{}", CLEAR_SCREEN)?;
                writeln!(self.output, "{}", response)?;
            }
            _ => writeln!(self.output, "{}", response)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::chart::TextChart;
    use std::io::Cursor;

    fn catalog() -> Catalog {
        let data = "Emma 3 1 4 8 12 20 30 25 14 6 2\nIda 0 0 5 0 3\nGhost\n";
        Catalog::load_from_reader(data.as_bytes()).unwrap().0
    }

    fn plain_chart() -> ChartConfig {
        ChartConfig {
            use_color: false,
            ..Default::default()
        }
    }

    fn run_session(input: &str) -> (String, RunStats) {
        let catalog = catalog();
        let renderer = TextChart::new(&plain_chart());
        let mut output = Vec::new();
        let stats = MenuSession::new(
            &catalog,
            &renderer,
            plain_chart(),
            Cursor::new(input.as_bytes().to_vec()),
            &mut output,
        )
        .run()
        .unwrap();
        (String::from_utf8(output).unwrap(), stats)
    }

    #[test]
    fn test_handle_best_year() {
        let catalog = catalog();
        let response = handle_request(
            &catalog,
            &TextChart::default(),
            &Request::BestYear("ida".to_string()),
        );

        assert_eq!(
            response,
            Response::BestYear {
                name: "Ida".to_string(),
                year: 1940
            }
        );
        assert_eq!(response.to_string(), "Ida's best year was 1940");
    }

    #[test]
    fn test_handle_best_rank() {
        let catalog = catalog();
        let response = handle_request(
            &catalog,
            &TextChart::default(),
            &Request::BestRank("EMMA".to_string()),
        );

        assert_eq!(response.to_string(), "Emma's best rank was 1 in 1910");
    }

    #[test]
    fn test_handle_never_ranked() {
        let catalog = catalog();
        let response = handle_request(
            &catalog,
            &TextChart::default(),
            &Request::BestYear("ghost".to_string()),
        );

        assert_eq!(
            response.to_string(),
            "Ghost was never ranked between 1900 and 2000"
        );
    }

    #[test]
    fn test_handle_not_found_keeps_input() {
        let catalog = catalog();
        let response = handle_request(
            &catalog,
            &TextChart::default(),
            &Request::Plot("Nobody".to_string()),
        );

        assert!(response.is_not_found());
        assert_eq!(response.to_string(), "Error: Name 'Nobody' not found.");
    }

    #[test]
    fn test_handle_plot() {
        let catalog = catalog();
        let response = handle_request(
            &catalog,
            &TextChart::default(),
            &Request::Plot("emma".to_string()),
        );

        match response {
            Response::Chart { name, chart } => {
                assert_eq!(name, "Emma");
                assert!(chart.starts_with("Popularity of \"Emma\" Over Time"));
            }
            other => panic!("unexpected response: {:?}", other),
        }
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::BestYear));
        assert_eq!(MenuChoice::parse(" 5 \n"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_session_answers_queries_until_quit() {
        let (output, stats) = run_session("1\nemma\n2\nIDA\n1\nNobody\n5\n");

        assert!(output.contains("Find the best year for a name"));
        assert!(output.contains("Emma's best year was 1910"));
        assert!(output.contains("Ida's best rank was 3 in 1940"));
        assert!(output.contains("Error: Name 'Nobody' not found."));
        assert!(output.contains("Thanks for using Name Surfer!"));
        assert_eq!(stats.queries_answered, 2);
        assert_eq!(stats.names_not_found, 1);
        assert_eq!(stats.records_loaded, 3);
    }

    #[test]
    fn test_session_recovers_from_invalid_selection() {
        let (output, stats) = run_session("x\n9\n2\nemma\n5\n");

        let retries = output.matches("Invalid selection. Please try again.");
        assert_eq!(retries.count(), 2);
        assert!(output.contains("Emma's best rank was 1 in 1910"));
        assert_eq!(stats.queries_answered, 1);
    }

    #[test]
    fn test_session_ends_at_end_of_input() {
        let (output, stats) = run_session("3\nemma\n");

        assert!(output.contains("Popularity of \"Emma\" Over Time"));
        assert!(!output.contains("Thanks for using Name Surfer!"));
        assert_eq!(stats.queries_answered, 1);
    }

    #[test]
    fn test_session_clear_plot() {
        let (output, stats) = run_session("4\n5\n");

        assert!(output.contains("Plot cleared."));
        assert!(!output.contains(CLEAR_SCREEN));
        assert_eq!(stats.total_queries(), 0);
    }
}
