//! Integration tests for loading a name dataset and querying it
//!
//! These tests write small datasets to disk and drive the public API the way
//! the command-line front end does.

use name_surfer::app::services::chart::{ChartRenderer, TextChart};
use name_surfer::cli::commands::interactive::{Request, Response, handle_request};
use name_surfer::constants::{DECADES, START};
use name_surfer::{Catalog, Error, NameRecord, SurferConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const DATASET: &str = "\
Sam 58 69 99 131 168 236 278 380 467 408 466
Samantha 0 0 0 0 0 0 272 107 26 5 7
Samara 0 0 0 0 0 0 0 0 0 0 886
Emma 3 1 4 8 12 20 30 25 14 6 2
Bob abc 5
Ghost 0 0 0 0 0 0 0 0 0 0 0

Zelda 436 420 468 526 789 925 0 0 0 0 0
";

fn write_dataset(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("name_data.txt");
    fs::write(&path, content).unwrap();
    path
}

fn load() -> Catalog {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dataset(&temp_dir, DATASET);
    let (catalog, _) = Catalog::load_from_path(&path, false).unwrap();
    catalog
}

/// Every parsed rank field is reported by `rank`, every other index is 0
#[test]
fn test_ranks_match_dataset_fields() {
    let catalog = load();

    for line in DATASET.lines().filter(|line| !line.trim().is_empty()) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let record = catalog.lookup(tokens[0]).unwrap();

        assert_eq!(record.name(), tokens[0]);
        for decade in 0..DECADES {
            let expected = tokens
                .get(decade + 1)
                .and_then(|token| token.parse::<u32>().ok())
                .unwrap_or(0);
            assert_eq!(
                record.rank(decade),
                expected,
                "{} decade {}",
                tokens[0],
                decade
            );
        }
        assert_eq!(record.rank(DECADES), 0);
    }
}

/// The best decade is never an unranked one unless the name was never ranked
#[test]
fn test_best_decade_is_ranked_when_possible() {
    let catalog = load();

    for record in catalog.iter() {
        let best = record.best_decade();
        if record.is_ranked() {
            assert!(record.rank(best) > 0, "{}", record.name());
            let smallest = record
                .ranks()
                .iter()
                .filter(|&&rank| rank > 0)
                .min()
                .unwrap();
            assert_eq!(record.rank(best), *smallest);
        } else {
            assert_eq!(best, 0);
            assert_eq!(record.rank(best), 0);
        }
    }
}

#[test]
fn test_queries_against_loaded_dataset() {
    let catalog = load();

    assert_eq!(catalog.find_best_year("sam"), Some(1900));
    assert_eq!(catalog.find_best_year("SAMANTHA"), Some(1990));
    let samara = catalog.find_best_rank("samara").unwrap();
    assert_eq!((samara.rank, samara.year), (886, 2000));
    let ghost = catalog.find_best_rank("Ghost").unwrap();
    assert_eq!((ghost.rank, ghost.year), (0, START));
    assert!(!ghost.is_ranked());
    assert!(catalog.find_best_year("Sa").is_none());

    let series = catalog.get_series("zelda").unwrap();
    assert_eq!(series.points.len(), DECADES);
    assert_eq!(series.ranked_points().count(), 6);
    assert!(series.points[6].is_gap());
}

#[test]
fn test_malformed_field_does_not_stop_loading() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_dataset(&temp_dir, DATASET);

    let (catalog, stats) = Catalog::load_from_path(&path, false).unwrap();

    assert_eq!(catalog.len(), 7);
    assert_eq!(stats.blank_lines, 1);
    assert_eq!(stats.malformed_fields, 1);

    let bob = catalog.lookup("bob").unwrap();
    assert_eq!(bob.rank(0), 0);
    assert_eq!(bob.rank(1), 5);
}

#[test]
fn test_missing_dataset_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = SurferConfig::default()
        .with_data_path(temp_dir.path().join("missing.txt"))
        .without_progress();

    let result = Catalog::load_from_path(&config.resolve_data_path(), config.show_progress);
    match result {
        Err(Error::DatasetNotFound { path }) => assert!(path.ends_with("missing.txt")),
        Err(other) => panic!("expected DatasetNotFound, got {}", other),
        Ok(_) => panic!("expected DatasetNotFound, dataset loaded"),
    }
}

#[test]
fn test_request_response_boundary() {
    let catalog = load();
    let renderer = TextChart::default();

    let response = handle_request(&catalog, &renderer, &Request::BestRank("emma".into()));
    assert_eq!(response.to_string(), "Emma's best rank was 1 in 1910");

    let response = handle_request(&catalog, &renderer, &Request::BestYear("Nobody".into()));
    assert_eq!(
        response,
        Response::NotFound {
            name: "Nobody".to_string()
        }
    );

    let response = handle_request(&catalog, &renderer, &Request::Quit);
    assert_eq!(response, Response::Goodbye);
}

#[test]
fn test_chart_for_loaded_name() {
    let catalog = load();
    let series = catalog.get_series("Samantha").unwrap();

    let chart = TextChart::default().render(&series);
    assert!(chart.starts_with("Popularity of \"Samantha\" Over Time"));
    assert!(chart.contains("2000"));
}

#[test]
fn test_record_from_str_matches_catalog() {
    let catalog = load();
    let record: NameRecord = "Emma 3 1 4 8 12 20 30 25 14 6 2".parse().unwrap();

    assert_eq!(catalog.lookup("emma"), Some(&record));
}
