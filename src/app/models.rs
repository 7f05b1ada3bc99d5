//! Data models for name popularity records
//!
//! This module contains the core data structures for representing one name's
//! rank in each decade of the dataset, along with the query results derived
//! from it.

use crate::constants::{DECADES, UNRANKED, decade_to_year};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Name Record
// =============================================================================

/// One name and its popularity rank for each decade from 1900 to 2000
///
/// A rank of 1 is the most popular name of the decade. A rank of 0 means the
/// name was not ranked in that decade. Records are immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Name as it appears in the dataset (case preserved)
    name: String,

    /// Rank per decade, index 0 is the 1900s
    ranks: [u32; DECADES],
}

/// A parsed record together with the decades whose rank field was unusable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub record: NameRecord,

    /// Decade indices whose token was not a non-negative integer
    pub malformed_decades: Vec<usize>,
}

impl NameRecord {
    /// Parse one dataset line of the form `<name> <rank_0> ... <rank_10>`
    ///
    /// Missing trailing ranks are left unranked, tokens that are not
    /// non-negative integers become unranked and are reported in
    /// `malformed_decades`, and tokens past the last decade are ignored.
    /// A line without any token is an error.
    pub fn parse_line(line: &str) -> Result<ParsedRecord> {
        let mut tokens = line.split_whitespace();

        let name = tokens
            .next()
            .ok_or_else(|| Error::invalid_record(0, "line has no name"))?;

        let mut ranks = [UNRANKED; DECADES];
        let mut malformed_decades = Vec::new();

        for (decade, token) in tokens.take(DECADES).enumerate() {
            match parse_rank(token) {
                Some(rank) => ranks[decade] = rank,
                None => malformed_decades.push(decade),
            }
        }

        Ok(ParsedRecord {
            record: Self {
                name: name.to_string(),
                ranks,
            },
            malformed_decades,
        })
    }

    /// Name as loaded, with its original capitalisation
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All ranks in decade order
    pub fn ranks(&self) -> &[u32; DECADES] {
        &self.ranks
    }

    /// Rank for a decade index (0 for the 1900s, 1 for the 1910s, ...)
    ///
    /// Out-of-range indices return 0, the same value used for "not ranked",
    /// so a 0 result does not say which of the two happened.
    pub fn rank(&self, decade: usize) -> u32 {
        self.ranks.get(decade).copied().unwrap_or(UNRANKED)
    }

    /// Whether the name was ranked in at least one decade
    pub fn is_ranked(&self) -> bool {
        self.ranks.iter().any(|&rank| rank > UNRANKED)
    }

    /// Decade index holding the smallest positive rank
    ///
    /// The earliest decade wins ties. A name that was never ranked returns
    /// decade 0, which is indistinguishable from a genuine 1900s peak; check
    /// [`NameRecord::is_ranked`] before trusting the value.
    pub fn best_decade(&self) -> usize {
        let mut best_rank = u32::MAX;
        let mut best_decade = 0;

        for (decade, &rank) in self.ranks.iter().enumerate() {
            if rank > UNRANKED && rank < best_rank {
                best_rank = rank;
                best_decade = decade;
            }
        }

        best_decade
    }

    /// First year of the decade in which the name was most popular
    pub fn best_year(&self) -> i32 {
        decade_to_year(self.best_decade())
    }

    /// Peak rank together with the year it was reached
    pub fn best_rank(&self) -> BestRank {
        let decade = self.best_decade();
        BestRank {
            rank: self.rank(decade),
            year: decade_to_year(decade),
        }
    }

    /// Full (year, rank) series, unranked decades kept as gaps
    pub fn series(&self) -> Series {
        Series {
            name: self.name.clone(),
            points: self
                .ranks
                .iter()
                .enumerate()
                .map(|(decade, &rank)| SeriesPoint {
                    year: decade_to_year(decade),
                    rank,
                })
                .collect(),
        }
    }
}

impl FromStr for NameRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_line(s).map(|parsed| parsed.record)
    }
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for rank in &self.ranks {
            write!(f, " {}", rank)?;
        }
        Ok(())
    }
}

/// Parse a rank token, rejecting anything that is not a non-negative integer
fn parse_rank(token: &str) -> Option<u32> {
    token.parse::<u32>().ok()
}

// =============================================================================
// Query Results
// =============================================================================

/// Peak rank of a name and the first year of the decade it was reached in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRank {
    pub rank: u32,
    pub year: i32,
}

impl BestRank {
    /// False when the name was never ranked and this is the 1900 default
    pub fn is_ranked(&self) -> bool {
        self.rank > UNRANKED
    }
}

/// One decade of a name's series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub rank: u32,
}

impl SeriesPoint {
    /// Unranked decades are gaps, not points
    pub fn is_gap(&self) -> bool {
        self.rank == UNRANKED
    }
}

/// A name's complete series in ascending year order, one point per decade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// Points that carry a real rank
    pub fn ranked_points(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter().filter(|point| !point.is_gap())
    }

    /// Whether the point at `index` has a ranked neighbour on either side
    pub fn is_connected(&self, index: usize) -> bool {
        let ranked = |i: usize| self.points.get(i).is_some_and(|p| !p.is_gap());
        ranked(index) && ((index > 0 && ranked(index - 1)) || ranked(index + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> NameRecord {
        line.parse().unwrap()
    }

    #[test]
    fn test_parse_full_line() {
        let parsed = NameRecord::parse_line("Emma 3 1 4 8 12 20 30 25 14 6 2").unwrap();

        assert_eq!(parsed.record.name(), "Emma");
        let expected: [u32; DECADES] = [3, 1, 4, 8, 12, 20, 30, 25, 14, 6, 2];
        assert_eq!(parsed.record.ranks(), &expected);
        assert!(parsed.malformed_decades.is_empty());
    }

    #[test]
    fn test_parse_preserves_name_case() {
        assert_eq!(record("McKenzie 0 0 0").name(), "McKenzie");
    }

    #[test]
    fn test_parse_short_line_defaults_to_unranked() {
        let record = record("Zelda 100 200");

        assert_eq!(record.rank(0), 100);
        assert_eq!(record.rank(1), 200);
        for decade in 2..DECADES {
            assert_eq!(record.rank(decade), 0);
        }
    }

    #[test]
    fn test_parse_name_only() {
        let record = record("Solo");
        assert_eq!(record.ranks(), &[0; DECADES]);
        assert!(!record.is_ranked());
    }

    #[test]
    fn test_parse_malformed_token_defaults_to_zero() {
        let parsed = NameRecord::parse_line("Bob abc 5").unwrap();

        assert_eq!(parsed.record.rank(0), 0);
        assert_eq!(parsed.record.rank(1), 5);
        assert_eq!(parsed.malformed_decades, vec![0]);
    }

    #[test]
    fn test_parse_negative_token_is_malformed() {
        let parsed = NameRecord::parse_line("Neg -4 7 2.5").unwrap();

        assert_eq!(parsed.record.rank(0), 0);
        assert_eq!(parsed.record.rank(1), 7);
        assert_eq!(parsed.record.rank(2), 0);
        assert_eq!(parsed.malformed_decades, vec![0, 2]);
    }

    #[test]
    fn test_parse_ignores_extra_tokens() {
        let record = record("Long 1 2 3 4 5 6 7 8 9 10 11 12 13");
        assert_eq!(record.rank(10), 11);
        assert_eq!(record.rank(11), 0);
    }

    #[test]
    fn test_parse_tolerates_repeated_whitespace() {
        let record = record("  Ann\t5   6 ");
        assert_eq!(record.name(), "Ann");
        assert_eq!(record.rank(0), 5);
        assert_eq!(record.rank(1), 6);
    }

    #[test]
    fn test_parse_empty_line_is_error() {
        assert!(NameRecord::parse_line("").is_err());
        assert!(NameRecord::parse_line("   \t ").is_err());
    }

    #[test]
    fn test_rank_out_of_range_is_unranked() {
        let record = record("Emma 3 1 4 8 12 20 30 25 14 6 2");
        assert_eq!(record.rank(DECADES), 0);
        assert_eq!(record.rank(usize::MAX), 0);
    }

    #[test]
    fn test_best_decade_smallest_rank_wins() {
        let record = record("Ida 0 0 5 0 3 0 0 0 0 0 0");

        assert_eq!(record.best_decade(), 4);
        assert_eq!(record.best_year(), 1940);
        assert_eq!(
            record.best_rank(),
            BestRank {
                rank: 3,
                year: 1940
            }
        );
    }

    #[test]
    fn test_best_decade_earliest_tie_wins() {
        let record = record("Tie 7 7 0 0 0 0 0 0 0 0 0");
        assert_eq!(record.best_decade(), 0);
    }

    #[test]
    fn test_best_decade_later_tie_after_gap() {
        let record = record("Tie 0 9 0 9 0 0 0 0 0 0 4");
        assert_eq!(record.best_decade(), 10);
        assert_eq!(record.best_year(), 2000);
    }

    #[test]
    fn test_best_decade_never_ranked_defaults_to_first() {
        let record = record("Ghost 0 0 0 0 0 0 0 0 0 0 0");

        assert_eq!(record.best_decade(), 0);
        assert_eq!(record.best_year(), 1900);
        assert_eq!(record.rank(record.best_decade()), 0);
        assert!(!record.is_ranked());
        assert!(!record.best_rank().is_ranked());
    }

    #[test]
    fn test_best_decade_never_picks_unranked_when_ranked_exists() {
        let record = record("Late 0 0 0 0 0 0 0 0 0 0 900");

        let best = record.best_decade();
        assert!(record.rank(best) > 0);
        assert_eq!(record.best_year(), 2000);
    }

    #[test]
    fn test_series_keeps_gaps() {
        let series = record("Gap 10 0 30").series();

        assert_eq!(series.name, "Gap");
        assert_eq!(series.points.len(), DECADES);
        assert_eq!(
            series.points[0],
            SeriesPoint {
                year: 1900,
                rank: 10
            }
        );
        assert!(series.points[1].is_gap());
        assert_eq!(series.points[1].year, 1910);
        assert_eq!(series.points[10].year, 2000);
        assert_eq!(series.ranked_points().count(), 2);
    }

    #[test]
    fn test_series_connectivity() {
        let series = record("Dot 10 0 30 40").series();

        assert!(!series.is_connected(0));
        assert!(!series.is_connected(1));
        assert!(series.is_connected(2));
        assert!(series.is_connected(3));
        assert!(!series.is_connected(4));
    }

    #[test]
    fn test_display_round_trips_dataset_line() {
        let record = record("Emma 3 1");
        assert_eq!(record.to_string(), "Emma 3 1 0 0 0 0 0 0 0 0 0");
    }
}
