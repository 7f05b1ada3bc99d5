//! Name queries answered by the catalog
//!
//! Each query resolves the name with a case-insensitive lookup and returns
//! `None` when no record matches. A miss is ordinary data, not a failure.

use super::Catalog;
use crate::app::models::{BestRank, NameRecord, Series};
use crate::{Error, Result};
use tracing::debug;

impl Catalog {
    /// First year of the decade in which a name was most popular
    ///
    /// A name that was never ranked reports 1900; use
    /// [`Catalog::find_best_rank`] to tell that apart from a real 1900s peak.
    pub fn find_best_year(&self, name: &str) -> Option<i32> {
        let year = self.lookup(name).map(NameRecord::best_year);
        debug!("best year for '{}': {:?}", name, year);
        year
    }

    /// Peak rank of a name and the year it was reached
    pub fn find_best_rank(&self, name: &str) -> Option<BestRank> {
        let best = self.lookup(name).map(NameRecord::best_rank);
        debug!("best rank for '{}': {:?}", name, best);
        best
    }

    /// Complete (year, rank) series for a name, gaps included
    pub fn get_series(&self, name: &str) -> Option<Series> {
        self.lookup(name).map(NameRecord::series)
    }

    /// Look a name up, turning a miss into `Error::NameNotFound`
    ///
    /// For front ends that report a miss as a failed command.
    pub fn require(&self, name: &str) -> Result<&NameRecord> {
        self.lookup(name).ok_or_else(|| Error::name_not_found(name))
    }
}
