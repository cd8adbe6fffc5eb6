//! Season-by-season run totals

use std::collections::BTreeMap;

use serde::Serialize;

use crate::MatchRecord;

/// Runs scored in one season
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonRuns {
    pub season: String,
    pub runs: u64,
}

/// Sum runs per season, sorted ascending by season identifier
///
/// Seasons are compared as strings, so "2007/08" sorts before "2009".
pub fn season_totals(records: &[MatchRecord]) -> Vec<SeasonRuns> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.season.as_str()).or_default() += record.runs as u64;
    }

    totals
        .into_iter()
        .map(|(season, runs)| SeasonRuns {
            season: season.to_string(),
            runs,
        })
        .collect()
}
