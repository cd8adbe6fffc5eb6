//! Player report consumed by the display layer

use serde::Serialize;

use crate::data::PlayerHistory;
use crate::features::player_stats::tail;
use crate::features::{season_totals, PerformanceSummary, SeasonRuns, VenueStats};

/// Number of recent balls shown in the form series
pub const RECENT_INNINGS: usize = 10;

/// Everything the dashboard shows about one batter
#[derive(Debug, Clone, Serialize)]
pub struct PlayerReport {
    pub batter: String,
    pub venue: Option<String>,
    pub summary: PerformanceSummary,
    /// Runs off each of the last `RECENT_INNINGS` balls, oldest first
    pub recent_innings: Vec<u32>,
    /// Mean runs per ball at the venue, `None` if no venue chosen or never batted there
    pub venue_average: Option<f32>,
    pub season_runs: Vec<SeasonRuns>,
}

impl PlayerReport {
    pub fn build(history: &PlayerHistory, venue: Option<&str>) -> Self {
        let records = history.records();

        PlayerReport {
            batter: history.batter.clone(),
            venue: venue.map(str::to_string),
            summary: PerformanceSummary::from_records(records),
            recent_innings: tail(records, RECENT_INNINGS).iter().map(|r| r.runs).collect(),
            venue_average: venue.and_then(|v| VenueStats::compute(records, v).average()),
            season_runs: season_totals(records),
        }
    }
}
