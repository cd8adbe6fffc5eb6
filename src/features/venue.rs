//! Venue performance tracking
//!
//! Tracks a batter's scoring at one specific ground.

use serde::Serialize;

use crate::MatchRecord;

/// A batter's record at one venue
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VenueStats {
    pub venue: String,
    /// Balls faced at the venue
    pub balls: usize,
    /// Runs scored at the venue
    pub runs: u64,
}

impl VenueStats {
    /// Collect stats for `venue` from a batter's history
    ///
    /// Rows with no venue never match.
    pub fn compute(records: &[MatchRecord], venue: &str) -> Self {
        let mut stats = VenueStats {
            venue: venue.to_string(),
            ..Default::default()
        };

        for record in records.iter().filter(|r| r.is_at_venue(venue)) {
            stats.balls += 1;
            stats.runs += record.runs as u64;
        }

        stats
    }

    /// Mean runs per ball at the venue, `None` if never batted there
    pub fn average(&self) -> Option<f32> {
        if self.balls == 0 {
            None
        } else {
            Some(self.runs as f32 / self.balls as f32)
        }
    }
}
