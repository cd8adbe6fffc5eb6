//! Feature vector for the runs regressor
//!
//! The regressor was trained on a 12-column input that mixes batting and
//! bowling features. Only batting data exists in the ball-by-ball dataset, so
//! the six bowling slots are always zero. Slot order is part of the model
//! contract and must not change.

use serde::Serialize;

use crate::features::player_stats::{mean_runs, tail};
use crate::features::venue::VenueStats;
use crate::{CricketError, MatchRecord, Result};

/// Number of most recent balls averaged into `batting_form`
pub const FORM_WINDOW: usize = 5;

/// Substituted for any mean taken over an empty selection
pub const EMPTY_MEAN_FALLBACK: f32 = 0.0;

/// Slot names in model input order
pub const SLOT_NAMES: [&str; FeatureVector::DIM] = [
    "batting_form",
    "runs_at_venue",
    "runs_vs_opponent",
    "runs_batter",
    "career_runs",
    "balls_faced",
    "wickets",
    "career_wickets",
    "wickets_at_venue",
    "wickets_vs_opponent",
    "bowling_form",
    "runs_conceded",
];

/// Model input for one (batter, venue) prediction
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureVector {
    /// Mean runs over the last `FORM_WINDOW` balls
    pub batting_form: f32,
    /// Mean runs per ball at the selected venue
    pub runs_at_venue: f32,
    /// Proxy: same as `runs_batter`, opponent filtering is not available
    pub runs_vs_opponent: f32,
    /// Mean runs per ball over the whole history
    pub runs_batter: f32,
    /// Sum of runs over the whole history
    pub career_runs: f32,
    /// Number of balls in the history
    pub balls_faced: f32,
    pub wickets: f32,
    pub career_wickets: f32,
    pub wickets_at_venue: f32,
    pub wickets_vs_opponent: f32,
    pub bowling_form: f32,
    pub runs_conceded: f32,
}

impl FeatureVector {
    /// Dimension of feature vector
    pub const DIM: usize = 12;

    /// Build the vector from a batter's history and a venue selection
    pub fn build(records: &[MatchRecord], venue: &str) -> Self {
        let form = mean_runs(tail(records, FORM_WINDOW));
        let at_venue = VenueStats::compute(records, venue).average();
        let overall = mean_runs(records);
        let career_runs: u64 = records.iter().map(|r| r.runs as u64).sum();

        if at_venue.is_none() && !records.is_empty() {
            log::warn!("No balls faced at '{}', using {} for runs_at_venue", venue, EMPTY_MEAN_FALLBACK);
        }

        let overall = overall.unwrap_or(EMPTY_MEAN_FALLBACK);

        FeatureVector {
            batting_form: form.unwrap_or(EMPTY_MEAN_FALLBACK),
            runs_at_venue: at_venue.unwrap_or(EMPTY_MEAN_FALLBACK),
            runs_vs_opponent: overall,
            runs_batter: overall,
            career_runs: career_runs as f32,
            balls_faced: records.len() as f32,
            // No bowling data in the ball-by-ball dataset
            wickets: 0.0,
            career_wickets: 0.0,
            wickets_at_venue: 0.0,
            wickets_vs_opponent: 0.0,
            bowling_form: 0.0,
            runs_conceded: 0.0,
        }
    }

    /// Convert to model input order
    pub fn to_array(&self) -> [f32; Self::DIM] {
        [
            self.batting_form,
            self.runs_at_venue,
            self.runs_vs_opponent,
            self.runs_batter,
            self.career_runs,
            self.balls_faced,
            self.wickets,
            self.career_wickets,
            self.wickets_at_venue,
            self.wickets_vs_opponent,
            self.bowling_form,
            self.runs_conceded,
        ]
    }

    /// Create from a flat slice in model input order
    pub fn from_slice(v: &[f32]) -> Result<Self> {
        if v.len() != Self::DIM {
            return Err(CricketError::FeatureShape {
                expected: Self::DIM,
                actual: v.len(),
            });
        }
        Ok(FeatureVector {
            batting_form: v[0],
            runs_at_venue: v[1],
            runs_vs_opponent: v[2],
            runs_batter: v[3],
            career_runs: v[4],
            balls_faced: v[5],
            wickets: v[6],
            career_wickets: v[7],
            wickets_at_venue: v[8],
            wickets_vs_opponent: v[9],
            bowling_form: v[10],
            runs_conceded: v[11],
        })
    }

    /// (name, value) pairs in slot order
    pub fn named_slots(&self) -> impl Iterator<Item = (&'static str, f32)> {
        SLOT_NAMES.into_iter().zip(self.to_array())
    }
}
