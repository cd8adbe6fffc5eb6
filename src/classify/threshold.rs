//! Threshold rule for a single match performance
//!
//! Stands in for a trained classifier. Only runs and strike rate decide the
//! label; the other inputs are carried for display.

use serde::{Deserialize, Serialize};

use crate::PerformanceLabel;

/// Runs needed (together with `HIGH_STRIKE_RATE`) for a High label
pub const HIGH_RUNS: u32 = 75;
/// Strike rate needed (together with `HIGH_RUNS`) for a High label
pub const HIGH_STRIKE_RATE: f32 = 140.0;
/// Runs needed for an Average label
pub const AVERAGE_RUNS: u32 = 30;

/// Statistics for one batting performance, as entered by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStatsInput {
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    pub strike_rate: f32,
}

impl MatchStatsInput {
    /// (label, value) pairs for the metrics chart
    pub fn metrics(&self) -> [(&'static str, f32); 5] {
        [
            ("Runs", self.runs as f32),
            ("Balls", self.balls as f32),
            ("Fours", self.fours as f32),
            ("Sixes", self.sixes as f32),
            ("Strike Rate", self.strike_rate),
        ]
    }
}

/// Fixed decision rule, first match wins
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdClassifier;

impl ThresholdClassifier {
    pub fn new() -> Self {
        ThresholdClassifier
    }

    pub fn classify(&self, input: &MatchStatsInput) -> PerformanceLabel {
        Self::label(input.runs, input.strike_rate)
    }

    /// Apply the rule to the two inputs that matter
    pub fn label(runs: u32, strike_rate: f32) -> PerformanceLabel {
        if runs >= HIGH_RUNS && strike_rate >= HIGH_STRIKE_RATE {
            PerformanceLabel::High
        } else if runs >= AVERAGE_RUNS {
            PerformanceLabel::Average
        } else {
            PerformanceLabel::Low
        }
    }
}
