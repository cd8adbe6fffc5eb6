//! Model inference for runs predictions

use serde::Serialize;

use crate::data::Dataset;
use crate::features::{FeatureVector, PlayerReport};
use crate::model::{self, RunsModel};
use crate::{Config, CricketError, Result};

/// Expected runs for a batter at a venue
#[derive(Debug, Clone, Serialize)]
pub struct RunsPrediction {
    pub batter: String,
    pub venue: String,
    pub features: FeatureVector,
    /// Raw regressor output
    pub raw: f32,
    /// Raw output truncated toward zero
    pub expected_runs: i64,
}

/// Read-only prediction context: the dataset plus the loaded regressor
///
/// Built once at start-up and shared by reference for every query.
pub struct Predictor {
    dataset: Dataset,
    model: Box<dyn RunsModel>,
}

impl Predictor {
    /// Create a new predictor
    ///
    /// Fails if the model does not accept a `FeatureVector::DIM` input.
    pub fn new(dataset: Dataset, model: Box<dyn RunsModel>) -> Result<Self> {
        if model.input_dim() != FeatureVector::DIM {
            return Err(CricketError::FeatureShape {
                expected: model.input_dim(),
                actual: FeatureVector::DIM,
            });
        }
        Ok(Predictor { dataset, model })
    }

    /// Load dataset and model from config
    pub fn load(config: &Config) -> Result<Self> {
        let dataset = Dataset::open(&config.data.dataset_path)?;
        let model = model::load_model(&config.model)?;
        Self::new(dataset, model)
    }

    /// Predict expected runs for a batter at a venue
    pub fn predict(&self, batter: &str, venue: &str) -> Result<RunsPrediction> {
        let history = self.dataset.player_history(batter);
        if history.is_empty() {
            log::warn!("No records for batter '{}', predicting from an empty history", batter);
        }

        let features = FeatureVector::build(history.records(), venue);
        log::debug!("Feature vector for {} at {}: {:?}", batter, venue, features);

        let raw = self.model.predict(&features.to_array())?;
        if !raw.is_finite() {
            return Err(CricketError::Model(format!(
                "Non-finite prediction {} for {}",
                raw, batter
            )));
        }

        Ok(RunsPrediction {
            batter: batter.to_string(),
            venue: venue.to_string(),
            features,
            raw,
            expected_runs: raw.trunc() as i64,
        })
    }

    /// Summary report for a batter at a venue
    pub fn report(&self, batter: &str, venue: Option<&str>) -> PlayerReport {
        self.dataset.report(batter, venue)
    }
}

/// Format a prediction for display
pub fn format_prediction(pred: &RunsPrediction) -> String {
    format!(
        r#"
┌─────────────────────────────────────────────────┐
│  {} at {}
├─────────────────────────────────────────────────┤
│  Expected runs:    {}
│  Model output:     {:.2}
└─────────────────────────────────────────────────┘
"#,
        pred.batter, pred.venue, pred.expected_runs, pred.raw
    )
}

/// Format a player report for display
pub fn format_report(report: &PlayerReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", report.batter));
    out.push_str("───────────────────────────────\n");
    out.push_str(&format!("  Total runs:   {}\n", report.summary.total_runs));
    out.push_str(&format!("  Balls faced:  {}\n", report.summary.balls));
    out.push_str(&format!("  Matches:      {}\n", report.summary.matches));
    out.push_str(&format!("  Average:      {:.2}\n", report.summary.average));
    out.push_str(&format!("  Strike rate:  {:.2}\n", report.summary.strike_rate));

    let recent: Vec<String> = report.recent_innings.iter().map(|r| r.to_string()).collect();
    out.push_str(&format!("\n  Last {} balls: {}\n", recent.len(), recent.join(" ")));

    if let Some(venue) = &report.venue {
        match report.venue_average {
            Some(avg) => out.push_str(&format!("  Venue avg:    {:.2} ({})\n", avg, venue)),
            None => out.push_str(&format!("  Venue avg:    n/a ({})\n", venue)),
        }
    }

    if !report.season_runs.is_empty() {
        out.push_str("\n  Season   Runs\n");
        for season in &report.season_runs {
            out.push_str(&format!("  {:<8} {:>5}\n", season.season, season.runs));
        }
    }

    out
}
