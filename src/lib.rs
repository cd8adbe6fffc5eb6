//! IPL batter performance toolkit
//!
//! Summarises ball-by-ball batting records, builds the fixed 12-slot feature
//! vector consumed by a pre-trained runs regressor, and classifies manually
//! entered match performances.

pub mod classify;
pub mod data;
pub mod features;
pub mod model;
pub mod predict;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single ball faced by a batter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub batter: String,
    #[serde(default)]
    pub venue: Option<String>,
    /// Bowling side; carried for display, never used for filtering
    #[serde(default, rename = "bowling_team")]
    pub opponent: Option<String>,
    pub season: String,
    #[serde(rename = "match_number")]
    pub match_id: String,
    #[serde(rename = "runs_batter")]
    pub runs: u32,
}

impl MatchRecord {
    /// Check if this ball was faced at the given venue
    pub fn is_at_venue(&self, venue: &str) -> bool {
        self.venue.as_deref() == Some(venue)
    }
}

/// Outcome of the threshold rule for a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLabel {
    High,
    Average,
    Low,
}

impl fmt::Display for PerformanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceLabel::High => write!(f, "High Performance"),
            PerformanceLabel::Average => write!(f, "Average Performance"),
            PerformanceLabel::Low => write!(f, "Low Performance"),
        }
    }
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum CricketError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    #[error("No model found at {0} - train one and export it first")]
    NoModel(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Feature vector has {actual} values, model expects {expected}")]
    FeatureShape { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CricketError>;

/// Application configuration loaded from config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub dataset_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub kind: ModelKind,
    /// Artifact path without extension
    pub path: String,
    /// Hidden layer widths for the MLP regressor
    #[serde(default = "default_hidden_dims")]
    pub hidden_dims: Vec<usize>,
}

fn default_hidden_dims() -> Vec<usize> {
    vec![64, 32]
}

/// Which regressor implementation backs predictions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Mlp,
    Linear,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Mlp => write!(f, "mlp"),
            ModelKind::Linear => write!(f, "linear"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: DataConfig {
                dataset_path: "ipl_cleaned_data.csv".to_string(),
            },
            model: ModelConfig {
                kind: ModelKind::Mlp,
                path: "models/runs_model".to_string(),
                hidden_dims: default_hidden_dims(),
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CricketError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| CricketError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CricketError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("kind = \"mlp\""));

        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.model.kind, ModelKind::Mlp);
        assert_eq!(parsed.model.hidden_dims, vec![64, 32]);
        assert_eq!(parsed.data.dataset_path, "ipl_cleaned_data.csv");
    }

    #[test]
    fn test_linear_config() {
        let text = r#"
            [data]
            dataset_path = "balls.csv"

            [model]
            kind = "linear"
            path = "models/linear"
        "#;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.model.kind, ModelKind::Linear);
        assert_eq!(config.model.hidden_dims, vec![64, 32]);
    }

    #[test]
    fn test_mlp_config_default_hidden_dims() {
        let text = r#"
            [data]
            dataset_path = "balls.csv"

            [model]
            kind = "mlp"
            path = "models/runs_model"
        "#;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.model.kind, ModelKind::Mlp);
        assert_eq!(config.model.hidden_dims, vec![64, 32]);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(PerformanceLabel::High.to_string(), "High Performance");
        assert_eq!(PerformanceLabel::Low.to_string(), "Low Performance");
    }
}
