//! Linear runs model read from JSON
//!
//! `{ "weights": [w1, ..., w12], "bias": b }`

use serde::{Deserialize, Serialize};

use super::RunsModel;
use crate::{CricketError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRunsModel {
    pub weights: Vec<f32>,
    pub bias: f32,
}

impl LinearRunsModel {
    pub fn new(weights: Vec<f32>, bias: f32) -> Self {
        LinearRunsModel { weights, bias }
    }

    /// Load from `<path>.json`
    pub fn load(path: &str) -> Result<Self> {
        let model_file = format!("{}.json", path);
        if !std::path::Path::new(&model_file).exists() {
            return Err(CricketError::NoModel(model_file));
        }

        let content = std::fs::read_to_string(&model_file)?;
        let model = Self::from_json(&content)?;
        log::info!(
            "Loaded linear model from {} ({} weights)",
            model_file,
            model.weights.len()
        );
        Ok(model)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| CricketError::Parse(format!("Invalid linear model: {}", e)))
    }
}

impl RunsModel for LinearRunsModel {
    fn input_dim(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, features: &[f32]) -> Result<f32> {
        if features.len() != self.weights.len() {
            return Err(CricketError::FeatureShape {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }

        let dot: f32 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum();
        Ok(dot + self.bias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let model = LinearRunsModel::from_json(
            r#"{"weights": [1.0, 2.0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0], "bias": 0.5}"#,
        )
        .unwrap();

        assert_eq!(model.input_dim(), 12);
        let mut features = [0.0; 12];
        features[0] = 3.0;
        features[1] = 1.5;
        assert_eq!(model.predict(&features).unwrap(), 6.5);
    }

    #[test]
    fn test_invalid_json() {
        let err = LinearRunsModel::from_json("{\"weights\": 3}").unwrap_err();
        assert!(matches!(err, CricketError::Parse(_)));
    }

    #[test]
    fn test_shape_mismatch() {
        let model = LinearRunsModel::new(vec![1.0; 12], 0.0);
        let err = model.predict(&[1.0; 13]).unwrap_err();
        assert!(matches!(
            err,
            CricketError::FeatureShape {
                expected: 12,
                actual: 13
            }
        ));
    }
}
