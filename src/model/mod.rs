//! Runs regressors
//!
//! The regressor itself is trained elsewhere; this module only loads it and
//! runs inference. Two artifact formats are supported:
//! - MLP: burn feed-forward network (`<path>.mpk`)
//! - Linear: weights and bias in JSON (`<path>.json`)

pub mod linear;
pub mod mlp;

pub use linear::LinearRunsModel;
pub use mlp::{MlpRunsModel, RunsRegressor, RunsRegressorConfig};

use crate::features::FeatureVector;
use crate::{ModelConfig, ModelKind, Result};

/// CPU backend used for inference
pub type InferenceBackend = burn::backend::NdArray<f32>;

/// Black-box regressor: feature vector in, expected runs out
pub trait RunsModel {
    /// Number of features the model was trained on
    fn input_dim(&self) -> usize;

    /// Predict expected runs for a single feature vector
    fn predict(&self, features: &[f32]) -> Result<f32>;
}

/// Load the model described by config
pub fn load_model(config: &ModelConfig) -> Result<Box<dyn RunsModel>> {
    match config.kind {
        ModelKind::Mlp => {
            let regressor_config = RunsRegressorConfig {
                input_dim: FeatureVector::DIM,
                hidden_dims: config.hidden_dims.clone(),
            };
            let device = Default::default();
            let model = MlpRunsModel::<InferenceBackend>::load(&config.path, regressor_config, device)?;
            Ok(Box::new(model))
        }
        ModelKind::Linear => Ok(Box::new(LinearRunsModel::load(&config.path)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CricketError;

    #[test]
    fn test_load_missing_linear() {
        let config = ModelConfig {
            kind: ModelKind::Linear,
            path: "/nonexistent/cricket/linear".to_string(),
            hidden_dims: vec![],
        };
        match load_model(&config) {
            Err(CricketError::NoModel(path)) => assert!(path.ends_with(".json")),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("expected missing model"),
        }
    }

    #[test]
    fn test_load_linear() {
        let path = std::env::temp_dir()
            .join(format!("cricket_linear_{}", std::process::id()))
            .to_string_lossy()
            .to_string();
        let model = LinearRunsModel::new(vec![0.5; FeatureVector::DIM], 1.0);
        std::fs::write(format!("{}.json", path), serde_json::to_string(&model).unwrap()).unwrap();

        let config = ModelConfig {
            kind: ModelKind::Linear,
            path: path.clone(),
            hidden_dims: vec![],
        };
        let loaded = load_model(&config).unwrap();
        assert_eq!(loaded.input_dim(), FeatureVector::DIM);
        assert_eq!(loaded.predict(&[2.0; 12]).unwrap(), 13.0);

        let _ = std::fs::remove_file(format!("{}.json", path));
    }
}
