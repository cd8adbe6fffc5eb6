//! Feed-forward runs regressor
//!
//! Architecture: Input(12) → Hidden(n) → ReLU → ... → Output(1) → ReLU
//!
//! Weights are produced by an external training run and stored as a burn
//! named MessagePack record.

use burn::module::Module;
use burn::nn::{Linear, LinearConfig};
use burn::record::{FullPrecisionSettings, Recorder};
use burn::tensor::activation::relu;
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use super::RunsModel;
use crate::{CricketError, Result};

/// Configuration for the regressor
#[derive(Debug, Clone)]
pub struct RunsRegressorConfig {
    /// Input dimension (feature vector width)
    pub input_dim: usize,
    /// Hidden layer widths, e.g. [64, 32]
    pub hidden_dims: Vec<usize>,
}

impl Default for RunsRegressorConfig {
    fn default() -> Self {
        RunsRegressorConfig {
            input_dim: crate::features::FeatureVector::DIM,
            hidden_dims: vec![64, 32],
        }
    }
}

/// MLP mapping a feature vector to expected runs
#[derive(Module, Debug)]
pub struct RunsRegressor<B: Backend> {
    hidden: Vec<Linear<B>>,
    output: Linear<B>,
}

impl<B: Backend> RunsRegressor<B> {
    pub fn new(device: &B::Device, config: &RunsRegressorConfig) -> Self {
        let mut hidden = Vec::with_capacity(config.hidden_dims.len());
        let mut in_dim = config.input_dim;
        for &out_dim in &config.hidden_dims {
            hidden.push(LinearConfig::new(in_dim, out_dim).init(device));
            in_dim = out_dim;
        }

        RunsRegressor {
            hidden,
            output: LinearConfig::new(in_dim, 1).init(device),
        }
    }

    /// Input width of the first layer, as stored in the weights
    pub fn input_dim(&self) -> usize {
        self.hidden
            .first()
            .unwrap_or(&self.output)
            .weight
            .val()
            .dims()[0]
    }

    /// Forward pass
    ///
    /// # Arguments
    /// * `features` - Feature vectors [batch, input_dim]
    ///
    /// # Returns
    /// Expected runs [batch, 1], never negative
    pub fn forward(&self, features: Tensor<B, 2>) -> Tensor<B, 2> {
        let mut x = features;
        for layer in &self.hidden {
            x = relu(layer.forward(x));
        }
        relu(self.output.forward(x))
    }

    /// Save model to file
    pub fn save(&self, path: &str) -> Result<()>
    where
        B::FloatElem: serde::Serialize + serde::de::DeserializeOwned,
        B::IntElem: serde::Serialize + serde::de::DeserializeOwned,
    {
        let recorder = burn::record::NamedMpkFileRecorder::<FullPrecisionSettings>::new();
        recorder
            .record(self.clone().into_record(), path.into())
            .map_err(|e| CricketError::Model(e.to_string()))
    }

    /// Load model from file
    pub fn load(device: &B::Device, path: &str, config: &RunsRegressorConfig) -> Result<Self>
    where
        B::FloatElem: serde::Serialize + serde::de::DeserializeOwned,
        B::IntElem: serde::Serialize + serde::de::DeserializeOwned,
    {
        let recorder = burn::record::NamedMpkFileRecorder::<FullPrecisionSettings>::new();
        let record: RunsRegressorRecord<B> = recorder
            .load(path.into(), device)
            .map_err(|e| CricketError::Model(e.to_string()))?;

        if record.hidden.len() != config.hidden_dims.len() {
            return Err(CricketError::Model(format!(
                "Record has {} hidden layers, config expects {}",
                record.hidden.len(),
                config.hidden_dims.len()
            )));
        }

        let model = Self::new(device, config);
        Ok(model.load_record(record))
    }
}

/// `RunsModel` backed by a burn regressor
pub struct MlpRunsModel<B: Backend> {
    model: RunsRegressor<B>,
    device: B::Device,
    input_dim: usize,
}

impl<B: Backend> MlpRunsModel<B> {
    pub fn new(model: RunsRegressor<B>, device: B::Device) -> Self {
        let input_dim = model.input_dim();
        MlpRunsModel {
            model,
            device,
            input_dim,
        }
    }

    /// Load weights from `<path>.mpk` (burn adds the extension)
    pub fn load(path: &str, config: RunsRegressorConfig, device: B::Device) -> Result<Self>
    where
        B::FloatElem: serde::Serialize + serde::de::DeserializeOwned,
        B::IntElem: serde::Serialize + serde::de::DeserializeOwned,
    {
        let model_file = format!("{}.mpk", path);
        if !std::path::Path::new(&model_file).exists() {
            return Err(CricketError::NoModel(model_file));
        }

        let model = RunsRegressor::load(&device, path, &config)?;
        log::info!(
            "Loaded MLP regressor from {} (hidden layers {:?})",
            model_file,
            config.hidden_dims
        );
        Ok(Self::new(model, device))
    }
}

impl<B: Backend> RunsModel for MlpRunsModel<B> {
    fn input_dim(&self) -> usize {
        self.input_dim
    }

    fn predict(&self, features: &[f32]) -> Result<f32> {
        if features.len() != self.input_dim {
            return Err(CricketError::FeatureShape {
                expected: self.input_dim,
                actual: features.len(),
            });
        }

        let input = Tensor::<B, 1>::from_floats(features, &self.device).reshape([1, self.input_dim]);
        let output = self.model.forward(input);

        let values = output
            .into_data()
            .convert::<f32>()
            .to_vec::<f32>()
            .map_err(|e| CricketError::Model(format!("{:?}", e)))?;

        values
            .first()
            .copied()
            .ok_or_else(|| CricketError::Model("Regressor returned no output".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_forward_shape() {
        let device = Default::default();
        let model = RunsRegressor::<TestBackend>::new(&device, &RunsRegressorConfig::default());

        let features = Tensor::random(
            [4, crate::features::FeatureVector::DIM],
            burn::tensor::Distribution::Normal(0.0, 1.0),
            &device,
        );
        let output = model.forward(features);

        assert_eq!(output.dims(), [4, 1]);
        let data = output.to_data();
        for val in data.as_slice::<f32>().unwrap() {
            assert!(*val >= 0.0, "Runs should be non-negative, got {}", val);
        }
    }

    #[test]
    fn test_no_hidden_layers() {
        let device = Default::default();
        let config = RunsRegressorConfig {
            input_dim: 12,
            hidden_dims: vec![],
        };
        let model = RunsRegressor::<TestBackend>::new(&device, &config);
        let output = model.forward(Tensor::zeros([2, 12], &device));
        assert_eq!(output.dims(), [2, 1]);
    }

    #[test]
    fn test_predict() {
        let device = Default::default();
        let config = RunsRegressorConfig::default();
        let regressor = RunsRegressor::<TestBackend>::new(&device, &config);
        let model = MlpRunsModel::new(regressor, device);

        let runs = model.predict(&[1.0; 12]).unwrap();
        assert!(runs.is_finite());
        assert!(runs >= 0.0);

        let err = model.predict(&[1.0; 6]).unwrap_err();
        assert!(matches!(err, CricketError::FeatureShape { expected: 12, actual: 6 }));
    }

    #[test]
    fn test_save_and_load() {
        let device = Default::default();
        let config = RunsRegressorConfig::default();
        let regressor = RunsRegressor::<TestBackend>::new(&device, &config);

        let path = std::env::temp_dir()
            .join(format!("cricket_mlp_{}", std::process::id()))
            .to_string_lossy()
            .to_string();
        regressor.save(&path).unwrap();

        let original = MlpRunsModel::new(regressor, device.clone());
        let loaded = MlpRunsModel::<TestBackend>::load(&path, config, device).unwrap();

        let features = [0.5, 1.0, 1.2, 1.2, 300.0, 250.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let a = original.predict(&features).unwrap();
        let b = loaded.predict(&features).unwrap();
        assert!((a - b).abs() < 1e-5);

        let _ = std::fs::remove_file(format!("{}.mpk", path));
    }

    #[test]
    fn test_input_dim_read_from_weights() {
        let device = Default::default();
        let narrow = RunsRegressorConfig {
            input_dim: 11,
            hidden_dims: vec![64, 32],
        };
        let path = std::env::temp_dir()
            .join(format!("cricket_mlp_narrow_{}", std::process::id()))
            .to_string_lossy()
            .to_string();
        RunsRegressor::<TestBackend>::new(&device, &narrow)
            .save(&path)
            .unwrap();

        // Config claims 12 inputs; the stored weights win
        let loaded =
            MlpRunsModel::<TestBackend>::load(&path, RunsRegressorConfig::default(), device).unwrap();
        assert_eq!(loaded.input_dim(), 11);

        let err = loaded.predict(&[1.0; 12]).unwrap_err();
        assert!(matches!(err, CricketError::FeatureShape { expected: 11, actual: 12 }));

        let _ = std::fs::remove_file(format!("{}.mpk", path));
    }

    #[test]
    fn test_input_dim_without_hidden_layers() {
        let device = Default::default();
        let config = RunsRegressorConfig {
            input_dim: 7,
            hidden_dims: vec![],
        };
        let model = RunsRegressor::<TestBackend>::new(&device, &config);
        assert_eq!(model.input_dim(), 7);
    }

    #[test]
    fn test_layer_count_mismatch() {
        let device = Default::default();
        let path = std::env::temp_dir()
            .join(format!("cricket_mlp_layers_{}", std::process::id()))
            .to_string_lossy()
            .to_string();
        RunsRegressor::<TestBackend>::new(&device, &RunsRegressorConfig::default())
            .save(&path)
            .unwrap();

        let shallow = RunsRegressorConfig {
            input_dim: 12,
            hidden_dims: vec![],
        };
        let result = MlpRunsModel::<TestBackend>::load(&path, shallow, device);
        assert!(matches!(result, Err(CricketError::Model(_))));

        let _ = std::fs::remove_file(format!("{}.mpk", path));
    }

    #[test]
    fn test_missing_artifact() {
        let device = Default::default();
        let result = MlpRunsModel::<TestBackend>::load(
            "/nonexistent/cricket/model",
            RunsRegressorConfig::default(),
            device,
        );
        assert!(matches!(result, Err(CricketError::NoModel(_))));
    }
}
