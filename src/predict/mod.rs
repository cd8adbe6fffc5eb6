//! Prediction and inference
//!
//! Load the runs regressor and generate expected-runs predictions.

pub mod inference;

pub use inference::{Predictor, RunsPrediction};
