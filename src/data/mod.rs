//! Data ingestion
//!
//! Loads the cleaned ball-by-ball CSV and slices it into per-batter histories.

pub mod dataset;

pub use dataset::{Dataset, DatasetStats, PlayerHistory};
