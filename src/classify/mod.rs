//! Match performance classification
//!
//! Rule-based labelling of manually entered match statistics.

pub mod threshold;

pub use threshold::{MatchStatsInput, ThresholdClassifier};
