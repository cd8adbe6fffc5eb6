//! Feature extraction
//!
//! Turns a batter's ball-by-ball history into summary statistics and the
//! fixed-width vector the runs regressor expects.

pub mod feature_vector;
pub mod player_stats;
pub mod report;
pub mod season;
pub mod venue;

pub use feature_vector::FeatureVector;
pub use player_stats::PerformanceSummary;
pub use report::PlayerReport;
pub use season::{season_totals, SeasonRuns};
pub use venue::VenueStats;
