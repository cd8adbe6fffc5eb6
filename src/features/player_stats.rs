//! Batter summary statistics
//!
//! Aggregates computed over a batter's full ball-by-ball history.

use std::collections::HashSet;

use serde::Serialize;

use crate::MatchRecord;

/// Career batting summary
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PerformanceSummary {
    /// Total runs off the bat
    pub total_runs: u64,
    /// Balls faced (one record per ball)
    pub balls: usize,
    /// Distinct matches batted in
    pub matches: usize,
    /// Runs per match, 2 dp
    pub average: f64,
    /// Runs per 100 balls, 2 dp
    pub strike_rate: f64,
}

impl PerformanceSummary {
    /// Compute summary over a history; empty input gives all zeros
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let total_runs: u64 = records.iter().map(|r| r.runs as u64).sum();
        let balls = records.len();
        let matches = records
            .iter()
            .map(|r| r.match_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        // Divisors are floored at 1 so an empty history stays at zero
        let average = round2(total_runs as f64 / matches.max(1) as f64);
        let strike_rate = round2(total_runs as f64 / balls.max(1) as f64 * 100.0);

        PerformanceSummary {
            total_runs,
            balls,
            matches,
            average,
            strike_rate,
        }
    }
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean runs per ball over a selection, `None` when the selection is empty
pub fn mean_runs<'a, I>(records: I) -> Option<f32>
where
    I: IntoIterator<Item = &'a MatchRecord>,
{
    let (sum, count) = records
        .into_iter()
        .fold((0u64, 0usize), |(sum, count), r| (sum + r.runs as u64, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum as f32 / count as f32)
    }
}

/// The last `n` records in history order
pub fn tail(records: &[MatchRecord], n: usize) -> &[MatchRecord] {
    &records[records.len().saturating_sub(n)..]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn make_ball(match_id: &str, season: &str, venue: Option<&str>, runs: u32) -> MatchRecord {
        MatchRecord {
            batter: "V Kohli".to_string(),
            venue: venue.map(str::to_string),
            opponent: None,
            season: season.to_string(),
            match_id: match_id.to_string(),
            runs,
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = PerformanceSummary::from_records(&[]);
        assert_eq!(summary, PerformanceSummary::default());
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.strike_rate, 0.0);
    }

    #[test]
    fn test_single_match_summary() {
        let records = vec![
            make_ball("1", "2016", None, 10),
            make_ball("1", "2016", None, 20),
            make_ball("1", "2016", None, 30),
        ];
        let summary = PerformanceSummary::from_records(&records);

        assert_eq!(summary.total_runs, 60);
        assert_eq!(summary.balls, 3);
        assert_eq!(summary.matches, 1);
        assert_eq!(summary.average, 60.0);
        assert_eq!(summary.strike_rate, 2000.0);
    }

    #[test]
    fn test_summary_rounding() {
        // 7 runs over 3 matches and 6 balls
        let records = vec![
            make_ball("1", "2016", None, 1),
            make_ball("1", "2016", None, 0),
            make_ball("2", "2016", None, 4),
            make_ball("2", "2016", None, 0),
            make_ball("3", "2017", None, 2),
            make_ball("3", "2017", None, 0),
        ];
        let summary = PerformanceSummary::from_records(&records);

        assert_eq!(summary.matches, 3);
        assert_eq!(summary.average, 2.33);
        assert_eq!(summary.strike_rate, 116.67);
    }

    #[test]
    fn test_mean_runs() {
        let records = vec![make_ball("1", "2016", None, 4), make_ball("1", "2016", None, 1)];
        assert_eq!(mean_runs(&records), Some(2.5));
        assert_eq!(mean_runs(std::iter::empty()), None);
    }

    #[test]
    fn test_tail() {
        let records: Vec<_> = (0..7).map(|r| make_ball("1", "2016", None, r)).collect();
        let last: Vec<u32> = tail(&records, 5).iter().map(|r| r.runs).collect();
        assert_eq!(last, vec![2, 3, 4, 5, 6]);
        assert_eq!(tail(&records[..2], 5).len(), 2);
    }
}
