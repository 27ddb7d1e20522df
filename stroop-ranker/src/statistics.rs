//! Descriptive statistics over a record set — pure functions, no filtering.
//!
//! Every function takes the full record slice and returns a scalar or a
//! summary. Empty input is not an error: it yields the documented default.

use serde::{Deserialize, Serialize};
use stroop_core::SessionRecord;
use tracing::debug;

/// Summary of all records, across every mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub mean_score: f64,
    pub median_score: f64,
    pub mean_reaction_ms: f64,
    /// Population standard deviation (divisor N) of total points.
    pub std_dev_score: f64,
    pub total_games: usize,
}

impl StatisticsSummary {
    /// Compute the summary. All zeros for an empty slice.
    pub fn compute(records: &[SessionRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }
        let points: Vec<f64> = records.iter().map(|r| f64::from(r.total_points)).collect();
        let reactions: Vec<f64> = records.iter().map(|r| r.avg_reaction_ms).collect();

        let mean_score = mean_f64(&points);
        let summary = Self {
            mean_score,
            median_score: median(&points),
            mean_reaction_ms: mean_f64(&reactions),
            std_dev_score: population_std_dev(&points, mean_score),
            total_games: records.len(),
        };
        debug!(
            total_games = summary.total_games,
            mean_score = summary.mean_score,
            "computed leaderboard statistics"
        );
        summary
    }
}

/// Statistics over every record.
pub fn statistics(records: &[SessionRecord]) -> StatisticsSummary {
    StatisticsSummary::compute(records)
}

/// Percentage of records whose points are strictly below `points`.
///
/// Returns 100.0 for an empty record set.
pub fn percentile_of(records: &[SessionRecord], points: u32) -> f64 {
    if records.is_empty() {
        return 100.0;
    }
    let below = records.iter().filter(|r| r.total_points < points).count();
    below as f64 / records.len() as f64 * 100.0
}

// ─── Helpers ────────────────────────────────────────────────────────

pub(crate) fn mean_f64(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median: middle value for odd counts, mean of the two middle values for even.
pub(crate) fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

pub(crate) fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_points(points: &[u32]) -> Vec<SessionRecord> {
        points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                SessionRecord::new(format!("p{i}"), None, p, 10, 2, 500.0 + i as f64, 30.0)
            })
            .collect()
    }

    #[test]
    fn empty_statistics_are_zero() {
        let s = statistics(&[]);
        assert_eq!(s, StatisticsSummary::default());
        assert_eq!(s.total_games, 0);
        assert_eq!(s.mean_score, 0.0);
        assert_eq!(s.median_score, 0.0);
        assert_eq!(s.std_dev_score, 0.0);
        assert_eq!(s.mean_reaction_ms, 0.0);
    }

    #[test]
    fn odd_count_median_is_middle_value() {
        let s = statistics(&with_points(&[5, 1, 9]));
        assert_eq!(s.median_score, 5.0);
    }

    #[test]
    fn even_count_median_averages_middle_pair() {
        let s = statistics(&with_points(&[1240, 1120, 1580, 950]));
        assert_eq!(s.median_score, 1180.0);
        assert_eq!(s.mean_score, 1222.5);
    }

    #[test]
    fn std_dev_is_population() {
        // Classic example: mean 5, population variance 4.
        let s = statistics(&with_points(&[2, 4, 4, 4, 5, 5, 7, 9]));
        assert!((s.mean_score - 5.0).abs() < 1e-12);
        assert!((s.std_dev_score - 2.0).abs() < 1e-12);
    }

    #[test]
    fn single_record_has_zero_spread() {
        let s = statistics(&with_points(&[700]));
        assert_eq!(s.total_games, 1);
        assert_eq!(s.median_score, 700.0);
        assert_eq!(s.std_dev_score, 0.0);
    }

    #[test]
    fn mean_reaction_uses_every_record() {
        let s = statistics(&with_points(&[1, 2, 3]));
        assert!((s.mean_reaction_ms - 501.0).abs() < 1e-12);
    }

    #[test]
    fn percentile_of_counts_strictly_below() {
        let records = with_points(&[100, 200, 200, 400]);
        assert_eq!(percentile_of(&records, 200), 25.0);
        assert_eq!(percentile_of(&records, 201), 75.0);
        assert_eq!(percentile_of(&records, 100), 0.0);
        assert_eq!(percentile_of(&records, 10_000), 100.0);
    }

    #[test]
    fn percentile_of_empty_is_hundred() {
        assert_eq!(percentile_of(&[], 0), 100.0);
        assert_eq!(percentile_of(&[], 5000), 100.0);
    }
}
