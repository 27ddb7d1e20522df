//! Leaderboard ranking — sort by points, break ties on reaction time.
//!
//! Ranking is position-based: two records with equal points are still
//! ordered (faster first) and receive different ranks and percentiles.
//! Percentile at zero-based position `i` of `n` is `100 × (n − i − 1) / (n − 1)`,
//! so the leader always sits at 100 and the last place at 0.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use stroop_core::{performance_rating, GameMode, SessionRecord};
use tracing::debug;

use crate::statistics::{percentile_of, statistics, StatisticsSummary};

/// A single ranked row. Produced fresh by every [`rank`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    /// 1-based position after sorting.
    pub rank: usize,
    pub username: String,
    pub total_points: u32,
    pub avg_reaction_ms: f64,
    /// Tier label derived from reaction time and correct answers.
    pub rating: String,
    /// 0–100, position-based.
    pub percentile: f64,
}

/// Leaderboard order: more points first, then lower average reaction time.
///
/// Reaction times compare with `f64::total_cmp`, so a NaN time sorts after
/// every real time at the same points.
pub fn compare_records(a: &SessionRecord, b: &SessionRecord) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| a.avg_reaction_ms.total_cmp(&b.avg_reaction_ms))
}

/// Percentile for the entry at zero-based `position` among `count` entries.
pub fn position_percentile(position: usize, count: usize) -> f64 {
    if count <= 1 {
        return 100.0;
    }
    (count - position - 1) as f64 / (count - 1) as f64 * 100.0
}

/// Rank records, optionally restricted to one mode.
///
/// `None` includes every record. With `Some(mode)`, records of other modes
/// and records with no mode are dropped before sorting. Equal records keep
/// their input order.
pub fn rank(records: &[SessionRecord], mode: Option<GameMode>) -> Vec<RankEntry> {
    let mut filtered: Vec<&SessionRecord> =
        records.iter().filter(|r| r.matches_mode(mode)).collect();
    filtered.sort_by(|a, b| compare_records(a, b));

    let count = filtered.len();
    debug!(
        total = records.len(),
        ranked = count,
        mode = mode.map_or("all", |m| m.as_str()),
        "ranking records"
    );

    filtered
        .into_iter()
        .enumerate()
        .map(|(i, record)| RankEntry {
            rank: i + 1,
            username: record.username.clone(),
            total_points: record.total_points,
            avg_reaction_ms: record.avg_reaction_ms,
            rating: performance_rating(record.avg_reaction_ms, record.correct_answers)
                .as_str()
                .to_string(),
            percentile: position_percentile(i, count),
        })
        .collect()
}

/// Owned record set with the ranking operations attached.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    records: Vec<SessionRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<SessionRecord>) -> Self {
        Self { records }
    }

    pub fn add(&mut self, record: SessionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rankings(&self, mode: Option<GameMode>) -> Vec<RankEntry> {
        rank(&self.records, mode)
    }

    /// Share of all records (every mode) scoring strictly below `points`.
    pub fn percentile_of(&self, points: u32) -> f64 {
        percentile_of(&self.records, points)
    }

    pub fn statistics(&self) -> StatisticsSummary {
        statistics(&self.records)
    }
}

impl Extend<SessionRecord> for Leaderboard {
    fn extend<T: IntoIterator<Item = SessionRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str, mode: Option<GameMode>, points: u32, rt: f64) -> SessionRecord {
        SessionRecord::new(name, mode, points, 30, 10, rt, 60.0)
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn sorts_by_points_descending() {
        let records = vec![
            make_record("a", None, 1240, 520.0),
            make_record("b", None, 1120, 680.0),
            make_record("c", None, 1580, 450.0),
            make_record("d", None, 950, 890.0),
        ];
        let ranked = rank(&records, None);

        let points: Vec<u32> = ranked.iter().map(|e| e.total_points).collect();
        assert_eq!(points, vec![1580, 1240, 1120, 950]);

        let ranks: Vec<usize> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);

        let pct: Vec<f64> = ranked.iter().map(|e| e.percentile).collect();
        assert_close(pct[0], 100.0);
        assert_close(pct[1], 66.67);
        assert_close(pct[2], 33.33);
        assert_close(pct[3], 0.0);
    }

    #[test]
    fn ties_break_on_faster_reaction() {
        let records = vec![
            make_record("slow", None, 1240, 45.2),
            make_record("other", None, 1120, 48.5),
            make_record("fast", None, 1240, 42.1),
        ];
        let ranked = rank(&records, None);
        let names: Vec<&str> = ranked.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["fast", "slow", "other"]);
        // Ties are not treated as equal: different percentiles.
        assert!(ranked[0].percentile > ranked[1].percentile);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let records = vec![
            make_record("first", None, 100, 500.0),
            make_record("second", None, 100, 500.0),
        ];
        let ranked = rank(&records, None);
        assert_eq!(ranked[0].username, "first");
        assert_eq!(ranked[1].username, "second");
    }

    #[test]
    fn empty_input_ranks_nothing() {
        assert!(rank(&[], None).is_empty());
        assert!(rank(&[], Some(GameMode::Speed)).is_empty());
    }

    #[test]
    fn single_record_is_hundredth_percentile() {
        let ranked = rank(&[make_record("solo", None, 10, 900.0)], None);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].percentile, 100.0);
    }

    #[test]
    fn mode_filter_applies_before_percentiles() {
        let records = vec![
            make_record("e1", Some(GameMode::Endless), 900, 500.0),
            make_record("s1", Some(GameMode::Speed), 2000, 400.0),
            make_record("e2", Some(GameMode::Endless), 1000, 500.0),
            make_record("none", None, 5000, 300.0),
        ];
        let ranked = rank(&records, Some(GameMode::Endless));
        let names: Vec<&str> = ranked.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["e2", "e1"]);
        assert_eq!(ranked[0].percentile, 100.0);
        assert_eq!(ranked[1].percentile, 0.0);
    }

    #[test]
    fn filter_with_no_matches_is_empty() {
        let records = vec![make_record("e1", Some(GameMode::Endless), 900, 500.0)];
        assert!(rank(&records, Some(GameMode::Survival)).is_empty());
    }

    #[test]
    fn rating_comes_from_reaction_and_correct_answers() {
        let record = SessionRecord::new("x", None, 2100, 65, 28, 380.0, 60.0);
        let ranked = rank(&[record], None);
        assert_eq!(ranked[0].rating, "Legendary");
    }

    #[test]
    fn nan_reaction_sorts_last_within_points() {
        let records = vec![
            make_record("nan", None, 100, f64::NAN),
            make_record("ok", None, 100, 300.0),
            make_record("top", None, 200, 300.0),
        ];
        let ranked = rank(&records, None);
        let names: Vec<&str> = ranked.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["top", "ok", "nan"]);
    }

    #[test]
    fn position_percentile_edges() {
        assert_eq!(position_percentile(0, 0), 100.0);
        assert_eq!(position_percentile(0, 1), 100.0);
        assert_eq!(position_percentile(0, 2), 100.0);
        assert_eq!(position_percentile(1, 2), 0.0);
        assert_eq!(position_percentile(2, 5), 50.0);
    }

    #[test]
    fn leaderboard_wraps_free_functions() {
        let mut lb = Leaderboard::new();
        assert!(lb.is_empty());
        lb.add(make_record("a", Some(GameMode::Speed), 300, 500.0));
        lb.extend([make_record("b", Some(GameMode::Speed), 100, 500.0)]);

        assert_eq!(lb.len(), 2);
        assert_eq!(lb.rankings(None)[0].username, "a");
        assert_eq!(lb.percentile_of(200), 50.0);
        assert_eq!(lb.statistics().total_games, 2);
    }
}
