//! Stroop Ranker — leaderboards and statistics across many sessions.
//!
//! This crate builds on `stroop-core` to provide:
//! - Leaderboard ranking with mode filtering and position percentiles
//! - Record-set statistics (mean, median, population std dev, mean RT)
//! - Per-game best-progress boards and the coin/star wallet
//! - Box-drawn console rendering of rankings and statistics

pub mod leaderboard;
pub mod progress;
pub mod statistics;
pub mod table;

pub use leaderboard::{compare_records, position_percentile, rank, Leaderboard, RankEntry};
pub use progress::{
    GameKind, ParseGameKindError, ProgressBoard, ProgressEntry, Submission, SubmitResult,
    Wallet, DEFAULT_LEADERBOARD_SIZE,
};
pub use statistics::{percentile_of, statistics, StatisticsSummary};
pub use table::{render_leaderboard, render_statistics, LeaderboardTable, StatisticsTable};
