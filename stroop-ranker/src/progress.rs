//! Best-progress boards — one entry per player per game, best result kept.
//!
//! Each game kind decides what "better" means. Timed games (F1 reaction,
//! Schulte table) keep the lowest time; scored games keep the highest score.
//! A stored time of 0 means "no time recorded yet" and is always beaten.
//! The memory game additionally keeps the highest level reached.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stroop_core::SessionReport;
use thiserror::Error;
use tracing::debug;

/// Rows shown on a game leaderboard.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// Mini-game a progress entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Memory,
    F1,
    Schulte,
    Confusion,
}

impl GameKind {
    /// Timed games rank the smallest value first.
    pub fn lower_is_better(&self) -> bool {
        matches!(self, Self::F1 | Self::Schulte)
    }

    /// Whether `candidate` beats `current` for this game.
    pub fn is_better(&self, candidate: f64, current: f64) -> bool {
        if self.lower_is_better() {
            current == 0.0 || candidate < current
        } else {
            candidate > current
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::F1 => "f1",
            Self::Schulte => "schulte",
            Self::Confusion => "confusion",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game kind: {0:?}")]
pub struct ParseGameKindError(pub String);

impl FromStr for GameKind {
    type Err = ParseGameKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "f1" => Ok(Self::F1),
            "schulte" => Ok(Self::Schulte),
            "confusion" => Ok(Self::Confusion),
            _ => Err(ParseGameKindError(s.to_string())),
        }
    }
}

/// A player's best result in one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub username: String,
    pub score: f64,
    pub level: u32,
    /// Free-form per-game details (max combo, average reaction, ...).
    /// Always reflects the latest submission.
    #[serde(default)]
    pub extra: serde_json::Value,
}

/// A result submitted at the end of a game.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub username: String,
    pub score: f64,
    pub level: u32,
    pub extra: serde_json::Value,
}

impl Submission {
    pub fn new(username: impl Into<String>, score: f64) -> Self {
        Self {
            username: username.into(),
            score,
            level: 1,
            extra: serde_json::Value::Null,
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_extra(mut self, extra: serde_json::Value) -> Self {
        self.extra = extra;
        self
    }

    /// Submission for a finished Color Confusion session: score is total points.
    pub fn from_report(username: impl Into<String>, report: &SessionReport) -> Self {
        Self::new(username, f64::from(report.total_points)).with_extra(serde_json::json!({
            "mode": report.mode,
            "max_combo": report.max_combo,
            "avg_reaction_ms": report.avg_reaction_ms,
            "accuracy": report.accuracy,
            "rating": report.rating,
        }))
    }
}

/// Outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// First result for this player.
    Inserted,
    /// Existing entry improved (score and/or level).
    Improved,
    /// Not better than the stored result; only `extra` was refreshed.
    Unchanged,
    /// Non-finite score; nothing stored.
    Rejected,
}

/// Best result per player for one game, kept sorted best-first.
#[derive(Debug, Clone)]
pub struct ProgressBoard {
    game: GameKind,
    entries: Vec<ProgressEntry>,
}

impl ProgressBoard {
    pub fn new(game: GameKind) -> Self {
        Self {
            game,
            entries: Vec::new(),
        }
    }

    pub fn game(&self) -> GameKind {
        self.game
    }

    pub fn submit(&mut self, submission: Submission) -> SubmitResult {
        if !submission.score.is_finite() {
            return SubmitResult::Rejected;
        }

        let result = match self.find(&submission.username) {
            Some(idx) => {
                let game = self.game;
                let entry = &mut self.entries[idx];
                let mut improved = false;
                if game == GameKind::Memory && submission.level > entry.level {
                    entry.level = submission.level;
                    improved = true;
                }
                if game.is_better(submission.score, entry.score) {
                    entry.score = submission.score;
                    improved = true;
                }
                entry.extra = submission.extra;
                if improved {
                    SubmitResult::Improved
                } else {
                    SubmitResult::Unchanged
                }
            }
            None => {
                self.entries.push(ProgressEntry {
                    username: submission.username,
                    score: submission.score,
                    level: submission.level,
                    extra: submission.extra,
                });
                SubmitResult::Inserted
            }
        };

        if result != SubmitResult::Unchanged {
            self.sort_entries();
        }
        debug!(game = %self.game, ?result, "progress submitted");
        result
    }

    /// Top `limit` entries, best first.
    pub fn leaderboard(&self, limit: usize) -> &[ProgressEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    pub fn get(&self, username: &str) -> Option<&ProgressEntry> {
        self.find(username).map(|idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, username: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.username == username)
    }

    fn sort_entries(&mut self) {
        if self.game.lower_is_better() {
            // Unset times (0) go last, real times ascending.
            self.entries
                .sort_by(|a, b| (a.score == 0.0).cmp(&(b.score == 0.0)).then(a.score.total_cmp(&b.score)));
        } else {
            self.entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
    }
}

/// Coins and stars a player has collected across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub coins: u64,
    pub stars: u64,
}

impl Wallet {
    pub fn credit(&mut self, coins: u32, stars: u32) {
        self.coins = self.coins.saturating_add(u64::from(coins));
        self.stars = self.stars.saturating_add(u64::from(stars));
    }

    pub fn credit_report(&mut self, report: &SessionReport) {
        self.credit(report.coins, report.stars);
    }
}
