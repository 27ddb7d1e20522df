//! SessionRecord — the summary of one finished game, as stored on a leaderboard.

use super::mode::GameMode;
use serde::{Deserialize, Serialize};

/// One finished game session.
///
/// Records are plain values: ranking and statistics never mutate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Player name. Not required to be unique across records.
    pub username: String,
    /// `None` for records that predate modes or were played outside one.
    pub mode: Option<GameMode>,
    pub total_points: u32,
    pub correct_answers: u32,
    pub max_combo: u32,
    /// Mean reaction time over all answers, in milliseconds.
    pub avg_reaction_ms: f64,
    pub elapsed_seconds: f64,
}

impl SessionRecord {
    pub fn new(
        username: impl Into<String>,
        mode: Option<GameMode>,
        total_points: u32,
        correct_answers: u32,
        max_combo: u32,
        avg_reaction_ms: f64,
        elapsed_seconds: f64,
    ) -> Self {
        Self {
            username: username.into(),
            mode,
            total_points,
            correct_answers,
            max_combo,
            avg_reaction_ms,
            elapsed_seconds,
        }
    }

    /// Whether this record passes an optional mode filter.
    ///
    /// `None` accepts everything; `Some(mode)` rejects records with a
    /// different or missing mode.
    pub fn matches_mode(&self, filter: Option<GameMode>) -> bool {
        match filter {
            None => true,
            Some(mode) => self.mode == Some(mode),
        }
    }
}
