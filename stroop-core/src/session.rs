//! Game session — one run of Color Confusion in a given mode.
//!
//! The session is a small state machine: ask a question, take an answer,
//! update streak/points/lives/clock, repeat until the mode's end condition.
//!
//! Modes:
//! - **Endless**: a fixed number of lives; each wrong answer costs one.
//! - **Survival**: a countdown clock; correct answers add time, wrong ones remove it.
//! - **Speed**: race to a target number of correct answers; wrong answers cost points.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::combo::ComboTracker;
use crate::config::{ScoringRules, SessionRules, StroopConfig};
use crate::domain::{GameMode, SessionRecord};
use crate::question::{QuestionGenerator, StroopQuestion};
use crate::rating::{numerical_rating, performance_rating, PerformanceTier};

const STARTING_DIFFICULTY: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no active question")]
    NoActiveQuestion,
    #[error("session is over")]
    SessionOver,
}

/// Result of submitting one answer, with the session state after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points_earned: u32,
    pub speed_bonus: u32,
    pub multiplier: f64,
    pub total_points: u32,
    pub correct_answers: u32,
    pub combo: u32,
    pub max_combo: u32,
    /// Remaining lives (endless mode only).
    pub lives: Option<u32>,
    /// Remaining seconds (survival mode only).
    pub time_left: Option<f64>,
    pub is_active: bool,
}

/// End-of-session summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub mode: GameMode,
    pub total_points: u32,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    pub total_questions: u32,
    pub max_combo: u32,
    /// Rounded to whole milliseconds; 0 when no answers were given.
    pub avg_reaction_ms: f64,
    pub fastest_reaction_ms: u32,
    pub slowest_reaction_ms: u32,
    /// Percent, one decimal.
    pub accuracy: f64,
    pub elapsed_seconds: f64,
    pub rating: PerformanceTier,
    pub numerical_rating: f64,
    pub coins: u32,
    pub stars: u32,
}

impl SessionReport {
    /// Leaderboard record for this session.
    pub fn to_record(&self, username: impl Into<String>) -> SessionRecord {
        SessionRecord {
            username: username.into(),
            mode: Some(self.mode),
            total_points: self.total_points,
            correct_answers: self.correct_answers,
            max_combo: self.max_combo,
            avg_reaction_ms: self.avg_reaction_ms,
            elapsed_seconds: self.elapsed_seconds,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    rules: SessionRules,
    scoring: ScoringRules,
    generator: QuestionGenerator,
    combo: ComboTracker,
    total_points: u32,
    lives: Option<u32>,
    time_left: Option<f64>,
    reactions: Vec<u32>,
    started_at: Instant,
    active: bool,
    current: Option<StroopQuestion>,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self::with_config(mode, &StroopConfig::default())
    }

    pub fn with_config(mode: GameMode, config: &StroopConfig) -> Self {
        let rules = config.session.clone();
        let lives = (mode == GameMode::Endless).then_some(rules.endless_lives);
        let time_left = (mode == GameMode::Survival).then_some(rules.survival_seconds);
        Self {
            mode,
            scoring: config.scoring.clone(),
            generator: QuestionGenerator::new(STARTING_DIFFICULTY),
            combo: ComboTracker::new(),
            total_points: 0,
            lives,
            time_left,
            reactions: Vec::new(),
            started_at: Instant::now(),
            active: true,
            current: None,
            rules,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn combo(&self) -> &ComboTracker {
        &self.combo
    }

    pub fn difficulty(&self) -> u32 {
        self.generator.difficulty()
    }

    pub fn lives(&self) -> Option<u32> {
        self.lives
    }

    pub fn time_left(&self) -> Option<f64> {
        self.time_left
    }

    pub fn current_question(&self) -> Option<&StroopQuestion> {
        self.current.as_ref()
    }

    /// Draw the next question, or `None` once the session has ended.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&StroopQuestion> {
        if !self.active {
            return None;
        }
        self.current = Some(self.generator.generate(rng));
        self.current.as_ref()
    }

    /// Answer the current question.
    ///
    /// Each question accepts exactly one answer.
    pub fn submit_answer(
        &mut self,
        selected: &str,
        reaction_time_ms: u32,
    ) -> Result<AnswerOutcome, SessionError> {
        if !self.active {
            return Err(SessionError::SessionOver);
        }
        let question = self.current.take().ok_or(SessionError::NoActiveQuestion)?;
        let correct = question.is_correct(selected);
        self.reactions.push(reaction_time_ms);

        let mut points_earned = 0;
        let mut speed_bonus = 0;
        let mut multiplier = 1.0;

        if correct {
            let combo = self.combo.record_correct();
            let breakdown =
                self.scoring
                    .breakdown(reaction_time_ms, combo, self.generator.difficulty());
            points_earned = breakdown.points;
            speed_bonus = breakdown.speed_bonus;
            multiplier = breakdown.combo_multiplier;
            self.total_points = self.total_points.saturating_add(points_earned);

            if let Some(t) = self.time_left.as_mut() {
                *t += self.rules.survival_time_bonus;
            }
            let correct_answers = self.combo.correct();
            if correct_answers % self.rules.difficulty_every.max(1) == 0 {
                self.generator.scale_to_score(correct_answers);
                debug!(difficulty = self.generator.difficulty(), "difficulty rescaled");
            }
        } else {
            self.combo.record_wrong();
            match self.mode {
                GameMode::Endless => {
                    let lives = self.lives.get_or_insert(0);
                    *lives = lives.saturating_sub(1);
                    if *lives == 0 {
                        self.finish("out of lives");
                    }
                }
                GameMode::Survival => self.drain_clock(self.rules.survival_time_penalty),
                GameMode::Speed => {
                    self.total_points =
                        self.total_points.saturating_sub(self.rules.speed_wrong_penalty);
                }
            }
        }

        if self.mode == GameMode::Speed && self.combo.correct() >= self.rules.speed_target {
            self.finish("speed target reached");
        }

        debug!(
            correct,
            reaction_time_ms,
            points_earned,
            total_points = self.total_points,
            combo = self.combo.current(),
            "answer submitted"
        );

        Ok(AnswerOutcome {
            correct,
            points_earned,
            speed_bonus,
            multiplier,
            total_points: self.total_points,
            correct_answers: self.combo.correct(),
            combo: self.combo.current(),
            max_combo: self.combo.max(),
            lives: self.lives,
            time_left: self.time_left.map(|t| round_to(t, 1)),
            is_active: self.active,
        })
    }

    /// Advance the survival clock by wall time. No-op in other modes.
    ///
    /// Returns whether the session is still active.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.active {
            self.drain_clock(elapsed.as_secs_f64());
        }
        self.active
    }

    /// Stop the session early (player quit).
    pub fn end(&mut self) {
        self.finish("ended by player");
    }

    pub fn report(&self) -> SessionReport {
        let avg_reaction_ms = if self.reactions.is_empty() {
            0.0
        } else {
            let sum: u64 = self.reactions.iter().map(|&r| u64::from(r)).sum();
            (sum as f64 / self.reactions.len() as f64).round()
        };
        let correct_answers = self.combo.correct();
        let total_questions = self.combo.total();
        let accuracy = round_to(
            f64::from(correct_answers) / f64::from(total_questions.max(1)) * 100.0,
            1,
        );

        SessionReport {
            mode: self.mode,
            total_points: self.total_points,
            correct_answers,
            wrong_answers: self.combo.wrong(),
            total_questions,
            max_combo: self.combo.max(),
            avg_reaction_ms,
            fastest_reaction_ms: self.reactions.iter().copied().min().unwrap_or(0),
            slowest_reaction_ms: self.reactions.iter().copied().max().unwrap_or(0),
            accuracy,
            elapsed_seconds: round_to(self.started_at.elapsed().as_secs_f64(), 2),
            rating: performance_rating(avg_reaction_ms, correct_answers),
            numerical_rating: numerical_rating(avg_reaction_ms, correct_answers, self.combo.max()),
            coins: self.scoring.coins(self.total_points),
            stars: self.scoring.stars(correct_answers),
        }
    }

    fn drain_clock(&mut self, seconds: f64) {
        let Some(t) = self.time_left.as_mut() else {
            return;
        };
        *t = (*t - seconds).max(0.0);
        if *t <= 0.0 {
            self.finish("clock ran out");
        }
    }

    fn finish(&mut self, reason: &str) {
        if self.active {
            self.active = false;
            self.current = None;
            info!(
                mode = %self.mode,
                reason,
                total_points = self.total_points,
                correct = self.combo.correct(),
                "session finished"
            );
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
