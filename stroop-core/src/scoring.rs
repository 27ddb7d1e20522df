//! Scoring engine — points per correct answer, and session reward conversions.
//!
//! All functions are pure. The free functions use the stock rules
//! (`ScoringRules::default()`); custom rule sets go through the methods.

use crate::config::ScoringRules;

/// Breakdown of the points awarded for one correct answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsBreakdown {
    pub base_points: u32,
    pub speed_bonus: u32,
    pub combo_multiplier: f64,
    pub difficulty_bonus: f64,
    pub points: u32,
}

impl ScoringRules {
    /// Speed bonus: one point per `speed_step_ms` under the window, truncated.
    pub fn speed_bonus(&self, reaction_time_ms: u32) -> u32 {
        self.speed_window_ms.saturating_sub(reaction_time_ms) / self.speed_step_ms.max(1)
    }

    /// Combo multiplier: `1 + combo × combo_step`.
    pub fn combo_multiplier(&self, combo: u32) -> f64 {
        1.0 + f64::from(combo) * self.combo_step
    }

    /// Difficulty bonus: `1 + (difficulty − 1) × difficulty_step`.
    ///
    /// Difficulty 0 is accepted and yields a bonus below 1.
    pub fn difficulty_bonus(&self, difficulty: u32) -> f64 {
        1.0 + (f64::from(difficulty) - 1.0) * self.difficulty_step
    }

    /// Full breakdown for one correct answer.
    pub fn breakdown(&self, reaction_time_ms: u32, combo: u32, difficulty: u32) -> PointsBreakdown {
        let speed_bonus = self.speed_bonus(reaction_time_ms);
        let combo_multiplier = self.combo_multiplier(combo);
        let difficulty_bonus = self.difficulty_bonus(difficulty);
        let raw = f64::from(self.base_points.saturating_add(speed_bonus))
            * combo_multiplier
            * difficulty_bonus;
        PointsBreakdown {
            base_points: self.base_points,
            speed_bonus,
            combo_multiplier,
            difficulty_bonus,
            // f64::round is half-away-from-zero; the cast saturates at 0.
            points: raw.round() as u32,
        }
    }

    pub fn points(&self, reaction_time_ms: u32, combo: u32, difficulty: u32) -> u32 {
        self.breakdown(reaction_time_ms, combo, difficulty).points
    }

    pub fn coins(&self, total_points: u32) -> u32 {
        total_points / self.coin_divisor.max(1)
    }

    pub fn stars(&self, correct_answers: u32) -> u32 {
        correct_answers / self.star_divisor.max(1)
    }
}

/// Points for one correct answer under the stock rules.
pub fn calculate_points(reaction_time_ms: u32, combo: u32, difficulty: u32) -> u32 {
    ScoringRules::default().points(reaction_time_ms, combo, difficulty)
}

/// One coin per 100 points.
pub fn calculate_coins(total_points: u32) -> u32 {
    ScoringRules::default().coins(total_points)
}

/// One star per 10 correct answers.
pub fn calculate_stars(correct_answers: u32) -> u32 {
    ScoringRules::default().stars(correct_answers)
}
