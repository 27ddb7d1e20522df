//! Performance rating — categorical tiers and a 0–100 composite score.
//!
//! Tiers are decided by an ordered threshold table on reaction time and
//! score jointly. The first row whose reaction time is strictly below the
//! limit AND whose score is strictly above the minimum wins; adjacent rows
//! overlap, so the order of `TIER_THRESHOLDS` is part of the contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Performance tier, worst (`Trainee`) to best (`Legendary`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    Trainee,
    Beginner,
    Intermediate,
    Proficient,
    Advanced,
    Expert,
    Master,
    Grandmaster,
    Legendary,
}

impl PerformanceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trainee => "Trainee",
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Proficient => "Proficient",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
            Self::Master => "Master",
            Self::Grandmaster => "Grandmaster",
            Self::Legendary => "Legendary",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the classifier: `avg_reaction_ms < max_reaction_ms && score > min_score`.
#[derive(Debug, Clone, Copy)]
pub struct TierThreshold {
    pub max_reaction_ms: f64,
    pub min_score: u32,
    pub tier: PerformanceTier,
}

const fn row(max_reaction_ms: f64, min_score: u32, tier: PerformanceTier) -> TierThreshold {
    TierThreshold {
        max_reaction_ms,
        min_score,
        tier,
    }
}

/// Evaluated top to bottom; anything that matches no row is `Trainee`.
pub const TIER_THRESHOLDS: [TierThreshold; 8] = [
    row(400.0, 50, PerformanceTier::Legendary),
    row(500.0, 40, PerformanceTier::Grandmaster),
    row(600.0, 30, PerformanceTier::Master),
    row(700.0, 25, PerformanceTier::Expert),
    row(800.0, 20, PerformanceTier::Advanced),
    row(1000.0, 15, PerformanceTier::Proficient),
    row(1200.0, 10, PerformanceTier::Intermediate),
    row(1500.0, 5, PerformanceTier::Beginner),
];

impl TierThreshold {
    pub fn matches(&self, avg_reaction_ms: f64, score: u32) -> bool {
        avg_reaction_ms < self.max_reaction_ms && score > self.min_score
    }
}

/// Classify a session by average reaction time and score (correct answers).
pub fn performance_rating(avg_reaction_ms: f64, score: u32) -> PerformanceTier {
    TIER_THRESHOLDS
        .iter()
        .find(|t| t.matches(avg_reaction_ms, score))
        .map_or(PerformanceTier::Trainee, |t| t.tier)
}

const SPEED_WEIGHT: f64 = 40.0;
const ACCURACY_WEIGHT: f64 = 35.0;
const COMBO_WEIGHT: f64 = 25.0;
const SPEED_ZERO_MS: f64 = 2000.0;

/// Composite rating in `[0, 100]`.
///
/// Speed (0–40) falls linearly to zero at 2000 ms, score contributes 0.7 per
/// point up to 35, and max combo 2.5 per step up to 25.
pub fn numerical_rating(avg_reaction_ms: f64, score: u32, max_combo: u32) -> f64 {
    let speed = (SPEED_WEIGHT * (1.0 - avg_reaction_ms / SPEED_ZERO_MS)).clamp(0.0, SPEED_WEIGHT);
    let accuracy = (f64::from(score) * 0.7).clamp(0.0, ACCURACY_WEIGHT);
    let combo = (f64::from(max_combo) * 2.5).clamp(0.0, COMBO_WEIGHT);
    (speed + accuracy + combo).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_ratings() {
        // 450 ms misses the Legendary row (needs < 400), lands on Grandmaster.
        assert_eq!(performance_rating(450.0, 45), PerformanceTier::Grandmaster);
        assert_eq!(performance_rating(700.0, 22), PerformanceTier::Advanced);
        assert_eq!(performance_rating(1100.0, 12), PerformanceTier::Intermediate);
    }

    #[test]
    fn legendary_needs_both_conditions() {
        assert_eq!(performance_rating(399.9, 51), PerformanceTier::Legendary);
        assert_eq!(performance_rating(399.9, 50), PerformanceTier::Grandmaster);
        assert_eq!(performance_rating(400.0, 51), PerformanceTier::Grandmaster);
    }

    #[test]
    fn boundaries_are_strict() {
        assert_eq!(performance_rating(1500.0, 100), PerformanceTier::Trainee);
        assert_eq!(performance_rating(1499.0, 6), PerformanceTier::Beginner);
        assert_eq!(performance_rating(1499.0, 5), PerformanceTier::Trainee);
    }

    #[test]
    fn fast_but_low_score_falls_through() {
        // Fast reactions do not help without enough correct answers.
        assert_eq!(performance_rating(100.0, 11), PerformanceTier::Intermediate);
        assert_eq!(performance_rating(100.0, 0), PerformanceTier::Trainee);
    }

    #[test]
    fn thresholds_are_ordered_best_first() {
        let tiers: Vec<PerformanceTier> = TIER_THRESHOLDS.iter().map(|t| t.tier).collect();
        let mut sorted = tiers.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(tiers, sorted);
    }

    #[test]
    fn labels() {
        assert_eq!(PerformanceTier::Grandmaster.to_string(), "Grandmaster");
        assert_eq!(PerformanceTier::Trainee.as_str(), "Trainee");
    }

    #[test]
    fn numerical_rating_reference() {
        // speed 30 + accuracy 24.5 + combo 25 (capped from 30)
        let r = numerical_rating(500.0, 35, 12);
        assert!((r - 79.5).abs() < 1e-9, "got {r}");
    }

    #[test]
    fn numerical_rating_components_clamp() {
        assert!((numerical_rating(3000.0, 0, 0) - 0.0).abs() < 1e-12);
        assert!((numerical_rating(0.0, 1000, 1000) - 100.0).abs() < 1e-12);
        // Negative reaction times cannot push speed above its weight.
        assert!((numerical_rating(-500.0, 0, 0) - 40.0).abs() < 1e-12);
    }
}
