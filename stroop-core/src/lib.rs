//! Stroop Core — session records, scoring, rating tiers, and the game engine.
//!
//! This crate contains everything that operates on a single game:
//! - Domain types (`SessionRecord`, `GameMode`)
//! - Scoring engine (points per answer, coins, stars)
//! - Performance rating (nine ordered tiers + a 0–100 composite)
//! - Stroop question generation over difficulty-tiered color pools
//! - Combo tracking and the per-mode game session state machine
//! - TOML-backed rule configuration and deterministic seeding

pub mod combo;
pub mod config;
pub mod domain;
pub mod palette;
pub mod question;
pub mod rating;
pub mod rng;
pub mod scoring;
pub mod session;

pub use combo::ComboTracker;
pub use config::{ConfigError, ScoringRules, SessionRules, StroopConfig};
pub use domain::{GameMode, ParseModeError, SessionRecord};
pub use question::{difficulty_for_score, QuestionGenerator, StroopQuestion};
pub use rating::{numerical_rating, performance_rating, PerformanceTier, TIER_THRESHOLDS};
pub use rng::SeedHierarchy;
pub use scoring::{calculate_coins, calculate_points, calculate_stars, PointsBreakdown};
pub use session::{AnswerOutcome, GameSession, SessionError, SessionReport};
