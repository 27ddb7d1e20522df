//! Tunable game rules, loadable from TOML.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides. The defaults reproduce the stock scoring formula exactly.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Complete rule set: answer scoring plus per-mode session rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StroopConfig {
    pub scoring: ScoringRules,
    pub session: SessionRules,
}

/// Constants of the per-answer points formula and the reward conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub base_points: u32,
    /// Answers faster than this earn a speed bonus.
    pub speed_window_ms: u32,
    /// One bonus point per this many milliseconds under the window.
    pub speed_step_ms: u32,
    /// Multiplier gained per combo step.
    pub combo_step: f64,
    /// Multiplier gained per difficulty level above 1.
    pub difficulty_step: f64,
    pub coin_divisor: u32,
    pub star_divisor: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            base_points: 10,
            speed_window_ms: 2000,
            speed_step_ms: 100,
            combo_step: 0.1,
            difficulty_step: 0.15,
            coin_divisor: 100,
            star_divisor: 10,
        }
    }
}

/// Mode rules for a live game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionRules {
    pub endless_lives: u32,
    pub survival_seconds: f64,
    pub survival_time_bonus: f64,
    pub survival_time_penalty: f64,
    pub speed_target: u32,
    pub speed_wrong_penalty: u32,
    /// Difficulty is re-evaluated every this many correct answers.
    pub difficulty_every: u32,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            endless_lives: 3,
            survival_seconds: 60.0,
            survival_time_bonus: 3.0,
            survival_time_penalty: 3.0,
            speed_target: 50,
            speed_wrong_penalty: 5,
            difficulty_every: 5,
        }
    }
}

impl StroopConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading stroop config");
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        if s.speed_step_ms == 0 {
            return Err(invalid("scoring.speed_step_ms", "must be greater than 0"));
        }
        if s.coin_divisor == 0 {
            return Err(invalid("scoring.coin_divisor", "must be greater than 0"));
        }
        if s.star_divisor == 0 {
            return Err(invalid("scoring.star_divisor", "must be greater than 0"));
        }
        if !s.combo_step.is_finite() || !s.difficulty_step.is_finite() {
            return Err(invalid("scoring", "multiplier steps must be finite"));
        }

        let r = &self.session;
        if r.endless_lives == 0 {
            return Err(invalid("session.endless_lives", "must be greater than 0"));
        }
        if r.speed_target == 0 {
            return Err(invalid("session.speed_target", "must be greater than 0"));
        }
        if r.difficulty_every == 0 {
            return Err(invalid("session.difficulty_every", "must be greater than 0"));
        }
        for (field, value) in [
            ("session.survival_seconds", r.survival_seconds),
            ("session.survival_time_bonus", r.survival_time_bonus),
            ("session.survival_time_penalty", r.survival_time_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite, non-negative number"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(StroopConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = StroopConfig::from_toml("").unwrap();
        assert_eq!(config, StroopConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = StroopConfig::from_toml(
            r#"
            [scoring]
            base_points = 12

            [session]
            speed_target = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.scoring.base_points, 12);
        assert_eq!(config.scoring.speed_window_ms, 2000);
        assert_eq!(config.session.speed_target, 30);
        assert_eq!(config.session.endless_lives, 3);
    }

    #[test]
    fn zero_divisor_is_rejected() {
        let err = StroopConfig::from_toml("[scoring]\ncoin_divisor = 0\n").unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "scoring.coin_divisor"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_survival_clock_is_rejected() {
        let err = StroopConfig::from_toml("[session]\nsurvival_seconds = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "session.survival_seconds", .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = StroopConfig::from_toml("[scoring\nbase_points = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = StroopConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stroop.toml");
        std::fs::write(&path, "[session]\nendless_lives = 5\n").unwrap();

        let config = StroopConfig::from_file(&path).unwrap();
        assert_eq!(config.session.endless_lives, 5);
    }
}
