use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Game mode a session was played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Three lives, play until they run out.
    #[default]
    Endless,
    /// Countdown clock, +time on correct and -time on wrong.
    Survival,
    /// Race to a fixed number of correct answers.
    Speed,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Endless, GameMode::Survival, GameMode::Speed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Endless => "endless",
            Self::Survival => "survival",
            Self::Speed => "speed",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game mode: {0:?}")]
pub struct ParseModeError(pub String);

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "endless" => Ok(Self::Endless),
            "survival" => Ok(Self::Survival),
            "speed" => Ok(Self::Speed),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
