//! Combo tracking: streak of consecutive correct answers.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboTracker {
    current: u32,
    max: u32,
    correct: u32,
    wrong: u32,
}

impl ComboTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extend the streak. Returns the new combo.
    pub fn record_correct(&mut self) -> u32 {
        self.current += 1;
        self.correct += 1;
        self.max = self.max.max(self.current);
        self.current
    }

    pub fn record_wrong(&mut self) {
        self.current = 0;
        self.wrong += 1;
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    pub fn total(&self) -> u32 {
        self.correct + self.wrong
    }

    /// `1 + current × 0.1`.
    pub fn multiplier(&self) -> f64 {
        1.0 + f64::from(self.current) * 0.1
    }

    /// Share of correct answers in percent; 0 before the first answer.
    pub fn accuracy(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => f64::from(self.correct) * 100.0 / f64::from(total),
        }
    }
}

impl fmt::Display for ComboTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Combo:{} (Max:{}) | Correct:{} Wrong:{} | Accuracy:{:.1}%",
            self.current,
            self.max,
            self.correct,
            self.wrong,
            self.accuracy()
        )
    }
}
