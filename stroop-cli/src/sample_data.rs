//! Sample leaderboard used by the demo binary.
//!
//! Eight players across the three modes, with points and reaction times
//! spread so every tier boundary around the top of the table is visible.

use stroop_core::{GameMode, SessionRecord};

pub fn sample_records() -> Vec<SessionRecord> {
    vec![
        record("CipherMaster", GameMode::Endless, 1240, 42, 15, 520.0, 120.5),
        record("NexusBrain", GameMode::Endless, 1120, 38, 12, 680.0, 95.3),
        record("QuantumMind", GameMode::Endless, 1580, 55, 22, 450.0, 180.2),
        record("MasterPlayer", GameMode::Endless, 950, 30, 8, 890.0, 75.0),
        record("StroopKing", GameMode::Survival, 2100, 65, 28, 380.0, 60.0),
        record("ColorNinja", GameMode::Survival, 1450, 48, 18, 550.0, 60.0),
        record("BrainWave", GameMode::Speed, 1800, 50, 20, 420.0, 45.0),
        record("SpeedDemon", GameMode::Speed, 1650, 50, 16, 480.0, 38.0),
    ]
}

fn record(
    username: &str,
    mode: GameMode,
    total_points: u32,
    correct_answers: u32,
    max_combo: u32,
    avg_reaction_ms: f64,
    elapsed_seconds: f64,
) -> SessionRecord {
    SessionRecord::new(
        username,
        Some(mode),
        total_points,
        correct_answers,
        max_combo,
        avg_reaction_ms,
        elapsed_seconds,
    )
}
