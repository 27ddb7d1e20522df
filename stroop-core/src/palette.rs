//! Color palette and difficulty tiers.
//!
//! Harder difficulties draw questions from a larger pool of colors, which
//! makes distractors more numerous and more similar.

/// A named color with its display hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Full palette, in pool order. Each difficulty tier is a prefix of this list.
pub const PALETTE: [Color; 15] = [
    Color { name: "Red", hex: "#ef4444" },
    Color { name: "Blue", hex: "#3b82f6" },
    Color { name: "Green", hex: "#22c55e" },
    Color { name: "Yellow", hex: "#eab308" },
    Color { name: "Purple", hex: "#8b5cf6" },
    Color { name: "Orange", hex: "#f97316" },
    Color { name: "Pink", hex: "#ff29ff" },
    Color { name: "Cyan", hex: "#06b6d4" },
    Color { name: "Indigo", hex: "#6366f1" },
    Color { name: "Violet", hex: "#8b5cf6" },
    Color { name: "Black", hex: "#1a1a1a" },
    Color { name: "Brown", hex: "#78350f" },
    Color { name: "Lavender", hex: "#a78bfa" },
    Color { name: "White", hex: "#ffffff" },
    Color { name: "Beige", hex: "#f5f5dc" },
];

pub const MIN_DIFFICULTY: u32 = 1;
pub const MAX_DIFFICULTY: u32 = 5;

/// Hex shown for a name that is not in the palette.
pub const UNKNOWN_HEX: &str = "#888";

/// Clamp an arbitrary difficulty into `1..=5`.
pub fn clamp_difficulty(difficulty: u32) -> u32 {
    difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// Color pool for a difficulty: 4, 6, 8, 10 colors, then the full palette.
pub fn pool_for(difficulty: u32) -> &'static [Color] {
    let size = match clamp_difficulty(difficulty) {
        1 => 4,
        2 => 6,
        3 => 8,
        4 => 10,
        _ => PALETTE.len(),
    };
    &PALETTE[..size]
}

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<&'static Color> {
    PALETTE.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

pub fn hex_for(name: &str) -> &'static str {
    find(name).map_or(UNKNOWN_HEX, |c| c.hex)
}
