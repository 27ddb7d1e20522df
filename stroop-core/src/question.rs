//! Stroop question generation and answer checking.
//!
//! A question shows a color word printed in a *different* font color. The
//! correct answer is always the font color, never the word.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::palette::{self, Color, PALETTE};

pub const OPTION_COUNT: usize = 4;

/// Word shown when the pool has no second color to use as the word.
const FALLBACK_WORD: &str = "Black";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StroopQuestion {
    /// Displayed word, uppercase (e.g. "YELLOW").
    pub text_word: String,
    /// Font color name; this is the correct answer.
    pub font_color_name: String,
    pub font_color_hex: String,
    /// Four distinct answer choices, one of which is the font color.
    pub options: Vec<String>,
    pub difficulty: u32,
}

impl StroopQuestion {
    pub fn is_correct(&self, selected: &str) -> bool {
        self.font_color_name.eq_ignore_ascii_case(selected)
    }
}

/// Difficulty earned by a number of correct answers.
pub fn difficulty_for_score(correct_answers: u32) -> u32 {
    match correct_answers {
        40.. => 5,
        30..=39 => 4,
        20..=29 => 3,
        10..=19 => 2,
        _ => 1,
    }
}

/// Generates questions from the color pool of the current difficulty.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    difficulty: u32,
    pool: &'static [Color],
}

impl QuestionGenerator {
    pub fn new(difficulty: u32) -> Self {
        let difficulty = palette::clamp_difficulty(difficulty);
        Self {
            difficulty,
            pool: palette::pool_for(difficulty),
        }
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn pool(&self) -> &'static [Color] {
        self.pool
    }

    pub fn set_difficulty(&mut self, difficulty: u32) {
        *self = Self::new(difficulty);
    }

    /// Re-derive difficulty from the player's correct-answer count.
    pub fn scale_to_score(&mut self, correct_answers: u32) {
        self.set_difficulty(difficulty_for_score(correct_answers));
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> StroopQuestion {
        let font = self.pool[rng.gen_range(0..self.pool.len())];

        let word_candidates: Vec<&Color> =
            self.pool.iter().filter(|c| c.name != font.name).collect();
        let word = word_candidates
            .choose(rng)
            .map_or(FALLBACK_WORD, |c| c.name);

        let mut distractors: Vec<&'static str> = self
            .pool
            .iter()
            .map(|c| c.name)
            .filter(|&name| name != font.name && name != word)
            .collect();
        distractors.shuffle(rng);

        let mut options: Vec<&'static str> = Vec::with_capacity(OPTION_COUNT);
        options.push(font.name);
        options.extend(distractors.into_iter().take(OPTION_COUNT - 1));

        // Small pools cannot supply three distractors; top up from the full palette.
        while options.len() < OPTION_COUNT {
            let filler = PALETTE[rng.gen_range(0..PALETTE.len())].name;
            if !options.contains(&filler) {
                options.push(filler);
            }
        }
        options.shuffle(rng);

        StroopQuestion {
            text_word: word.to_uppercase(),
            font_color_name: font.name.to_string(),
            font_color_hex: font.hex.to_string(),
            options: options.into_iter().map(String::from).collect(),
            difficulty: self.difficulty,
        }
    }
}
