use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::Validate;

/// Chance of a perfect move for levels 1 through 5.
pub const DEFAULT_PERFECT_PROBABILITIES: [f64; 5] = [0.0, 0.2, 0.5, 0.8, 1.0];

const LEVEL_LABELS: [&str; 5] = ["Beginner", "Easy", "Medium", "Hard", "Impossible"];

/// Lookup table from difficulty level to the probability of using the perfect
/// mover. Entry `i` belongs to level `i + 1`; level 0 means no engine opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub perfect_move_probability: Vec<f64>,
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self {
            perfect_move_probability: DEFAULT_PERFECT_PROBABILITIES.to_vec(),
        }
    }
}

impl Validate for DifficultySettings {
    fn validate(&self) -> Result<(), String> {
        if self.perfect_move_probability.is_empty() {
            return Err("at least one difficulty level is required".to_string());
        }
        if self.perfect_move_probability.len() > u8::MAX as usize {
            return Err(format!("at most {} difficulty levels are supported", u8::MAX));
        }
        for (i, p) in self.perfect_move_probability.iter().enumerate() {
            if !(0.0..=1.0).contains(p) {
                return Err(format!(
                    "perfect move probability for level {} must be within [0, 1], got {}",
                    i + 1,
                    p
                ));
            }
        }
        Ok(())
    }
}

impl DifficultySettings {
    pub fn max_level(&self) -> u8 {
        self.perfect_move_probability.len().min(u8::MAX as usize) as u8
    }

    pub fn difficulty(&self, level: u8) -> Result<Difficulty, String> {
        if level == 0 {
            return Err("Difficulty 0 has no engine opponent".to_string());
        }
        let perfect_probability = self
            .perfect_move_probability
            .get(level as usize - 1)
            .copied()
            .ok_or_else(|| {
                format!(
                    "Difficulty must be between 1 and {}, got {}",
                    self.max_level(),
                    level
                )
            })?;

        Ok(Difficulty {
            level,
            perfect_probability,
        })
    }

    /// Level 0 maps to `None`: a game between two humans.
    pub fn opponent(&self, level: u8) -> Result<Option<Difficulty>, String> {
        if level == 0 {
            return Ok(None);
        }
        self.difficulty(level).map(Some)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    level: u8,
    perfect_probability: f64,
}

impl Difficulty {
    pub fn from_level(level: u8) -> Result<Self, String> {
        DifficultySettings::default().difficulty(level)
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn perfect_probability(&self) -> f64 {
        self.perfect_probability
    }

    pub fn label(&self) -> &'static str {
        LEVEL_LABELS
            .get(self.level as usize - 1)
            .copied()
            .unwrap_or("Custom")
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.level, self.label())
    }
}
