//! Scoring module - row awards and the score-driven difficulty table
//!
//! Each lock is scored independently: `rows * ROW_CLEAR_POINTS`, no combos or
//! level multipliers. Difficulty is looked up from the cumulative score after
//! every lock; the highest threshold reached wins outright, so the top tier
//! falls back to the base interval on purpose.

use serde::Serialize;

use crate::types::{Level, BASE_FALL_MS, DIFFICULTY_TABLE, ROW_CLEAR_POINTS};

/// Fall interval and level label for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Difficulty {
    pub fall_interval_ms: u32,
    pub level: Level,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            fall_interval_ms: BASE_FALL_MS,
            level: Level::Easy,
        }
    }
}

/// Points for clearing `rows` rows in one lock
pub fn line_clear_points(rows: usize) -> u32 {
    (rows as u32).saturating_mul(ROW_CLEAR_POINTS)
}

/// Look up the difficulty tier for a cumulative score
pub fn difficulty_for_score(score: u32) -> Difficulty {
    DIFFICULTY_TABLE
        .iter()
        .find(|&&(threshold, _, _)| score >= threshold)
        .map(|&(_, fall_interval_ms, level)| Difficulty {
            fall_interval_ms,
            level,
        })
        .unwrap_or_default()
}
