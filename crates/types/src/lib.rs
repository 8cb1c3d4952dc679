//! Core types module - shared data structures and constants
//!
//! Plain data used by the engine, the input map, and the terminal view.
//! Nothing in here knows about timers, terminals, or randomness.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn anchor**: (4, 0) for every piece
//!
//! # Difficulty
//!
//! Fall speed and level label are derived from the score after every lock:
//!
//! | Score >= | Interval | Level |
//! |----------|----------|-------|
//! | 10000 | 600ms | Devil calling, time to suffer |
//! | 5000 | 100ms | Hold on tight |
//! | 2000 | 200ms | Heating up |
//! | 1000 | 300ms | Jokes are over |
//! | 0 | 600ms | Easy |
//!
//! # Examples
//!
//! ```
//! use tetrogrid_types::{Color, Level, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.color(), Color::Purple);
//! assert_eq!(PieceKind::T.as_str(), "t");
//!
//! assert_eq!(Level::Easy.label(), "Easy");
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of the anchor every new piece spawns at
pub const SPAWN_X: i8 = 4;

/// Row of the anchor every new piece spawns at
pub const SPAWN_Y: i8 = 0;

/// Points awarded per cleared row
pub const ROW_CLEAR_POINTS: u32 = 100;

/// Fall interval before any difficulty threshold is reached
pub const BASE_FALL_MS: u32 = 600;

/// Difficulty thresholds, highest first: (minimum score, fall interval ms, level)
pub const DIFFICULTY_TABLE: [(u32, u32, Level); 4] = [
    (10_000, 600, Level::DevilCalling),
    (5_000, 100, Level::HoldOnTight),
    (2_000, 200, Level::HeatingUp),
    (1_000, 300, Level::JokesAreOver),
];

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    O,
    I,
    L,
    J,
    Z,
    S,
    T,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::I => "i",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::T => "t",
        }
    }

    /// The color every cell of this kind is painted with
    pub fn color(&self) -> Color {
        match self {
            PieceKind::O => Color::Yellow,
            PieceKind::I => Color::Cyan,
            PieceKind::L => Color::Orange,
            PieceKind::J => Color::Blue,
            PieceKind::Z => Color::Red,
            PieceKind::S => Color::Green,
            PieceKind::T => Color::Purple,
        }
    }
}

/// Color tag stored in occupied cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Yellow,
    Cyan,
    Orange,
    Blue,
    Red,
    Green,
    Purple,
}

/// Cell on the board (None = empty, Some = filled with a color)
pub type Cell = Option<Color>;

/// Difficulty tier reported next to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Easy,
    JokesAreOver,
    HeatingUp,
    HoldOnTight,
    DevilCalling,
}

impl Level {
    /// Human readable label shown by hosts
    pub fn label(&self) -> &'static str {
        match self {
            Level::Easy => "Easy",
            Level::JokesAreOver => "Jokes are over",
            Level::HeatingUp => "Heating up",
            Level::HoldOnTight => "Hold on tight",
            Level::DevilCalling => "Devil calling, time to suffer",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Pause,
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_piece_kind_names_are_lowercase_letters() {
        let names: Vec<&str> = PieceKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["o", "i", "l", "j", "z", "s", "t"]);
    }

    #[test]
    fn test_every_kind_has_distinct_color() {
        let colors: HashSet<Color> = PieceKind::ALL.iter().map(|k| k.color()).collect();
        assert_eq!(colors.len(), 7);
    }

    #[test]
    fn test_difficulty_table_is_sorted_highest_first() {
        for pair in DIFFICULTY_TABLE.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }
}
