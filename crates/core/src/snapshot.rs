//! Snapshot module - the read-only projection hosts render from
//!
//! Hosts pull a [`GameSnapshot`] whenever they want to draw; the session never
//! pushes notifications.

use serde::Serialize;

use crate::piece::ActivePiece;
use crate::pieces::{shape_of, PieceShape};
use crate::types::{Cell, Level, PieceKind, BASE_FALL_MS, BOARD_HEIGHT, BOARD_WIDTH};

/// Row-major grid, row 0 at the top
pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [(i8, i8); 4],
    pub x: i8,
    pub y: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.shape.kind,
            cells: value.shape.cells,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Locked cells with the active piece painted on top
    pub grid: Grid,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceShape,
    pub score: u32,
    pub level: Level,
    pub fall_interval_ms: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Neither paused nor over
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: shape_of(PieceKind::O),
            score: 0,
            level: Level::Easy,
            fall_interval_ms: BASE_FALL_MS,
            paused: false,
            game_over: false,
        }
    }
}
