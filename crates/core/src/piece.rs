//! Active piece module - the falling piece and its collision rules
//!
//! [`is_valid_position`] is the only collision check in the engine. Moves and
//! rotations build a candidate and keep it only if that predicate accepts it.

use log::trace;

use crate::board::Board;
use crate::pieces::PieceShape;
use crate::types::{SPAWN_X, SPAWN_Y};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: PieceShape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place a shape at the spawn anchor
    pub fn spawn(shape: PieceShape) -> Self {
        Self::at(shape, SPAWN_X, SPAWN_Y)
    }

    /// Place a shape at an arbitrary anchor
    pub fn at(shape: PieceShape, x: i8, y: i8) -> Self {
        Self { shape, x, y }
    }

    /// Board coordinates of the four cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells
            .iter()
            .map(move |&(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check if all cells are at valid positions on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        is_valid_position(board, self.x, self.y, &self.shape)
    }
}

/// Result of a translation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved; carries the moved piece
    Moved(ActivePiece),
    /// Sideways (or upward) move rejected; carries the original piece
    Blocked(ActivePiece),
    /// Downward move rejected: the piece has landed and must lock
    Landed(ActivePiece),
}

impl MoveOutcome {
    /// The piece to keep after the attempt
    pub fn piece(&self) -> ActivePiece {
        match *self {
            MoveOutcome::Moved(p) | MoveOutcome::Blocked(p) | MoveOutcome::Landed(p) => p,
        }
    }

    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }

    pub fn landed(&self) -> bool {
        matches!(self, MoveOutcome::Landed(_))
    }
}

/// True iff every cell of `shape` anchored at (x, y) is on the board and empty
pub fn is_valid_position(board: &Board, x: i8, y: i8, shape: &PieceShape) -> bool {
    shape
        .cells
        .iter()
        .all(|&(dx, dy)| board.is_empty(x + dx, y + dy))
}

/// Try to translate the piece by (dx, dy)
pub fn try_move(board: &Board, piece: ActivePiece, dx: i8, dy: i8) -> MoveOutcome {
    let (x, y) = (piece.x + dx, piece.y + dy);
    if is_valid_position(board, x, y, &piece.shape) {
        MoveOutcome::Moved(ActivePiece { x, y, ..piece })
    } else if dy > 0 {
        MoveOutcome::Landed(piece)
    } else {
        MoveOutcome::Blocked(piece)
    }
}

/// Turn the piece a quarter in place, or return it unchanged if the turned
/// shape does not fit at the current anchor. There are no wall kicks.
pub fn rotate(board: &Board, piece: ActivePiece) -> ActivePiece {
    let turned = piece.shape.rotated();
    if is_valid_position(board, piece.x, piece.y, &turned) {
        ActivePiece {
            shape: turned,
            ..piece
        }
    } else {
        trace!(
            "rotation of {} rejected at ({}, {})",
            piece.shape.kind.as_str(),
            piece.x,
            piece.y
        );
        piece
    }
}
