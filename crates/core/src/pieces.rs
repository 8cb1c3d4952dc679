//! Pieces module - the seven-piece catalog
//!
//! Every shape is stored in its spawn orientation with its bounding box and
//! color. Catalog entries never change; rotation returns a fresh
//! [`PieceShape`] (see [`PieceShape::rotated`]).

use serde::Serialize;

use crate::rng::PieceRng;
use crate::types::{Color, PieceKind};

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// A piece outline: four cell offsets plus bounding box and color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceShape {
    pub kind: PieceKind,
    pub cells: [CellOffset; 4],
    pub width: u8,
    pub height: u8,
    pub color: Color,
}

impl PieceShape {
    const fn new(kind: PieceKind, cells: [CellOffset; 4], width: u8, height: u8, color: Color) -> Self {
        Self {
            kind,
            cells,
            width,
            height,
            color,
        }
    }

    /// Quarter turn about the integer center `(width / 2, height / 2)`.
    ///
    /// In center-relative coordinates `(x, y)` maps to `(-y, x)`. Kind, color
    /// and bounding box are carried over unchanged, so the center stays put
    /// across repeated turns. Pieces whose box has an even side therefore turn
    /// about a cell corner rather than their middle and drift: the O piece
    /// moves one column right on a single turn, and turned offsets can leave
    /// the declared box (the I piece reaches x = -1). Four turns are always
    /// the identity.
    pub fn rotated(&self) -> Self {
        let cx = (self.width / 2) as i8;
        let cy = (self.height / 2) as i8;

        let mut cells = self.cells;
        for cell in &mut cells {
            let (x, y) = (cell.0 - cx, cell.1 - cy);
            *cell = (-y + cx, x + cy);
        }

        Self { cells, ..*self }
    }
}

/// Static catalog in canonical order
pub const CATALOG: [PieceShape; 7] = [
    PieceShape::new(PieceKind::O, [(0, 0), (1, 0), (0, 1), (1, 1)], 2, 2, Color::Yellow),
    PieceShape::new(PieceKind::I, [(0, 0), (0, 1), (0, 2), (0, 3)], 1, 4, Color::Cyan),
    PieceShape::new(PieceKind::L, [(0, 0), (0, 1), (0, 2), (1, 2)], 2, 3, Color::Orange),
    PieceShape::new(PieceKind::J, [(1, 0), (1, 1), (1, 2), (0, 2)], 2, 3, Color::Blue),
    PieceShape::new(PieceKind::Z, [(0, 0), (1, 0), (1, 1), (2, 1)], 3, 2, Color::Red),
    PieceShape::new(PieceKind::S, [(1, 0), (2, 0), (0, 1), (1, 1)], 3, 2, Color::Green),
    PieceShape::new(PieceKind::T, [(0, 0), (1, 0), (2, 0), (1, 1)], 3, 2, Color::Purple),
];

/// Number of shapes in the catalog
pub fn piece_count() -> usize {
    CATALOG.len()
}

/// Catalog lookup. Indices wrap around, so every index is valid.
pub fn piece_at(index: usize) -> PieceShape {
    CATALOG[index % CATALOG.len()]
}

/// Spawn-orientation shape of a kind
pub fn shape_of(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::O => CATALOG[0],
        PieceKind::I => CATALOG[1],
        PieceKind::L => CATALOG[2],
        PieceKind::J => CATALOG[3],
        PieceKind::Z => CATALOG[4],
        PieceKind::S => CATALOG[5],
        PieceKind::T => CATALOG[6],
    }
}

/// Uniform pick over the catalog
pub fn random_piece<R: PieceRng + ?Sized>(rng: &mut R) -> PieceShape {
    piece_at(rng.next_index(piece_count()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use std::collections::BTreeSet;

    fn cell_set(shape: &PieceShape) -> BTreeSet<CellOffset> {
        shape.cells.iter().copied().collect()
    }

    #[test]
    fn test_catalog_entries_fit_their_box() {
        for shape in CATALOG {
            for &(x, y) in &shape.cells {
                assert!(x >= 0 && (x as u8) < shape.width, "{:?}", shape.kind);
                assert!(y >= 0 && (y as u8) < shape.height, "{:?}", shape.kind);
            }
            assert_eq!(cell_set(&shape).len(), 4, "duplicate cell in {:?}", shape.kind);
        }
    }

    #[test]
    fn test_color_follows_kind() {
        for shape in CATALOG {
            assert_eq!(shape.color, shape.kind.color());
        }
    }

    #[test]
    fn test_shape_of_matches_catalog_kind() {
        for kind in PieceKind::ALL {
            assert_eq!(shape_of(kind).kind, kind);
        }
    }

    #[test]
    fn test_piece_at_wraps() {
        assert_eq!(piece_at(7), CATALOG[0]);
        assert_eq!(piece_at(13), CATALOG[6]);
    }

    #[test]
    fn test_random_piece_uses_injected_rng() {
        let mut rng = ScriptedRng::new(vec![6, 1]);
        assert_eq!(random_piece(&mut rng).kind, PieceKind::T);
        assert_eq!(random_piece(&mut rng).kind, PieceKind::I);
    }

    #[test]
    fn test_rotate_does_not_touch_catalog() {
        let before = CATALOG[2];
        let _ = CATALOG[2].rotated();
        assert_eq!(CATALOG[2], before);
    }

    #[test]
    fn test_vertical_i_turns_horizontal() {
        let turned = shape_of(PieceKind::I).rotated();
        assert_eq!(turned.cells, [(2, 2), (1, 2), (0, 2), (-1, 2)]);
        // The box is carried over, not swapped.
        assert_eq!((turned.width, turned.height), (1, 4));
    }

    #[test]
    fn test_t_turn() {
        let turned = shape_of(PieceKind::T).rotated();
        assert_eq!(cell_set(&turned), [(2, 0), (2, 1), (2, 2), (1, 1)].into_iter().collect());
    }

    // Accepted property: the turn center is floor(w/2), floor(h/2), so the O
    // piece does not turn in place. It shifts one column right.
    #[test]
    fn test_o_turn_drifts_one_column() {
        let o = shape_of(PieceKind::O);
        let turned = o.rotated();
        let shifted: BTreeSet<CellOffset> = o.cells.iter().map(|&(x, y)| (x + 1, y)).collect();
        assert_eq!(cell_set(&turned), shifted);
    }

    #[test]
    fn test_four_turns_are_identity_for_every_kind() {
        for shape in CATALOG {
            let twice = shape.rotated().rotated();
            let back = twice.rotated().rotated();
            assert_eq!(back, shape, "{:?}", shape.kind);
        }
    }
}
