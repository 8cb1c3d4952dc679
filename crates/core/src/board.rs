//! Board module - manages the committed grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a color.
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Anything outside that range reads as occupied, so collision checks never
//! need their own bounds test.

use arrayvec::ArrayVec;

use crate::piece::ActivePiece;
use crate::types::{Cell, Color, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Rows removed by one clear, as pre-clear indices sorted bottom to top
pub type ClearedRows = ArrayVec<u8, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff (x, y) is on the board and unoccupied
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True when no cell is occupied
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(Option::is_some))
    }

    /// Cells of row `y`, or `None` when `y` is out of range
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Paint every in-bounds cell of the piece with its color.
    /// Cells that fall outside the board are dropped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        let color: Color = piece.shape.color;
        for (x, y) in piece.cells() {
            self.set(x, y, Some(color));
        }
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Two-pointer compaction: every surviving row is copied down exactly once,
    /// then the freed rows at the top are blanked. Equivalent to removing all
    /// full rows at once and prepending that many empty rows.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y as u8);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Empty every cell
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Fill row `y` with `color`, leaving the listed columns empty
    pub fn fill_row_except(&mut self, y: i8, color: Color, holes: &[i8]) {
        for x in 0..BOARD_WIDTH as i8 {
            let cell = if holes.contains(&x) { None } else { Some(color) };
            self.set(x, y, cell);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
