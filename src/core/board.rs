//! Board module - manages the settled game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of
//! the piece that settled there. Flat array storage, row-major, row 0 = top.
//!
//! Collision is asymmetric on purpose: cells off the sides or below the
//! bottom collide, cells above the top row do not. A piece may therefore
//! overhang the top of the grid without colliding, and `merge` simply skips
//! rows above the grid.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::core::pieces::Shape;

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The settled grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
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

    /// Get cell at position (x, y); None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y); false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a shape anchored at (x, y) overlaps settled cells or leaves
    /// the grid through a side or the bottom. Rows above the top never
    /// collide.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        for (dx, dy) in shape.offsets() {
            let px = x + dx;
            let py = y + dy;

            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return true;
            }
            if py < 0 {
                // Above the visible grid: not a collision
                continue;
            }
            if self.cells[(py as usize) * (BOARD_WIDTH as usize) + (px as usize)].is_some() {
                return true;
            }
        }
        false
    }

    /// Commit a piece into the grid at its anchor. Called once per piece,
    /// at lock time; cells above the top row are dropped silently.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8, kind: PieceKind) {
        for (dx, dy) in shape.offsets() {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`, shifting everything above it down one row and
    /// inserting a fresh empty row at the top.
    fn remove_row(&mut self, y: usize) {
        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[..width] {
            *cell = None;
        }
    }

    /// Clear all full rows, scanning bottom to top, and return how many
    /// were removed.
    ///
    /// After a removal the same index is examined again: the shift pulls
    /// the row above into the just-cleared slot, and that row may itself
    /// be full.
    pub fn sweep(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.remove_row(row);
                cleared += 1;
                // Re-check the same row index
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
