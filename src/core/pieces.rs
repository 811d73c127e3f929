//! Pieces module - tetromino catalog and shape matrix rotation
//!
//! Each kind has one canonical orientation stored as a square occupancy
//! matrix (I is 4x4, O is 2x2, the rest are 3x3). The bounding box stays
//! square, so rotation never changes its dimensions. Rotation is the
//! classic in-place transform: transpose, then reverse each row for
//! clockwise or reverse the row order for counter-clockwise.

use crate::types::PieceKind;

/// Maximum shape matrix size (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square occupancy matrix of a piece, sized 2..=4
///
/// Backed by a fixed 4x4 buffer; only the top-left `size` x `size` block
/// is meaningful. Owned exclusively by the active piece and mutated in
/// place on rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Canonical spawn-orientation shape for a piece kind
    pub fn of(kind: PieceKind) -> Self {
        let (size, rows): (u8, &[&[u8]]) = match kind {
            PieceKind::I => (4, &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
            PieceKind::J => (3, &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::L => (3, &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::O => (2, &[&[1, 1], &[1, 1]]),
            PieceKind::S => (3, &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
            PieceKind::T => (3, &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
            PieceKind::Z => (3, &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
        };

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Self { size, cells }
    }

    /// Width (= height) of the bounding matrix
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the shape occupies (x, y) within its matrix
    pub fn occupied(&self, x: u8, y: u8) -> bool {
        x < self.size && y < self.size && self.cells[y as usize][x as usize]
    }

    /// Iterate occupied offsets as (dx, dy) from the top-left anchor
    pub fn offsets(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| self.cells[y][x].then_some((x as i8, y as i8)))
        })
    }

    /// Rotate the matrix in place by a quarter turn
    pub fn rotate(&mut self, clockwise: bool) {
        let n = self.size as usize;

        // Transpose
        for y in 0..n {
            for x in 0..y {
                let tmp = self.cells[y][x];
                self.cells[y][x] = self.cells[x][y];
                self.cells[x][y] = tmp;
            }
        }

        if clockwise {
            // Reverse each row
            for row in self.cells.iter_mut().take(n) {
                row[..n].reverse();
            }
        } else {
            // Reverse row order
            self.cells[..n].reverse();
        }
    }
}
