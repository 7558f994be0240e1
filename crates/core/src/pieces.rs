//! Pieces module - tetromino shape matrices and rotation
//!
//! Each kind has one canonical orientation, stored as a small boolean matrix.
//! Other orientations are derived by rotating that matrix 90° clockwise with
//! the index remap `new[i][j] = old[rows - 1 - j][i]`. A rotation swaps the
//! matrix dimensions (R x C becomes C x R); the piece anchor stays where it is
//! and keeps meaning "top-left corner of the matrix".
//!
//! There is no wall-kick table: a rotation either fits at the current anchor
//! or is discarded.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, GRID_WIDTH};

/// Largest matrix side of any shape.
pub const MAX_DIM: usize = 4;

/// Offset of a single mino relative to the piece anchor, as (dx, dy).
pub type MinoOffset = (i8, i8);

/// Mino offsets of one orientation.
pub type Minos = ArrayVec<MinoOffset, { MAX_DIM * MAX_DIM }>;

/// One orientation of a piece: a `rows x cols` boolean matrix.
///
/// Cells outside `rows x cols` are always `false`, so two orientations compare
/// equal exactly when their visible matrices match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_DIM]; MAX_DIM],
}

impl Orientation {
    /// Build from rows of 0/1 values. All rows must have the same length.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(height <= MAX_DIM && width <= MAX_DIM, "shape larger than {MAX_DIM}x{MAX_DIM}");

        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), width, "ragged shape row {i}");
            for (j, &v) in row.iter().enumerate() {
                cells[i][j] = v != 0;
            }
        }

        Self {
            rows: height as u8,
            cols: width as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Is the matrix cell at row `i`, column `j` occupied?
    pub fn is_filled(&self, i: usize, j: usize) -> bool {
        i < self.rows as usize && j < self.cols as usize && self.cells[i][j]
    }

    /// The matrix rotated 90° clockwise.
    ///
    /// `new[i][j] = old[rows - 1 - j][i]`, result is `cols x rows`.
    pub fn rotated(&self) -> Self {
        let (r, c) = (self.rows as usize, self.cols as usize);
        let mut cells = [[false; MAX_DIM]; MAX_DIM];
        for (i, row) in cells.iter_mut().enumerate().take(c) {
            for (j, cell) in row.iter_mut().enumerate().take(r) {
                *cell = self.cells[r - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Offsets `(dx, dy)` of every occupied cell, row-major.
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for i in 0..self.rows as usize {
            for j in 0..self.cols as usize {
                if self.cells[i][j] {
                    out.push((j as i8, i as i8));
                }
            }
        }
        out
    }
}

/// Canonical orientation for a piece kind
pub fn spawn_orientation(kind: PieceKind) -> Orientation {
    match kind {
        PieceKind::I => Orientation::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Orientation::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Orientation::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
        PieceKind::L => Orientation::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        PieceKind::J => Orientation::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        PieceKind::S => Orientation::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::Z => Orientation::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
    }
}

/// Spawn anchor (x, y) for an orientation: horizontally centered, top row.
pub fn spawn_position(orientation: &Orientation) -> (i8, i8) {
    let x = (GRID_WIDTH / 2) as i8 - (orientation.cols() / 2) as i8;
    (x, 0)
}
