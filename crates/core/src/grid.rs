//! Grid module - the 10x20 well of locked cells
//!
//! Each cell is empty or holds the kind of the piece that was locked there.
//! Rows are owned `[Cell; GRID_WIDTH]` arrays, so shifting a row down is a
//! plain copy and no two row indices ever alias.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::pieces::MinoOffset;
use crate::types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

const WIDTH: usize = GRID_WIDTH as usize;
const HEIGHT: usize = GRID_HEIGHT as usize;

/// One grid row.
pub type Row = [Cell; WIDTH];

/// The game grid - 10 columns x 20 rows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: [Row; HEIGHT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            rows: [[None; WIDTH]; HEIGHT],
        }
    }

    /// Build a grid from explicit rows (top row first).
    pub fn from_rows(rows: [Row; HEIGHT]) -> Self {
        Self { rows }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<(usize, usize)> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((x as usize, y as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|(x, y)| self.rows[y][x])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some((x, y)) => {
                self.rows[y][x] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// In bounds and filled.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    pub fn rows(&self) -> &[Row; HEIGHT] {
        &self.rows
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Remove row `y`: every row above moves down by one and row 0 becomes empty.
    pub fn clear_row(&mut self, y: usize) {
        if y >= HEIGHT {
            return;
        }
        for k in (1..=y).rev() {
            self.rows[k] = self.rows[k - 1];
        }
        self.rows[0] = [None; WIDTH];
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Scans from the bottom row upward. After a clear the same index is
    /// checked again, because the row above has just moved into it.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = HEIGHT;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.clear_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Write `kind` into every mino of a piece anchored at (x, y).
    ///
    /// The caller has already validated the position; this is a pure commit.
    pub fn lock_cells(&mut self, minos: &[MinoOffset], x: i8, y: i8, kind: PieceKind) {
        for &(dx, dy) in minos {
            let written = match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(px), Some(py)) => self.set(px, py, Some(kind)),
                _ => false,
            };
            debug_assert!(written, "locked mino ({x}+{dx}, {y}+{dy}) outside the grid");
        }
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().flatten().all(|c| c.is_none())
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.rows = [[None; WIDTH]; HEIGHT];
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
