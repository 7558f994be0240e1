//! Plain-data view of a game for renderers.
//!
//! A snapshot owns copies of everything a frame needs, so a renderer never
//! holds a borrow of the live [`GameState`](crate::GameState).

use crate::game_state::Piece;
use crate::grid::Row;
use crate::pieces::Minos;
use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Absolute grid coordinates of the piece's cells.
    pub cells: Minos,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [Row; GRID_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        self.active = None;
        self.score = 0;
        self.game_over = false;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Contents of (x, y): a locked cell, else the active piece, else empty.
    pub fn cell_at(&self, x: i8, y: i8) -> Option<PieceKind> {
        if x < 0 || y < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        if let Some(kind) = self.grid[y as usize][x as usize] {
            return Some(kind);
        }
        self.active
            .as_ref()
            .filter(|a| a.cells.contains(&(x, y)))
            .map(|a| a.kind)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            score: 0,
            game_over: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_at_prefers_locked_then_active() {
        let mut snap = GameSnapshot::default();
        snap.grid[19][0] = Some(PieceKind::L);
        snap.active = Some(ActiveSnapshot::from(Piece::spawn(PieceKind::O)));

        assert_eq!(snap.cell_at(0, 19), Some(PieceKind::L));
        assert_eq!(snap.cell_at(4, 0), Some(PieceKind::O));
        assert_eq!(snap.cell_at(3, 0), None);
        assert_eq!(snap.cell_at(-1, 0), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut snap = GameSnapshot::default();
        snap.grid[5][5] = Some(PieceKind::T);
        snap.score = 300;
        snap.game_over = true;
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
        assert!(snap.playable());
    }
}
