//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the game core, the terminal renderer and the input mapping alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Timing
//!
//! The core has no clock. The host calls the gravity tick every
//! [`DEFAULT_GRAVITY_MS`] unless configured otherwise.
//!
//! # Examples
//!
//! ```
//! use modern_tetris_types::{GameAction, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::from_index(1), Some(PieceKind::O));
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Default gravity interval: one row every 500ms.
pub const DEFAULT_GRAVITY_MS: u64 = 500;

/// Flat bonus awarded for every cleared row.
pub const LINE_CLEAR_POINTS: u32 = 100;

/// 24-bit RGB color of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino kinds, in shape-table order.
///
/// The table order matters: the piece generator maps a random index in
/// `0..7` onto [`PieceKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in shape-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Look up a kind by its shape-table index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this kind in the shape table.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Display color of locked and falling cells of this kind.
    ///
    /// ```
    /// use modern_tetris_types::{Color, PieceKind};
    ///
    /// assert_eq!(PieceKind::I.color(), Color::new(0, 255, 255));
    /// assert_eq!(PieceKind::Z.color(), Color::new(255, 0, 0));
    /// ```
    pub fn color(self) -> Color {
        match self {
            PieceKind::I => Color::new(0, 255, 255),
            PieceKind::O => Color::new(255, 255, 0),
            PieceKind::T => Color::new(128, 0, 128),
            PieceKind::L => Color::new(255, 165, 0),
            PieceKind::J => Color::new(0, 0, 255),
            PieceKind::S => Color::new(0, 255, 0),
            PieceKind::Z => Color::new(255, 0, 0),
        }
    }

    /// Lowercase single-letter name, used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Player and host actions that can be applied to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; locks it when blocked
    SoftDrop,
    /// Drop until the piece locks
    HardDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Start a new game
    Restart,
}

impl GameAction {
    /// camelCase name, used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Locked cell; its color is `PieceKind::color()`
pub type Cell = Option<PieceKind>;
