//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: the well and side panel are
//! painted into a [`FrameBuffer`], which [`TerminalRenderer`] diffs and
//! flushes through `crossterm`. Nothing here touches the game rules.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use modern_tetris_core as core;
pub use modern_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
