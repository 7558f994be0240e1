//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Each key
//! press is one action; there is no auto-repeat handling beyond what the
//! terminal itself sends.

pub mod map;

pub use modern_tetris_types as types;

pub use map::{allowed_when_over, handle_key_event, should_quit};
