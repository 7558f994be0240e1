//! Modern Tetris (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports
//! them as `modern_tetris::{core,input,term,types}` and adds the host-side
//! pieces the binary needs: environment configuration and file logging.

pub mod config;
pub mod logging;

pub use modern_tetris_core as core;
pub use modern_tetris_input as input;
pub use modern_tetris_term as term;
pub use modern_tetris_types as types;

pub use config::GameConfig;
