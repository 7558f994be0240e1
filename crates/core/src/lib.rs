//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state management. It has no
//! dependencies on UI, terminal or I/O:
//!
//! - **Deterministic**: pieces come from an injected [`RandomSource`]; a seeded
//!   source replays the same game
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: the host decides how to draw and when gravity ticks
//! - **Allocation-free**: fixed-size grid rows and `arrayvec` cell lists
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 grid with bounds checks and line clearing
//! - [`game_state`]: active piece, movement state machine, locking and score
//! - [`pieces`]: shape matrices and clockwise rotation
//! - [`rng`]: random sources and uniform piece selection
//! - [`scoring`]: flat per-line bonus
//! - [`snapshot`]: copyable view for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn horizontally centered on the top row, kind chosen uniformly
//! - A move or rotation is committed only if the result fits; rotations never kick
//! - A blocked downward move locks the piece, clears full rows and spawns the next
//! - Each cleared row is worth 100 points
//! - The game ends when a freshly spawned piece does not fit
//!
//! # Example
//!
//! ```
//! use modern_tetris_core::GameState;
//! use modern_tetris_core::types::GameAction;
//!
//! let mut game = GameState::seeded(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.grid().occupied_count(), 4);
//! assert!(!game.is_over());
//! ```
//!
//! # Timing
//!
//! The core has no timers. Call [`GameState::tick`] from the host's gravity
//! timer; [`types::DEFAULT_GRAVITY_MS`] is the suggested interval.

pub mod game_state;
pub mod grid;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use modern_tetris_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, LockEvent, Phase, Piece};
pub use grid::Grid;
pub use pieces::{spawn_orientation, Orientation};
pub use rng::{EntropyRandom, RandomSource, ScriptedRandom, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
