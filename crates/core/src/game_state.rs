//! Game state module - the falling-piece state machine
//!
//! Ties the grid, piece geometry, random source and scoring together. The
//! state machine has two phases: `Falling` (an active piece is in play) and
//! `Over` (terminal until [`GameState::reset`]).
//!
//! Every mutation is tentative: a translation or rotation is computed on a
//! copy of the active piece and committed only if the copy is valid. A failed
//! downward move means the piece has landed, which locks it, clears full rows
//! and spawns the next piece.

use log::{debug, info};

use crate::grid::Grid;
use crate::pieces::{spawn_orientation, spawn_position, Minos, Orientation};
use crate::rng::{random_kind, EntropyRandom, RandomSource, SimpleRng};
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub orientation: Orientation,
    /// Column of the orientation matrix's top-left corner.
    pub x: i8,
    /// Row of the orientation matrix's top-left corner.
    pub y: i8,
}

impl Piece {
    /// A piece of `kind` in its canonical orientation at the spawn anchor.
    pub fn spawn(kind: PieceKind) -> Self {
        let orientation = spawn_orientation(kind);
        let (x, y) = spawn_position(&orientation);
        Self {
            kind,
            orientation,
            x,
            y,
        }
    }

    /// Absolute grid coordinates of every occupied cell.
    pub fn cells(&self) -> Minos {
        self.orientation
            .minos()
            .into_iter()
            .filter_map(|(dx, dy)| Some((self.x.checked_add(dx)?, self.y.checked_add(dy)?)))
            .collect()
    }

    /// Every occupied cell is inside the grid and on an empty cell.
    pub fn is_valid(&self, grid: &Grid) -> bool {
        self.orientation.minos().iter().all(|&(dx, dy)| {
            match (self.x.checked_add(dx), self.y.checked_add(dy)) {
                (Some(x), Some(y)) => grid.is_free(x, y),
                _ => false,
            }
        })
    }

    /// Copy moved by (dx, dy); `None` if the anchor leaves the `i8` range.
    pub fn translated(&self, dx: i32, dy: i32) -> Option<Self> {
        let shift = |v: i8, d: i32| {
            i32::from(v)
                .checked_add(d)
                .and_then(|n| i8::try_from(n).ok())
        };
        Some(Self {
            x: shift(self.x, dx)?,
            y: shift(self.y, dy)?,
            ..*self
        })
    }

    /// Copy rotated 90° clockwise around the same anchor.
    pub fn rotated(&self) -> Self {
        Self {
            orientation: self.orientation.rotated(),
            ..*self
        }
    }
}

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Falling,
    Over,
}

/// What happened when the last piece locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Points added by this lock.
    pub points: u32,
    /// The piece spawned after this lock had no room.
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = EntropyRandom> {
    grid: Grid,
    active: Piece,
    score: u32,
    phase: Phase,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    rng: R,
}

impl GameState<EntropyRandom> {
    /// New game drawing pieces from an OS-seeded RNG.
    pub fn new() -> Self {
        Self::with_random(EntropyRandom::new())
    }
}

impl Default for GameState<EntropyRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState<SimpleRng> {
    /// Deterministic game: the same seed always yields the same pieces.
    pub fn seeded(seed: u32) -> Self {
        Self::with_random(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// New game drawing pieces from `rng`.
    pub fn with_random(rng: R) -> Self {
        let mut state = Self {
            grid: Grid::new(),
            active: Piece::spawn(PieceKind::I),
            score: 0,
            phase: Phase::Falling,
            last_event: None,
            rng,
        };
        state.reset();
        state
    }

    /// Resume play on a pre-filled grid: score 0, first piece drawn from `rng`.
    ///
    /// If that piece has no room the game starts out over.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        let mut state = Self {
            grid,
            active: Piece::spawn(PieceKind::I),
            score: 0,
            phase: Phase::Falling,
            last_event: None,
            rng,
        };
        state.spawn();
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The falling piece, or `None` once the game is over.
    pub fn active(&self) -> Option<Piece> {
        match self.phase {
            Phase::Falling => Some(self.active),
            Phase::Over => None,
        }
    }

    /// Grid cells covered by the falling piece (empty once the game is over).
    pub fn active_cells(&self) -> Minos {
        self.active().map(|p| p.cells()).unwrap_or_default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn random_source(&self) -> &R {
        &self.rng
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = *self.grid.rows();
        out.active = self.active().map(ActiveSnapshot::from);
        out.score = self.score;
        out.game_over = self.is_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start over: empty grid, zero score, fresh piece.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.phase = Phase::Falling;
        self.last_event = None;
        let spawned = self.spawn();
        debug_assert!(spawned, "spawn on an empty grid must fit");
        info!("new game, first piece {}", self.active.kind.as_str());
    }

    /// Replace the active piece with a random new one at the spawn anchor.
    ///
    /// Returns false, and ends the game, when the new piece has no room.
    pub fn spawn(&mut self) -> bool {
        if self.is_over() {
            return false;
        }

        let kind = random_kind(&mut self.rng);
        self.active = Piece::spawn(kind);
        debug!(
            "spawn {} at ({}, {})",
            kind.as_str(),
            self.active.x,
            self.active.y
        );

        if !self.active.is_valid(&self.grid) {
            self.phase = Phase::Over;
            info!("game over, final score {}", self.score);
            return false;
        }
        true
    }

    /// Try to translate the active piece.
    ///
    /// A blocked downward move locks the piece and spawns the next one. A
    /// blocked sideways or upward move changes nothing. Returns whether the
    /// piece moved. Any delta is accepted; one that carries the anchor far
    /// outside the grid is simply invalid.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> bool {
        if self.is_over() {
            return false;
        }

        if let Some(moved) = self.active.translated(dx, dy) {
            if moved.is_valid(&self.grid) {
                self.active = moved;
                return true;
            }
        }

        if dy > 0 {
            self.land();
        }
        false
    }

    /// Try to rotate the active piece 90° clockwise in place (no wall kicks).
    pub fn rotate(&mut self) -> bool {
        if self.is_over() {
            return false;
        }

        let rotated = self.active.rotated();
        if rotated.is_valid(&self.grid) {
            self.active = rotated;
            return true;
        }
        false
    }

    /// Gravity step.
    pub fn tick(&mut self) -> bool {
        self.move_by(0, 1)
    }

    /// Player-requested one-row drop; same rules as gravity.
    pub fn soft_drop(&mut self) -> bool {
        self.move_by(0, 1)
    }

    /// Drop until the piece locks. Returns the rows fallen before locking.
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.move_by(0, 1) {
            rows += 1;
        }
        rows
    }

    /// Write the active piece's cells into the grid where it stands.
    ///
    /// A pure commit: no line clear, no spawn. Until the caller follows up
    /// with [`clear_lines`](Self::clear_lines) and [`spawn`](Self::spawn) the
    /// active piece overlaps its own locked cells. No-op once the game is over.
    pub fn lock_piece(&mut self) {
        if self.is_over() {
            return;
        }

        let piece = self.active;
        self.grid
            .lock_cells(&piece.orientation.minos(), piece.x, piece.y, piece.kind);
        debug!("lock {} at ({}, {})", piece.kind.as_str(), piece.x, piece.y);
    }

    /// The active piece has landed: lock it, clear rows, spawn the next one.
    fn land(&mut self) {
        if self.is_over() {
            return;
        }

        self.lock_piece();
        let lines = self.clear_lines();
        let spawned = self.spawn();

        self.last_event = Some(LockEvent {
            lines_cleared: lines as u32,
            points: line_clear_score(lines),
            game_over: !spawned,
        });
    }

    /// Remove every full row and score them. Returns the number cleared.
    ///
    /// Runs as part of every lock; after a lock no full row remains, so a
    /// direct call only matters for grids set up with [`GameState::with_grid`].
    pub fn clear_lines(&mut self) -> usize {
        let lines = self.grid.clear_full_rows();
        if lines > 0 {
            self.score = self.score.saturating_add(line_clear_score(lines));
            debug!("cleared {} lines, score {}", lines, self.score);
        }
        lines
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_by(-1, 0),
            GameAction::MoveRight => self.move_by(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => {
                if self.is_over() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }
}
