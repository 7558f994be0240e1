//! Terminal Tetris runner (default binary).
//!
//! crossterm for input, the framebuffer `GameView` for drawing, and a fixed
//! gravity interval driving the core.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};

use modern_tetris::core::{EntropyRandom, GameSnapshot, GameState, RandomSource, SimpleRng};
use modern_tetris::input::{allowed_when_over, handle_key_event, should_quit};
use modern_tetris::logging::init_log;
use modern_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use modern_tetris::GameConfig;

type Game = GameState<Box<dyn RandomSource>>;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if init_log(&config)? {
        info!("config: {:?}", config);
    }

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term, &config));

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!("terminal restore failed: {e}");
    }
    result
}

fn new_game(config: &GameConfig) -> Game {
    let rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(SimpleRng::new(seed)),
        None => Box::new(EntropyRandom::new()),
    };
    GameState::with_random(rng)
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = new_game(config);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let gravity = config.gravity_interval();
    let mut last_gravity = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until the next gravity step.
        let timeout = gravity
            .checked_sub(last_gravity.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit, score {}", game.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if snap.playable() || allowed_when_over(action) {
                            debug!("action {}", action.as_str());
                            game.apply_action(action);
                            dirty = true;
                        }
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if last_gravity.elapsed() >= gravity {
            last_gravity = Instant::now();
            if !game.is_over() {
                game.tick();
                dirty = true;
            }
        }

        if let Some(ev) = game.take_last_event() {
            if ev.lines_cleared > 0 {
                info!("cleared {} lines (+{})", ev.lines_cleared, ev.points);
            }
        }
    }
}
