use modern_tetris::core::{GameState, ScriptedRandom};
use modern_tetris::term::{AnchorY, GameView, Rgb, Viewport};
use modern_tetris::types::{GameAction, PieceKind};

fn all_text(fb: &modern_tetris::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::seeded(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // grid pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::seeded(1).snapshot();
    snap.grid[19][0] = Some(PieceKind::I);
    snap.active = None;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0, y0).unwrap().style.fg, Rgb::new(0, 255, 255));
    assert_ne!(fb.get(x0 + 2, y0).unwrap().ch, '█');
}

#[test]
fn term_view_draws_active_piece_in_its_color() {
    let game = GameState::with_random(ScriptedRandom::kinds(&[PieceKind::T]));
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));

    // T spawns at (4,0): cells (4,0) (5,0) (6,0) (5,1).
    for (x, y) in [(4u16, 0u16), (5, 0), (6, 0), (5, 1)] {
        let cell = fb.get(1 + x * 2, 1 + y).unwrap();
        assert_eq!(cell.ch, '█', "({x}, {y})");
        assert_eq!(cell.style.fg, Rgb::new(128, 0, 128));
    }
    assert_ne!(fb.get(1 + 4 * 2, 2).unwrap().ch, '█');
}

#[test]
fn term_view_draws_score_and_keys_when_wide_enough() {
    let mut snap = GameState::seeded(1).snapshot();
    snap.score = 1200;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));
    let all = all_text(&fb);
    assert!(all.contains("SCORE"));
    assert!(all.contains("1200"));
    assert!(all.contains("KEYS"));
    assert!(all.contains("hard drop"));
    assert!(!all.contains("GAME OVER"));
}

#[test]
fn term_view_skips_panel_on_narrow_viewport() {
    let snap = GameState::seeded(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 22));
    assert!(!all_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut game = GameState::with_random(ScriptedRandom::kinds(&[PieceKind::O]));
    while !game.is_over() {
        game.apply_action(GameAction::HardDrop);
    }
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(60, 24));
    assert!(all_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::seeded(1).snapshot();

    // Frame is 22 rows tall (20 + border).
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameState::seeded(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
