use std::time::Instant;

use wordle_led::core::{Dictionary, GameState, Stats, Word};
use wordle_led::display::game_view::{GREEN, KEY_DEFAULT, OUTLINE, RED, YELLOW};
use wordle_led::display::{encode_diff_into, encode_full_into, CellFrame, FontSet, GameView, PixelBuffer};
use wordle_led::types::{Intent, FLIP_FRAMES};

fn game(target: &str) -> GameState {
    GameState::new(Word::parse(target).unwrap(), Dictionary::new(), Stats::default())
}

fn guess(g: &mut GameState, w: &str) {
    for b in w.bytes() {
        g.apply_intent(Intent::Letter(b));
    }
    g.apply_intent(Intent::Submit);
    let now = Instant::now();
    for _ in 0..FLIP_FRAMES {
        g.tick(now);
    }
}

fn render(g: &GameState) -> PixelBuffer {
    let mut fb = PixelBuffer::new(64, 128);
    GameView::default().render(g, &FontSet::builtin(), &mut fb);
    fb
}

#[test]
fn playing_screen_has_grid_and_keyboard() {
    let fb = render(&game("PIZZA"));
    // 30 outlined tiles, each with a 36 pixel border.
    assert_eq!(fb.count(OUTLINE), 30 * 36);
    // 26 keys, each 5x5, minus the pixels covered by letters.
    let keys = fb.count(KEY_DEFAULT);
    assert!(keys > 0 && keys < 26 * 25);
}

#[test]
fn scored_row_replaces_outlines() {
    let mut g = game("PIZZA");
    guess(&mut g, "ZESTY");
    let fb = render(&g);
    assert_eq!(fb.count(OUTLINE), 25 * 36);
    // Z is present elsewhere: its tile and key are yellow.
    assert!(fb.count(YELLOW) > 0);
}

#[test]
fn end_screens_differ() {
    let mut won = game("PIZZA");
    guess(&mut won, "PIZZA");
    let won_fb = render(&won);
    assert!(won_fb.count(GREEN) > 0);
    assert_eq!(won_fb.count(RED), 0);

    let mut lost = game("PIZZA");
    for _ in 0..6 {
        guess(&mut lost, "CLUNK");
    }
    let lost_fb = render(&lost);
    assert!(lost_fb.count(RED) > 0);
    assert_eq!(lost_fb.count(GREEN), 0);
}

#[test]
fn terminal_diff_is_empty_for_identical_frames() {
    let fb = render(&game("PIZZA"));
    let mut a = CellFrame::new(0, 0);
    a.fill_from(&fb);
    let b = a.clone();
    assert_eq!((a.width(), a.height()), (64, 64));

    let mut full = Vec::new();
    encode_full_into(&a, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&a, &b, &mut diff).unwrap();
    assert!(diff.len() < full.len() / 100);
}

#[test]
fn victory_screen_survives_huge_stats() {
    for stats in [
        Stats {
            played: 50_000_000,
            wins: 50_000_000,
            current_streak: 3,
            max_streak: 3,
        },
        Stats {
            played: u32::MAX,
            ..Stats::default()
        },
    ] {
        let mut g = GameState::new(Word::parse("PIZZA").unwrap(), Dictionary::new(), stats);
        guess(&mut g, "PIZZA");
        let fb = render(&g);
        assert!(fb.count(GREEN) > 0);
        assert_eq!(g.stats().played, stats.played.saturating_add(1));
    }
}
