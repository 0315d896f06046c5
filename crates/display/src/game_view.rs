//! GameView: maps `core::GameState` onto the panel.
//!
//! This module is pure (no I/O). It draws into any [`Canvas`] and can be
//! unit-tested against a [`PixelBuffer`](crate::fb::PixelBuffer).

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::GameState;
use crate::fb::{Canvas, Rgb};
use crate::font::{BitmapFont, FontSet};
use crate::types::{KeyState, Outcome, Score, MAX_GUESSES, WORD_LEN};

pub const GREEN: Rgb = Rgb::new(106, 170, 100);
pub const YELLOW: Rgb = Rgb::new(201, 180, 88);
pub const NOT_IN_WORD: Rgb = Rgb::new(20, 20, 20);
pub const OUTLINE: Rgb = Rgb::new(58, 58, 60);
pub const KEY_DEFAULT: Rgb = Rgb::new(70, 70, 70);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const BLACK: Rgb = Rgb::BLACK;
pub const RED: Rgb = Rgb::new(200, 50, 50);
pub const GOLD: Rgb = Rgb::new(255, 215, 0);

/// Side of a grid tile in pixels.
pub const TILE_SIZE: i32 = 10;
pub const TILE_PITCH_X: i32 = 12;
pub const TILE_PITCH_Y: i32 = 11;
/// Width of a grid row: five tiles, four gaps.
pub const GRID_WIDTH: i32 = (WORD_LEN as i32 - 1) * TILE_PITCH_X + TILE_SIZE;

const KEY_SIZE: i32 = 5;
const KEY_PITCH: i32 = 6;
const KEY_ROW_PITCH: i32 = 10;
const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

pub fn score_color(score: Score) -> Rgb {
    match score {
        Score::NotInWord => NOT_IN_WORD,
        Score::Present => YELLOW,
        Score::Correct => GREEN,
    }
}

pub fn key_color(state: KeyState) -> Rgb {
    match state {
        None => KEY_DEFAULT,
        Some(Score::NotInWord) => BLACK,
        Some(Score::Present) => YELLOW,
        Some(Score::Correct) => GREEN,
    }
}

/// Victory rank by number of rows used.
pub fn rank_text(rows_used: usize) -> &'static str {
    match rows_used {
        1 => "GENIUS!",
        2 => "MAGNIFICENT",
        3 => "IMPRESSIVE",
        4 => "SPLENDID",
        5 => "GREAT",
        _ => "PHEW!",
    }
}

/// Panel renderer for the three screens: playing, victory and defeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Baseline of the logo on the playing screen.
    pub logo_baseline: i32,
    pub grid_top: i32,
    pub keyboard_top: i32,
    /// Baseline of the end screen title before bouncing.
    pub title_baseline: i32,
    pub defeat_word_baseline: i32,
    pub defeat_grid_top: i32,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            logo_baseline: 13,
            grid_top: 16,
            keyboard_top: 95,
            title_baseline: 22,
            defeat_word_baseline: 36,
            defeat_grid_top: 45,
        }
    }
}

impl GameView {
    /// Clear the canvas and draw the screen for the current outcome.
    pub fn render<C: Canvas + ?Sized>(&self, state: &GameState, fonts: &FontSet, canvas: &mut C) {
        canvas.clear();
        match state.outcome() {
            Outcome::Playing => self.render_playing(state, fonts, canvas),
            Outcome::Won => self.render_victory(state, fonts, canvas),
            Outcome::Lost => self.render_defeat(state, fonts, canvas),
        }
    }

    fn render_playing<C: Canvas + ?Sized>(&self, state: &GameState, fonts: &FontSet, canvas: &mut C) {
        draw_centered(canvas, &fonts.logo, self.logo_baseline, WHITE, "Wordle");
        let x = (canvas.width() - GRID_WIDTH) / 2;
        render_grid(canvas, state, &fonts.game, x, self.grid_top, MAX_GUESSES);
        self.render_keyboard(state, fonts, canvas);
    }

    fn render_keyboard<C: Canvas + ?Sized>(&self, state: &GameState, fonts: &FontSet, canvas: &mut C) {
        let mut label = [0u8; 4];
        for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
            let len = row.len() as i32;
            let row_width = len * KEY_SIZE + (len - 1);
            let mut x = (canvas.width() - row_width) / 2;
            let y = self.keyboard_top + i as i32 * KEY_ROW_PITCH;
            for letter in row.bytes() {
                let color = key_color(state.keys().get(letter));
                canvas.fill_rect(x, y, KEY_SIZE, KEY_SIZE, color);
                let text = (letter as char).encode_utf8(&mut label);
                canvas.draw_text(&fonts.keyboard, x + 1, y + 3, WHITE, text);
                x += KEY_PITCH;
            }
        }
    }

    fn render_victory<C: Canvas + ?Sized>(&self, state: &GameState, fonts: &FontSet, canvas: &mut C) {
        let bounce = ((state.end_ticks() as f64 * 0.1).sin() * 3.0) as i32;
        draw_centered(
            canvas,
            &fonts.victory,
            self.title_baseline + bounce,
            GREEN,
            "VICTORY",
        );

        let rows_used = state.row().min(MAX_GUESSES);
        let grid_y = canvas.height() - rows_used as i32 * TILE_PITCH_Y - 5;
        let space = grid_y - 30;
        let content_y = 30 + space / 2 - 8;
        let line_spacing = if space > 40 { 10 } else { 7 };

        let stats = state.stats();
        // Longest line is "Streak: " plus ten digits.
        let mut streak = ArrayString::<24>::new();
        let mut win_pct = ArrayString::<24>::new();
        let _ = write!(streak, "Streak: {}", stats.current_streak);
        let _ = write!(win_pct, "Win%: {}", stats.win_percentage());
        draw_centered(canvas, &fonts.game, content_y, GOLD, rank_text(rows_used));
        draw_centered(canvas, &fonts.game, content_y + line_spacing, WHITE, &streak);
        draw_centered(
            canvas,
            &fonts.game,
            content_y + line_spacing * 2,
            WHITE,
            &win_pct,
        );

        let x = (canvas.width() - GRID_WIDTH) / 2;
        render_grid(canvas, state, &fonts.game, x, grid_y, rows_used);
    }

    fn render_defeat<C: Canvas + ?Sized>(&self, state: &GameState, fonts: &FontSet, canvas: &mut C) {
        draw_centered(canvas, &fonts.defeat, self.title_baseline, RED, "DEFEAT");

        let blink = if state.end_ticks() % 20 < 10 { YELLOW } else { WHITE };
        let mut target = ArrayString::<WORD_LEN>::new();
        let _ = write!(target, "{}", state.target());
        draw_centered(canvas, &fonts.game, self.defeat_word_baseline, blink, &target);

        let x = (canvas.width() - GRID_WIDTH) / 2;
        render_grid(canvas, state, &fonts.game, x, self.defeat_grid_top, MAX_GUESSES);
    }
}

fn draw_centered<C: Canvas + ?Sized>(canvas: &mut C, font: &BitmapFont, y: i32, color: Rgb, text: &str) {
    let x = (canvas.width() - font.text_width(text)) / 2;
    canvas.draw_text(font, x, y, color, text);
}

/// Draw the first `rows` grid rows with their top-left tile at `(x0, y0)`.
///
/// The current row carries the shake offset, the flipping tile is squashed
/// vertically and the popping tile is drawn as an enlarged outline.
fn render_grid<C: Canvas + ?Sized>(
    canvas: &mut C,
    state: &GameState,
    font: &BitmapFont,
    x0: i32,
    y0: i32,
    rows: usize,
) {
    let current = state.row();
    let shake = state.shake().offset();
    let flip = state.flip().tile_height(TILE_SIZE);
    let pop = state.pop().growth();
    let mut label = [0u8; 4];

    for r in 0..rows {
        let Some(tiles) = state.grid().row(r) else {
            break;
        };
        for (c, tile) in tiles.iter().enumerate() {
            let on_current = r == current;
            let mut x = x0 + c as i32 * TILE_PITCH_X;
            if on_current {
                x += shake;
            }
            let y = y0 + r as i32 * TILE_PITCH_Y;

            let flipping = flip
                .filter(|(col, _)| on_current && *col == c)
                .map(|(_, h)| h);
            let growth = pop
                .filter(|(col, _)| on_current && *col == c)
                .map(|(_, g)| g);

            let h = flipping.unwrap_or(TILE_SIZE);
            let y_off = (TILE_SIZE - h) / 2;

            if let Some(growth) = growth {
                let size = TILE_SIZE + growth;
                let off = (size - TILE_SIZE) / 2;
                canvas.outline(x - off, y - off, size, OUTLINE);
            } else if !tile.revealed && flipping.is_none() {
                canvas.outline(x, y + y_off, TILE_SIZE, OUTLINE);
            } else {
                let color = if tile.revealed {
                    score_color(tile.score)
                } else {
                    KEY_DEFAULT
                };
                canvas.fill_rect(x, y + y_off, TILE_SIZE, h, color);
            }

            if let Some(letter) = tile.letter {
                if h > 4 {
                    let text = (letter as char).encode_utf8(&mut label);
                    let text_y = y + 8 - y_off;
                    canvas.draw_text(font, x + 2, text_y, WHITE, text);
                    canvas.draw_text(font, x + 3, text_y, WHITE, text);
                }
            }
        }
    }
}
