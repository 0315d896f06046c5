//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, rendering, input mapping, persistence).
//!
//! # Grid Dimensions
//!
//! - **Word length**: 5 letters (columns 0-4)
//! - **Guesses**: 6 rows (indexed 0-5)
//! - **Alphabet**: 26 letters, `A`-`Z`
//!
//! # Timing Constants
//!
//! All animation timing is expressed in ticks of the fixed-rate main loop:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 15 | Main loop sleep between frames |
//! | `SHAKE_FRAMES` | 30 | Row shake after a rejected guess |
//! | `POP_FRAMES` | 8 | Tile pop after a typed letter |
//! | `FLIP_FRAMES_PER_TILE` | 20 | Reveal window of a single tile |
//! | `FLIP_FRAMES` | 100 | Whole row reveal (5 tiles) |
//! | `GAME_OVER_EXIT_SECS` | 120 | Wall clock before auto-shutdown after the game ends |
//!
//! # Examples
//!
//! ```
//! use wordle_led_types::{Intent, Score, FLIP_FRAMES, WORD_LEN};
//!
//! assert!(Score::Correct > Score::Present);
//! assert!(Some(Score::NotInWord) > None);
//! assert_eq!(Intent::from_char('q'), Some(Intent::Letter(b'Q')));
//! assert_eq!(FLIP_FRAMES, 100);
//! assert_eq!(WORD_LEN, 5);
//! ```

/// Letters per word (grid columns).
pub const WORD_LEN: usize = 5;

/// Guesses per game (grid rows).
pub const MAX_GUESSES: usize = 6;

/// Letters in the alphabet (on-screen keyboard keys).
pub const ALPHABET_LEN: usize = 26;

/// Fixed main loop interval in milliseconds.
pub const TICK_MS: u64 = 15;

/// Duration of the row shake after a rejected guess.
pub const SHAKE_FRAMES: u32 = 30;

/// Horizontal shake offsets, indexed by `(ticks_left / 2) % 4`.
pub const SHAKE_OFFSETS: [i32; 4] = [0, 4, 0, -4];

/// Duration of the tile pop after a letter is typed.
pub const POP_FRAMES: u32 = 8;

/// Peak growth of a popping tile in pixels.
pub const POP_MAX_GROWTH: f32 = 3.5;

/// Reveal window of a single tile.
pub const FLIP_FRAMES_PER_TILE: u32 = 20;

/// Whole reveal sequence for a row.
pub const FLIP_FRAMES: u32 = FLIP_FRAMES_PER_TILE * WORD_LEN as u32;

/// Frame (counting down inside a tile window) at which the tile shows its color.
pub const FLIP_REVEAL_FRAME: u32 = FLIP_FRAMES_PER_TILE / 2;

/// Seconds spent on the end screen before the process shuts itself down.
pub const GAME_OVER_EXIT_SECS: u64 = 120;

/// Target used when no answer file can be read.
pub const DEFAULT_TARGET: &str = "PIZZA";

/// Capacity of the input intent queue.
pub const INTENT_QUEUE_CAPACITY: usize = 64;


/// Classification of a single guessed letter.
///
/// Ordered by priority so the best score a letter has ever received can be
/// tracked with a plain `max`:
/// - **NotInWord**: letter is absent (or all its copies are already consumed)
/// - **Present**: letter is in the target at another position
/// - **Correct**: letter is in the target at this position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Score {
    NotInWord,
    Present,
    Correct,
}

impl Score {
    pub fn as_str(&self) -> &'static str {
        match self {
            Score::NotInWord => "absent",
            Score::Present => "present",
            Score::Correct => "correct",
        }
    }
}

/// Best score a keyboard key has received; `None` until the letter is used.
pub type KeyState = Option<Score>;

/// Input intents delivered from the input reader to the game owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Type an uppercase ASCII letter into the next free tile
    Letter(u8),
    /// Remove the last typed letter
    Backspace,
    /// Submit the current row for scoring
    Submit,
    /// Leave the game
    Quit,
}

impl Intent {
    /// Map a raw terminal character to an intent.
    ///
    /// Letters are folded to uppercase. Control characters follow what a
    /// terminal sends in raw mode: ETX (Ctrl-C) and ESC quit, DEL and BS delete,
    /// CR and LF submit.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\u{3}' | '\u{1b}' => Some(Intent::Quit),
            '\u{7f}' | '\u{8}' => Some(Intent::Backspace),
            '\r' | '\n' => Some(Intent::Submit),
            c if c.is_ascii_alphabetic() => Some(Intent::Letter(c.to_ascii_uppercase() as u8)),
            _ => None,
        }
    }
}

/// Lifecycle of the single game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

impl Outcome {
    /// True once the game reached a terminal state.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Playing => "playing",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}
