//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and animation
//! timing. It has **no dependencies** on rendering, terminals, or files, making it:
//!
//! - **Deterministic**: the same intents and ticks always produce the same state
//! - **Testable**: every rule can be driven tick by tick from unit tests
//! - **Portable**: runs headless, in the terminal simulator, or on the LED panel
//!
//! # Module Structure
//!
//! - [`word`]: validated five-letter words
//! - [`evaluate`]: guess scoring with duplicate-letter consumption
//! - [`dictionary`]: guess validity gate (empty = accept everything)
//! - [`grid`]: 6x5 tiles with letter, score and reveal flag
//! - [`keyboard`]: monotonic best score per letter
//! - [`animation`]: shake, pop and flip state machines
//! - [`stats`]: lifetime counters
//! - [`game_state`]: the session tying everything together
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use wordle_led_core::{Dictionary, GameState, Stats, Word};
//! use wordle_led_types::{Intent, Outcome, FLIP_FRAMES};
//!
//! let mut game = GameState::new(Word::parse("PIZZA").unwrap(), Dictionary::new(), Stats::default());
//! for b in *b"PIZZA" {
//!     game.apply_intent(Intent::Letter(b));
//! }
//! game.apply_intent(Intent::Submit);
//!
//! let now = Instant::now();
//! for _ in 0..FLIP_FRAMES {
//!     game.tick(now);
//! }
//! assert_eq!(game.outcome(), Outcome::Won);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) exactly once per
//! rendered frame. A row reveal takes 100 ticks; input is locked for all of them.

pub mod animation;
pub mod dictionary;
pub mod evaluate;
pub mod game_state;
pub mod grid;
pub mod keyboard;
pub mod stats;
pub mod word;

pub use wordle_led_types as types;

// Re-export commonly used types for convenience
pub use animation::{Flip, FlipStep, Pop, Shake};
pub use dictionary::Dictionary;
pub use evaluate::{evaluate, is_solved};
pub use game_state::{GameEvent, GameState, IntentEffect, TickEvents};
pub use grid::{Grid, Tile};
pub use keyboard::KeyStates;
pub use stats::Stats;
pub use word::{Word, WordError};
