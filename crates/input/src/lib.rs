//! Terminal input module (game-facing).
//!
//! This module is independent of rendering. It maps `crossterm` key events
//! into [`crate::types::Intent`]s and delivers them over a bounded queue from a
//! reader thread to the single owner of the game state.
//!
//! Shutdown is cooperative: the quit key, OS signals and the game-over timeout
//! all cancel the same [`ShutdownToken`].

pub mod map;
pub mod reader;
pub mod shutdown;
pub mod signal;

pub use wordle_led_types as types;

pub use map::{map_key_event, should_quit};
pub use reader::{intent_channel, InputReader, IntentQueue, IntentSender};
pub use shutdown::ShutdownToken;
pub use signal::SignalWatcher;
