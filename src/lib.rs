//! Wordle on an RGB LED matrix (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them under short names and adds the pieces that tie them into a
//! program: configuration, logging and the main loop.

pub mod app;
pub mod config;
pub mod logging;

pub use wordle_led_core as core;
pub use wordle_led_display as display;
pub use wordle_led_input as input;
pub use wordle_led_store as store;
pub use wordle_led_types as types;

pub use app::{load_session, App};
pub use config::{Config, DisplayMode};
