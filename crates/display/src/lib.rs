//! Panel rendering module.
//!
//! The game view draws into an in-memory [`PixelBuffer`] through the
//! [`Canvas`] seam; a [`Display`] backend then shows the finished frame.
//! Two backends exist:
//!
//! - [`TerminalRenderer`]: a terminal simulator, two pixels per cell
//! - `MatrixDisplay`: the RGB LED panel (feature `hardware`)
//!
//! Fonts are bitmap fonts, either loaded from BDF files or the built-in 3x5
//! set, see [`FontSet`].

pub mod backend;
pub mod fb;
pub mod font;
pub mod game_view;
pub mod matrix;
pub mod renderer;

pub use wordle_led_core as core;
pub use wordle_led_types as types;

pub use backend::Display;
pub use fb::{Canvas, PixelBuffer, Rgb};
pub use font::{BitmapFont, FontSet, Glyph};
pub use game_view::GameView;
pub use matrix::MatrixConfig;
#[cfg(feature = "hardware")]
pub use matrix::MatrixDisplay;
pub use renderer::{encode_diff_into, encode_full_into, CellFrame, HalfCell, TerminalRenderer};
