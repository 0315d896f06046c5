//! Runtime configuration from environment variables.
//!
//! | variable | default |
//! |----------|---------|
//! | `WORDLE_WORDS_PATH` | `python/valid_guesses.txt` |
//! | `WORDLE_ANSWER_PATH` | `python/answer.txt` |
//! | `WORDLE_STATS_PATH` | `stats.txt` |
//! | `WORDLE_FONT_DIR` | built-in font in terminal mode, `fonts` in matrix mode |
//! | `WORDLE_DISPLAY` | `terminal` |
//! | `WORDLE_PANEL_WIDTH` / `WORDLE_PANEL_HEIGHT` | `64` / `128` |
//! | `WORDLE_MATRIX_ROWS` / `_COLS` / `_CHAIN` / `_PARALLEL` / `_MAPPING` | `64` / `64` / `1` / `2` / `regular` |
//! | `WORDLE_LOG_PATH` | unset (no logging) |
//! | `WORDLE_LOG` | `info` |
//!
//! Unparseable values fall back to the default.

use std::path::PathBuf;
use std::str::FromStr;

use crate::display::MatrixConfig;

/// Where frames go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Half-block simulator in the current terminal.
    #[default]
    Terminal,
    /// RGB LED panel; needs the `hardware` feature.
    Matrix,
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" | "term" => Ok(DisplayMode::Terminal),
            "matrix" | "led" => Ok(DisplayMode::Matrix),
            other => Err(format!("unknown display mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub words_path: PathBuf,
    pub answer_path: PathBuf,
    pub stats_path: PathBuf,
    /// BDF font directory. `None` selects the built-in font.
    pub font_dir: Option<PathBuf>,
    pub display: DisplayMode,
    pub panel_width: u16,
    pub panel_height: u16,
    pub matrix: MatrixConfig,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_path: PathBuf::from("python/valid_guesses.txt"),
            answer_path: PathBuf::from("python/answer.txt"),
            stats_path: PathBuf::from("stats.txt"),
            font_dir: None,
            display: DisplayMode::Terminal,
            panel_width: 64,
            panel_height: 128,
            matrix: MatrixConfig::default(),
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the process environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let var = |key: &str| text(&lookup, key);
        let display = parsed(&lookup, "WORDLE_DISPLAY").unwrap_or(defaults.display);
        let font_dir = var("WORDLE_FONT_DIR").map(PathBuf::from).or(match display {
            DisplayMode::Terminal => None,
            DisplayMode::Matrix => Some(PathBuf::from("fonts")),
        });

        let matrix = MatrixConfig {
            rows: parsed(&lookup, "WORDLE_MATRIX_ROWS").unwrap_or(defaults.matrix.rows),
            cols: parsed(&lookup, "WORDLE_MATRIX_COLS").unwrap_or(defaults.matrix.cols),
            chain_length: parsed(&lookup, "WORDLE_MATRIX_CHAIN")
                .unwrap_or(defaults.matrix.chain_length),
            parallel: parsed(&lookup, "WORDLE_MATRIX_PARALLEL")
                .unwrap_or(defaults.matrix.parallel),
            hardware_mapping: var("WORDLE_MATRIX_MAPPING")
                .unwrap_or(defaults.matrix.hardware_mapping),
        };

        Self {
            words_path: var("WORDLE_WORDS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.words_path),
            answer_path: var("WORDLE_ANSWER_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.answer_path),
            stats_path: var("WORDLE_STATS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.stats_path),
            font_dir,
            display,
            panel_width: parsed(&lookup, "WORDLE_PANEL_WIDTH")
                .filter(|w: &u16| *w > 0)
                .unwrap_or(defaults.panel_width),
            panel_height: parsed(&lookup, "WORDLE_PANEL_HEIGHT")
                .filter(|h: &u16| *h > 0)
                .unwrap_or(defaults.panel_height),
            matrix,
            log_path: var("WORDLE_LOG_PATH").map(PathBuf::from),
            log_filter: var("WORDLE_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

impl Config {
    /// Size of the frame the game view draws, `(width, height)`.
    ///
    /// The matrix backend uses its wiring; the terminal uses the panel size.
    pub fn panel_size(&self) -> (u16, u16) {
        match self.display {
            DisplayMode::Terminal => (self.panel_width, self.panel_height),
            DisplayMode::Matrix => {
                let (w, h) = self.matrix.canvas_size();
                (
                    u16::try_from(w).unwrap_or(u16::MAX),
                    u16::try_from(h).unwrap_or(u16::MAX),
                )
            }
        }
    }
}

fn text<F: Fn(&str) -> Option<String>>(lookup: &F, key: &str) -> Option<String> {
    lookup(key)
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn parsed<T: FromStr, F: Fn(&str) -> Option<String>>(lookup: &F, key: &str) -> Option<T> {
    text(lookup, key).and_then(|s| s.parse().ok())
}
