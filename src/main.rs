//! Wordle runner (default binary).
//!
//! Startup order: display, fonts, data files, signal watcher, keyboard.
//! A display, font or terminal raw-mode failure exits with status 1, as does
//! a display error while running. Data files and signal handling degrade
//! with a logged warning, and so do failed shutdown steps.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use wordle_led::config::{Config, DisplayMode};
use wordle_led::display::{Display, FontSet, TerminalRenderer};
use wordle_led::input::{InputReader, ShutdownToken, SignalWatcher};
use wordle_led::types::INTENT_QUEUE_CAPACITY;
use wordle_led::{load_session, logging, App};

fn main() -> ExitCode {
    let config = Config::from_env();
    if let Some(path) = &config.log_path {
        if let Err(e) = logging::init(path, &config.log_filter) {
            eprintln!("wordle-led: logging disabled: {e:#}");
        }
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "fatal error");
            eprintln!("wordle-led: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    info!(display = ?config.display, "starting");
    let display = open_display(config)?;
    let fonts = load_fonts(config)?;
    let (game, stats_file) = load_session(config);

    let shutdown = ShutdownToken::new();
    let _signals = match SignalWatcher::start(shutdown.clone()) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            warn!(error = %e, "signal handling unavailable");
            None
        }
    };
    let (reader, intents) = InputReader::start(INTENT_QUEUE_CAPACITY, shutdown.clone())
        .context("failed to set up the terminal for keyboard input")?;

    let (width, height) = config.panel_size();
    let mut app = App::new(game, fonts, display, intents, shutdown)
        .with_panel_size(width, height)
        .with_stats_file(stats_file)
        .with_reader(reader);

    let result = app.run();
    app.finish(result)
}

fn open_display(config: &Config) -> Result<Box<dyn Display>> {
    match config.display {
        DisplayMode::Terminal => {
            let mut term = TerminalRenderer::new();
            term.enter()?;
            Ok(Box::new(term))
        }
        DisplayMode::Matrix => open_matrix(config),
    }
}

#[cfg(feature = "hardware")]
fn open_matrix(config: &Config) -> Result<Box<dyn Display>> {
    let matrix = wordle_led::display::MatrixDisplay::open(&config.matrix)?;
    Ok(Box::new(matrix))
}

#[cfg(not(feature = "hardware"))]
fn open_matrix(_config: &Config) -> Result<Box<dyn Display>> {
    anyhow::bail!("matrix display needs a build with the `hardware` feature")
}

fn load_fonts(config: &Config) -> Result<FontSet> {
    match &config.font_dir {
        Some(dir) => FontSet::load_dir(dir)
            .with_context(|| format!("failed to load fonts from {}", dir.display())),
        None => Ok(FontSet::builtin()),
    }
}
