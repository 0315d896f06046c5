//! The game loop.
//!
//! [`App`] is the single owner of the [`GameState`]. Each step it drains the
//! intent queue, advances the game by one tick, renders a frame and hands it
//! to the display. Everything else (the input thread, the signal watcher)
//! talks to it through the intent queue or the shared [`ShutdownToken`].

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{Dictionary, GameEvent, GameState, IntentEffect, Word};
use crate::display::{Display, FontSet, GameView, PixelBuffer};
use crate::input::{InputReader, IntentQueue, ShutdownToken};
use crate::store::{self, StatsFile};
use crate::types::{Intent, TICK_MS};

/// Build a session from the configured files.
///
/// Every file is optional: a missing word list accepts every guess, a missing
/// answer plays `PIZZA`, and a missing stats file is created with zeros.
pub fn load_session(config: &Config) -> (GameState, StatsFile) {
    let dictionary = match store::load_dictionary(&config.words_path) {
        Ok(dict) if dict.is_empty() => {
            warn!(path = %config.words_path.display(), "word list has no valid words; accepting every guess");
            dict
        }
        Ok(dict) => {
            info!(words = dict.len(), "word list loaded");
            dict
        }
        Err(e) => {
            warn!(path = %config.words_path.display(), error = %e, "word list unavailable; accepting every guess");
            Dictionary::new()
        }
    };

    let target = match store::load_target(&config.answer_path) {
        Ok(word) => word,
        Err(e) => {
            let fallback = Word::default();
            warn!(path = %config.answer_path.display(), error = %e, %fallback, "answer unavailable");
            fallback
        }
    };

    let stats_file = StatsFile::new(&config.stats_path);
    let stats = match stats_file.load_or_create() {
        Ok((stats, created)) => {
            if created {
                info!(path = %stats_file.path().display(), "created stats file");
            }
            stats
        }
        Err(e) => {
            warn!(path = %stats_file.path().display(), error = %e, "stats unavailable; starting from zero");
            Default::default()
        }
    };

    (GameState::new(target, dictionary, stats), stats_file)
}

pub struct App<D: Display> {
    game: GameState,
    view: GameView,
    fonts: FontSet,
    frame: PixelBuffer,
    display: D,
    intents: IntentQueue,
    shutdown: ShutdownToken,
    reader: Option<InputReader>,
    stats_file: Option<StatsFile>,
    /// Recorded stats not yet written to disk.
    stats_dirty: bool,
    closed: bool,
}

impl<D: Display> App<D> {
    pub fn new(
        game: GameState,
        fonts: FontSet,
        display: D,
        intents: IntentQueue,
        shutdown: ShutdownToken,
    ) -> Self {
        Self {
            game,
            view: GameView::default(),
            fonts,
            frame: PixelBuffer::new(64, 128),
            display,
            intents,
            shutdown,
            reader: None,
            stats_file: None,
            stats_dirty: false,
            closed: false,
        }
    }

    pub fn with_panel_size(mut self, width: u16, height: u16) -> Self {
        self.frame.resize(width, height);
        self
    }

    pub fn with_stats_file(mut self, file: StatsFile) -> Self {
        self.stats_file = Some(file);
        self
    }

    /// Hand over the keyboard reader so shutdown can stop it.
    pub fn with_reader(mut self, reader: InputReader) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn stats_dirty(&self) -> bool {
        self.stats_dirty
    }

    /// Run until the shutdown token is cancelled.
    pub fn run(&mut self) -> Result<()> {
        let tick = Duration::from_millis(TICK_MS);
        info!(answer = %self.game.target(), "game started");
        while !self.shutdown.is_cancelled() {
            self.step(Instant::now())?;
            thread::sleep(tick);
        }
        Ok(())
    }

    /// One frame: input, tick, render, present.
    pub fn step(&mut self, now: Instant) -> Result<()> {
        for intent in self.intents.drain() {
            if intent == Intent::Quit {
                info!("quit requested");
                self.shutdown.cancel();
                continue;
            }
            match self.game.apply_intent(intent) {
                IntentEffect::Rejected(word) => info!(%word, "guess not in word list"),
                IntentEffect::Submitted(word) => info!(%word, row = self.game.row(), "guess submitted"),
                IntentEffect::Typed { row, col, letter } => {
                    debug!(row, col, letter = %(letter as char), "typed")
                }
                IntentEffect::Erased { row, col } => debug!(row, col, "erased"),
                IntentEffect::Ignored => {}
            }
        }

        for event in self.game.tick(now) {
            self.on_event(event);
        }

        if !self.shutdown.is_cancelled() && self.game.should_exit(now) {
            info!("end screen timed out");
            self.shutdown.cancel();
        }

        self.view.render(&self.game, &self.fonts, &mut self.frame);
        self.display.present(&self.frame)
    }

    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::TileRevealed { row, col } => debug!(row, col, "tile revealed"),
            GameEvent::RowCompleted { row, word } => info!(row, %word, "row completed"),
            GameEvent::Finished(outcome) => info!(
                outcome = outcome.as_str(),
                rows = self.game.row(),
                answer = %self.game.target(),
                "game over"
            ),
            GameEvent::StatsRecorded(stats) => {
                debug!(?stats, "stats recorded");
                self.stats_dirty = true;
                self.flush_stats();
            }
        }
    }

    fn flush_stats(&mut self) {
        if !self.stats_dirty {
            return;
        }
        let Some(file) = &self.stats_file else {
            return;
        };
        match file.save(self.game.stats()) {
            Ok(()) => self.stats_dirty = false,
            Err(e) => warn!(path = %file.path().display(), error = %e, "failed to save stats"),
        }
    }

    /// Blank the display, stop the input reader and flush stats. Runs once.
    ///
    /// Every step is attempted; the first error is returned.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.shutdown.cancel();

        let display = self.display.shutdown();
        let reader = match self.reader.as_mut() {
            Some(reader) => reader.stop(),
            None => Ok(()),
        };
        self.flush_stats();
        if self.stats_dirty {
            warn!("stats were not saved");
        }
        info!("shutdown complete");

        display.and(reader)
    }

    /// Shut down once [`run`](Self::run) has ended, given its result.
    ///
    /// Only the loop's own error is returned. A failed shutdown step is
    /// logged; the game already ended normally by then.
    pub fn finish(&mut self, run: Result<()>) -> Result<()> {
        if let Err(e) = self.shutdown() {
            warn!(error = %format!("{e:#}"), "shutdown step failed");
        }
        run
    }
}
