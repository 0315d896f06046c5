//! Game state module - owns one Wordle session
//!
//! This module ties together the grid, the evaluator, the key states and the
//! animations. Input is applied through [`GameState::apply_intent`]; time only
//! moves through [`GameState::tick`], once per rendered frame.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;

use crate::animation::{Flip, FlipStep, Pop, Shake};
use crate::types::{Intent, Outcome, Score, GAME_OVER_EXIT_SECS, MAX_GUESSES, WORD_LEN};
use crate::{evaluate, Dictionary, Grid, KeyStates, Stats, Word};

/// Effect of a single input intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentEffect {
    /// Nothing changed (input locked, row full/empty, game over, or quit).
    Ignored,
    /// A letter landed in the grid.
    Typed { row: usize, col: usize, letter: u8 },
    /// The last letter of the row was removed.
    Erased { row: usize, col: usize },
    /// Guess not in the dictionary; the row shakes.
    Rejected(Word),
    /// Guess scored; the reveal sequence started.
    Submitted(Word),
}

/// Something that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    TileRevealed { row: usize, col: usize },
    RowCompleted { row: usize, word: Word },
    Finished(Outcome),
    /// Stats were updated for the finished game and should be persisted.
    StatsRecorded(Stats),
}

/// Events of one tick. At most one of each kind can happen per tick.
pub type TickEvents = ArrayVec<GameEvent, 4>;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    dictionary: Dictionary,
    grid: Grid,
    row: usize,
    col: usize,
    keys: KeyStates,
    /// Scores of the submitted row, applied to `keys` when the flip completes.
    staged: [Score; WORD_LEN],
    shake: Shake,
    pop: Pop,
    flip: Flip,
    outcome: Outcome,
    finished_at: Option<Instant>,
    /// Ticks spent in a terminal state (drives end screen animation).
    end_ticks: u32,
    stats: Stats,
    stats_recorded: bool,
}

impl GameState {
    pub fn new(target: Word, dictionary: Dictionary, stats: Stats) -> Self {
        Self {
            target,
            dictionary,
            grid: Grid::new(),
            row: 0,
            col: 0,
            keys: KeyStates::new(),
            staged: [Score::NotInWord; WORD_LEN],
            shake: Shake::Idle,
            pop: Pop::Idle,
            flip: Flip::Idle,
            outcome: Outcome::Playing,
            finished_at: None,
            end_ticks: 0,
            stats,
            stats_recorded: false,
        }
    }

    pub fn target(&self) -> &Word {
        &self.target
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Row receiving input; equals the number of committed guesses.
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn keys(&self) -> &KeyStates {
        &self.keys
    }

    pub fn shake(&self) -> Shake {
        self.shake
    }

    pub fn pop(&self) -> Pop {
        self.pop
    }

    pub fn flip(&self) -> Flip {
        self.flip
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn finished_at(&self) -> Option<Instant> {
        self.finished_at
    }

    pub fn end_ticks(&self) -> u32 {
        self.end_ticks
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// True while a reveal sequence runs; every editing intent is a no-op then.
    pub fn input_locked(&self) -> bool {
        self.flip.is_active()
    }

    fn accepts_edits(&self) -> bool {
        !self.outcome.is_finished() && !self.input_locked() && self.row < MAX_GUESSES
    }

    /// Apply one input intent.
    ///
    /// `Quit` is not a game action; the owner of the state handles it.
    pub fn apply_intent(&mut self, intent: Intent) -> IntentEffect {
        match intent {
            Intent::Letter(letter) => self.type_letter(letter),
            Intent::Backspace => self.erase(),
            Intent::Submit => self.submit(),
            Intent::Quit => IntentEffect::Ignored,
        }
    }

    fn type_letter(&mut self, letter: u8) -> IntentEffect {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() || !self.accepts_edits() || self.col >= WORD_LEN {
            return IntentEffect::Ignored;
        }
        let (row, col) = (self.row, self.col);
        let Some(tile) = self.grid.get_mut(row, col) else {
            return IntentEffect::Ignored;
        };
        tile.letter = Some(letter);
        self.pop = Pop::start(col);
        self.col += 1;
        IntentEffect::Typed { row, col, letter }
    }

    fn erase(&mut self) -> IntentEffect {
        if !self.accepts_edits() || self.col == 0 {
            return IntentEffect::Ignored;
        }
        self.col -= 1;
        let (row, col) = (self.row, self.col);
        if let Some(tile) = self.grid.get_mut(row, col) {
            tile.letter = None;
        }
        IntentEffect::Erased { row, col }
    }

    /// Score the current row if it is full and the guess is acceptable.
    fn submit(&mut self) -> IntentEffect {
        if !self.accepts_edits() || self.col != WORD_LEN {
            return IntentEffect::Ignored;
        }
        let Some(guess) = self.grid.row_word(self.row) else {
            return IntentEffect::Ignored;
        };

        if !self.dictionary.accepts(&guess) {
            self.shake = Shake::start();
            return IntentEffect::Rejected(guess);
        }

        let scores = evaluate(&guess, &self.target);
        self.grid.score_row(self.row, &scores);
        self.staged = scores;
        self.flip = Flip::start();
        IntentEffect::Submitted(guess)
    }

    /// Advance all animations by one frame.
    ///
    /// `now` is recorded as the end instant when the game finishes during this
    /// tick; it is not used otherwise.
    pub fn tick(&mut self, now: Instant) -> TickEvents {
        let mut events = TickEvents::new();

        self.shake.tick();
        self.pop.tick();

        match self.flip.tick() {
            FlipStep::Reveal(col) => {
                if let Some(tile) = self.grid.get_mut(self.row, col) {
                    tile.revealed = true;
                }
                events.push(GameEvent::TileRevealed { row: self.row, col });
            }
            FlipStep::Done => {
                if let Some(word) = self.commit_row(now) {
                    events.push(GameEvent::RowCompleted {
                        row: self.row - 1,
                        word,
                    });
                }
                if self.outcome.is_finished() {
                    events.push(GameEvent::Finished(self.outcome));
                }
            }
            FlipStep::Running | FlipStep::Idle => {}
        }

        if self.outcome.is_finished() {
            if !self.stats_recorded {
                self.stats.record(self.outcome == Outcome::Won);
                self.stats_recorded = true;
                events.push(GameEvent::StatsRecorded(self.stats));
            }
            self.end_ticks = self.end_ticks.wrapping_add(1);
        }

        events
    }

    /// Apply staged key states, settle the outcome and move to the next row.
    fn commit_row(&mut self, now: Instant) -> Option<Word> {
        let word = self.grid.row_word(self.row);
        if let Some(word) = word {
            for (letter, score) in word.letters().iter().zip(self.staged.iter()) {
                self.keys.promote(*letter, *score);
            }
            if word == self.target {
                self.outcome = Outcome::Won;
            } else if self.row == MAX_GUESSES - 1 {
                self.outcome = Outcome::Lost;
            }
        }
        if self.outcome.is_finished() {
            self.finished_at = Some(now);
        }
        self.row += 1;
        self.col = 0;
        word
    }

    /// True once the end screen has been shown for the full timeout.
    pub fn should_exit(&self, now: Instant) -> bool {
        self.finished_at.is_some_and(|end| {
            now.saturating_duration_since(end) >= Duration::from_secs(GAME_OVER_EXIT_SECS)
        })
    }
}
