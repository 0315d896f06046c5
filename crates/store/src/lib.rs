//! File persistence for the word list, the answer and the stats counters.
//!
//! Every loader returns an [`io::Result`] so the caller can decide how to fall
//! back; none of these files are required for the game to run.
//!
//! # Formats
//!
//! - **Word list**: whitespace separated tokens, case-insensitive
//! - **Answer**: first whitespace separated token, case-insensitive
//! - **Stats**: `played wins current_streak max_streak` on one line

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use wordle_led_core::{Dictionary, Stats, Word};

pub use wordle_led_core as core;

/// Load a dictionary from a word list file.
///
/// Tokens that are not five ASCII letters are skipped.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(parse_dictionary(&content))
}

pub fn parse_dictionary(content: &str) -> Dictionary {
    content
        .split_whitespace()
        .filter_map(|token| Word::parse(token).ok())
        .collect()
}

/// Load the answer from the first token of a file.
///
/// A missing token or one that is not a five-letter word is reported as
/// [`io::ErrorKind::InvalidData`].
pub fn load_target<P: AsRef<Path>>(path: P) -> io::Result<Word> {
    let content = fs::read_to_string(path)?;
    parse_target(&content)
}

pub fn parse_target(content: &str) -> io::Result<Word> {
    let token = content
        .split_whitespace()
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "answer file is empty"))?;
    Word::parse(token).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Read counters in order, stopping at the first token that is not a number.
///
/// Fields that were not read stay at zero.
pub fn parse_stats(content: &str) -> Stats {
    let mut values = [0u32; 4];
    for (slot, token) in values.iter_mut().zip(content.split_whitespace()) {
        match token.parse() {
            Ok(v) => *slot = v,
            Err(_) => break,
        }
    }
    let [played, wins, current_streak, max_streak] = values;
    Stats {
        played,
        wins,
        current_streak,
        max_streak,
    }
}

pub fn format_stats(stats: &Stats) -> String {
    format!(
        "{} {} {} {}",
        stats.played, stats.wins, stats.current_streak, stats.max_streak
    )
}

/// Stats file at a fixed path.
#[derive(Debug, Clone)]
pub struct StatsFile {
    path: PathBuf,
}

impl StatsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> io::Result<Stats> {
        fs::read_to_string(&self.path).map(|s| parse_stats(&s))
    }

    pub fn save(&self, stats: &Stats) -> io::Result<()> {
        fs::write(&self.path, format_stats(stats))
    }

    /// Load the counters, creating the file with zeros when it does not exist.
    ///
    /// Returns the stats alongside whether the file was created.
    pub fn load_or_create(&self) -> io::Result<(Stats, bool)> {
        match self.load() {
            Ok(stats) => Ok((stats, false)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let stats = Stats::default();
                self.save(&stats)?;
                Ok((stats, true))
            }
            Err(e) => Err(e),
        }
    }
}
