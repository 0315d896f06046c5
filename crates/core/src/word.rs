//! Five-letter uppercase words.

use std::fmt;

use crate::types::WORD_LEN;

/// A guess or target word: exactly five uppercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LEN]);

/// Why a token could not become a [`Word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordError::InvalidLength(len) => {
                write!(f, "word must be exactly {WORD_LEN} letters, got {len}")
            }
            WordError::InvalidCharacter(c) => write!(f, "word contains non-letter {c:?}"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Parse a token, folding it to uppercase.
    ///
    /// ```
    /// use wordle_led_core::Word;
    ///
    /// assert_eq!(Word::parse("crane").unwrap().to_string(), "CRANE");
    /// assert!(Word::parse("cranes").is_err());
    /// assert!(Word::parse("cr4ne").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, WordError> {
        let len = s.chars().count();
        if len != WORD_LEN {
            return Err(WordError::InvalidLength(len));
        }
        let mut letters = [0u8; WORD_LEN];
        for (slot, c) in letters.iter_mut().zip(s.chars()) {
            if !c.is_ascii_alphabetic() {
                return Err(WordError::InvalidCharacter(c));
            }
            *slot = c.to_ascii_uppercase() as u8;
        }
        Ok(Self(letters))
    }

    /// Build a word from letters already known to be uppercase ASCII.
    pub fn from_letters(letters: [u8; WORD_LEN]) -> Option<Self> {
        letters
            .iter()
            .all(u8::is_ascii_uppercase)
            .then_some(Self(letters))
    }

    #[inline]
    pub fn letters(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    #[inline]
    pub fn letter(&self, i: usize) -> u8 {
        self.0[i]
    }
}

impl Default for Word {
    /// The fallback answer used when no answer file can be read.
    fn default() -> Self {
        Self(*b"PIZZA")
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
