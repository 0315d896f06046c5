//! On-screen keyboard state.

use crate::types::{KeyState, Score, ALPHABET_LEN};

/// Best score per letter across all committed guesses.
///
/// Entries only ever move up: `None < NotInWord < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStates {
    keys: [KeyState; ALPHABET_LEN],
}

impl Default for KeyStates {
    fn default() -> Self {
        Self {
            keys: [None; ALPHABET_LEN],
        }
    }
}

impl KeyStates {
    pub fn new() -> Self {
        Self::default()
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_uppercase()
            .then(|| (letter - b'A') as usize)
    }

    pub fn get(&self, letter: u8) -> KeyState {
        Self::index(letter).and_then(|i| self.keys[i])
    }

    /// Raise `letter` to `score` if that is an upgrade. Returns true on change.
    pub fn promote(&mut self, letter: u8, score: Score) -> bool {
        let Some(i) = Self::index(letter) else {
            return false;
        };
        if Some(score) > self.keys[i] {
            self.keys[i] = Some(score);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promote_is_monotonic() {
        let mut keys = KeyStates::new();
        assert_eq!(keys.get(b'A'), None);
        assert!(keys.promote(b'A', Score::Present));
        assert!(keys.promote(b'A', Score::Correct));
        assert!(!keys.promote(b'A', Score::NotInWord));
        assert!(!keys.promote(b'A', Score::Present));
        assert_eq!(keys.get(b'A'), Some(Score::Correct));
    }

    #[test]
    fn ignores_non_letters() {
        let mut keys = KeyStates::new();
        assert!(!keys.promote(b'a', Score::Correct));
        assert!(!keys.promote(b'[', Score::Correct));
        assert_eq!(keys.get(b'a'), None);
    }
}
