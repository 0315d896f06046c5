//! Guess validity dictionary.

use rustc_hash::FxHashSet;

use crate::Word;

/// Set of acceptable guesses.
///
/// An empty dictionary accepts every well-formed word; validation is only
/// enforced once a word list has been loaded.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Validity gate for a submitted guess.
    pub fn accepts(&self, word: &Word) -> bool {
        self.words.is_empty() || self.words.contains(word)
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}
