//! Guess scoring with Wordle's duplicate-letter rules.

use crate::types::{Score, WORD_LEN};
use crate::Word;

/// Score `guess` against `target`.
///
/// 1. Exact matches are marked [`Score::Correct`] and consume their target slot.
/// 2. Every other position takes the leftmost unconsumed target slot holding the
///    same letter ([`Score::Present`]), or is [`Score::NotInWord`].
///
/// Exact matches always win over elsewhere-matches, so a letter guessed twice
/// against a single copy in the target is marked once.
///
/// ```
/// use wordle_led_core::{evaluate, Word};
/// use wordle_led_types::Score::*;
///
/// let target = Word::parse("ABBEY").unwrap();
/// let guess = Word::parse("BBLEB").unwrap();
/// assert_eq!(
///     evaluate(&guess, &target),
///     [Present, Correct, NotInWord, Correct, NotInWord]
/// );
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> [Score; WORD_LEN] {
    let mut scores = [Score::NotInWord; WORD_LEN];
    let mut consumed = [false; WORD_LEN];
    let mut exact = [false; WORD_LEN];

    for i in 0..WORD_LEN {
        if guess.letter(i) == target.letter(i) {
            scores[i] = Score::Correct;
            consumed[i] = true;
            exact[i] = true;
        }
    }

    for i in 0..WORD_LEN {
        if exact[i] {
            continue;
        }
        let slot = (0..WORD_LEN).find(|&j| !consumed[j] && target.letter(j) == guess.letter(i));
        if let Some(j) = slot {
            consumed[j] = true;
            scores[i] = Score::Present;
        }
    }

    scores
}

/// True when every position is [`Score::Correct`].
pub fn is_solved(scores: &[Score; WORD_LEN]) -> bool {
    scores.iter().all(|s| *s == Score::Correct)
}
