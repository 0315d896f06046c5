//! The 6x5 letter grid.

use crate::types::{Score, MAX_GUESSES, WORD_LEN};
use crate::Word;

/// One letter cell.
///
/// `revealed` is separate from `letter`: a typed tile shows its letter at once,
/// while its score color only shows after the reveal animation passes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<u8>,
    pub score: Score,
    pub revealed: bool,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            letter: None,
            score: Score::NotInWord,
            revealed: false,
        }
    }
}

/// Fixed grid of tiles, one row per guess.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: [[Tile; WORD_LEN]; MAX_GUESSES],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    pub fn row(&self, row: usize) -> Option<&[Tile; WORD_LEN]> {
        self.rows.get(row)
    }

    /// The word typed into `row`, if every tile holds a letter.
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let tiles = self.rows.get(row)?;
        let mut letters = [0u8; WORD_LEN];
        for (slot, tile) in letters.iter_mut().zip(tiles.iter()) {
            *slot = tile.letter?;
        }
        Word::from_letters(letters)
    }

    /// Store scores for a submitted row without revealing them.
    pub fn score_row(&mut self, row: usize, scores: &[Score; WORD_LEN]) {
        if let Some(tiles) = self.rows.get_mut(row) {
            for (tile, score) in tiles.iter_mut().zip(scores.iter()) {
                tile.score = *score;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_word_needs_full_row() {
        let mut grid = Grid::new();
        for (i, b) in b"CRAN".iter().enumerate() {
            grid.get_mut(0, i).unwrap().letter = Some(*b);
        }
        assert_eq!(grid.row_word(0), None);
        grid.get_mut(0, 4).unwrap().letter = Some(b'E');
        assert_eq!(grid.row_word(0), Word::parse("CRANE").ok());
    }

    #[test]
    fn out_of_range_is_none() {
        let grid = Grid::new();
        assert!(grid.get(MAX_GUESSES, 0).is_none());
        assert!(grid.get(0, WORD_LEN).is_none());
        assert!(grid.row_word(MAX_GUESSES).is_none());
    }
}
