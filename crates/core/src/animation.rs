//! Frame-driven animation states.
//!
//! Each animation is advanced once per main loop tick. Only [`Flip`] affects
//! game logic: it locks input while running and its completion commits the row.

use std::f32::consts::PI;

use crate::types::{
    FLIP_FRAMES_PER_TILE, FLIP_REVEAL_FRAME, POP_FRAMES, POP_MAX_GROWTH, SHAKE_FRAMES,
    SHAKE_OFFSETS, WORD_LEN,
};

/// Horizontal wobble of the current row after a rejected guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shake {
    #[default]
    Idle,
    Shaking {
        ticks_left: u32,
    },
}

impl Shake {
    pub fn start() -> Self {
        Shake::Shaking {
            ticks_left: SHAKE_FRAMES,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Shake::Shaking { .. })
    }

    pub fn tick(&mut self) {
        if let Shake::Shaking { ticks_left } = self {
            *ticks_left -= 1;
            if *ticks_left == 0 {
                *self = Shake::Idle;
            }
        }
    }

    /// Pixel offset applied to the current row.
    pub fn offset(&self) -> i32 {
        match self {
            Shake::Idle => 0,
            Shake::Shaking { ticks_left } => {
                SHAKE_OFFSETS[((ticks_left / 2) % SHAKE_OFFSETS.len() as u32) as usize]
            }
        }
    }
}

/// Short scale-up of a tile that just received a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pop {
    #[default]
    Idle,
    Popping {
        col: usize,
        ticks_left: u32,
    },
}

impl Pop {
    pub fn start(col: usize) -> Self {
        Pop::Popping {
            col,
            ticks_left: POP_FRAMES,
        }
    }

    pub fn tick(&mut self) {
        if let Pop::Popping { ticks_left, .. } = self {
            *ticks_left -= 1;
            if *ticks_left == 0 {
                *self = Pop::Idle;
            }
        }
    }

    /// Column of the popping tile and its extra size in pixels.
    ///
    /// Growth follows half a sine period: 0 at the start, peaking mid-way,
    /// back to 0 when the pop ends.
    pub fn growth(&self) -> Option<(usize, i32)> {
        match *self {
            Pop::Idle => None,
            Pop::Popping { col, ticks_left } => {
                let progress = 1.0 - ticks_left as f32 / POP_FRAMES as f32;
                Some((col, ((progress * PI).sin() * POP_MAX_GROWTH) as i32))
            }
        }
    }
}

/// Row reveal sequence.
///
/// `frame` counts down inside the window of `tile`. A sequence starts at
/// `{ tile: 0, frame: FLIP_FRAMES_PER_TILE }`; when a window runs out the next
/// tile starts at `FLIP_FRAMES_PER_TILE - 1`. Frames remaining in the whole
/// sequence are `(4 - tile) * 20 + frame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flip {
    #[default]
    Idle,
    Flipping {
        tile: usize,
        frame: u32,
    },
}

/// What a flip tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipStep {
    Idle,
    Running,
    /// The tile at this column turned face up.
    Reveal(usize),
    /// The last tile finished; the row can be committed.
    Done,
}

impl Flip {
    pub fn start() -> Self {
        Flip::Flipping {
            tile: 0,
            frame: FLIP_FRAMES_PER_TILE,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Flip::Flipping { .. })
    }

    pub fn tick(&mut self) -> FlipStep {
        let Flip::Flipping { tile, frame } = self else {
            return FlipStep::Idle;
        };

        if *frame > 0 {
            *frame -= 1;
        } else {
            *tile += 1;
            *frame = FLIP_FRAMES_PER_TILE - 1;
        }

        if *tile == WORD_LEN - 1 && *frame == 0 {
            *self = Flip::Idle;
            return FlipStep::Done;
        }
        if *frame == FLIP_REVEAL_FRAME {
            return FlipStep::Reveal(*tile);
        }
        FlipStep::Running
    }

    /// Frames left before the sequence completes.
    pub fn remaining(&self) -> u32 {
        match *self {
            Flip::Idle => 0,
            Flip::Flipping { tile, frame } => {
                (WORD_LEN - 1 - tile) as u32 * FLIP_FRAMES_PER_TILE + frame
            }
        }
    }

    /// Column being flipped and its drawn height out of `full` pixels.
    ///
    /// The tile collapses to zero height at the reveal frame, then expands again.
    pub fn tile_height(&self, full: i32) -> Option<(usize, i32)> {
        match *self {
            Flip::Idle => None,
            Flip::Flipping { tile, frame } => {
                let half = FLIP_REVEAL_FRAME as i32;
                let h = (half - frame as i32).abs() * full / half;
                Some((tile, h))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FLIP_FRAMES;

    #[test]
    fn shake_runs_for_fixed_frames() {
        let mut s = Shake::start();
        for _ in 0..SHAKE_FRAMES - 1 {
            s.tick();
            assert!(s.is_active());
        }
        s.tick();
        assert_eq!(s, Shake::Idle);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn shake_offsets_cycle_every_two_frames() {
        assert_eq!(Shake::Shaking { ticks_left: 30 }.offset(), -4);
        assert_eq!(Shake::Shaking { ticks_left: 29 }.offset(), 0);
        assert_eq!(Shake::Shaking { ticks_left: 27 }.offset(), 4);
        assert_eq!(Shake::Shaking { ticks_left: 26 }.offset(), 4);
        assert_eq!(Shake::Shaking { ticks_left: 24 }.offset(), 0);
        assert_eq!(Shake::Shaking { ticks_left: 22 }.offset(), -4);
        assert_eq!(Shake::Shaking { ticks_left: 2 }.offset(), 4);
        assert_eq!(Shake::Shaking { ticks_left: 1 }.offset(), 0);
    }

    #[test]
    fn pop_growth_follows_sine() {
        let mut p = Pop::start(2);
        assert_eq!(p.growth(), Some((2, 0)));
        let mut seen = Vec::new();
        while let Some((col, g)) = p.growth() {
            assert_eq!(col, 2);
            seen.push(g);
            p.tick();
        }
        // 8, 7, .., 1 frames left
        assert_eq!(seen, vec![0, 1, 2, 3, 3, 3, 2, 1]);
    }

    #[test]
    fn flip_reveals_each_tile_at_window_midpoint() {
        let mut f = Flip::start();
        assert_eq!(f.remaining(), FLIP_FRAMES);

        let mut reveals = Vec::new();
        let mut done_at = None;
        for t in 1..=FLIP_FRAMES {
            match f.tick() {
                FlipStep::Reveal(tile) => reveals.push((tile, t)),
                FlipStep::Done => done_at = Some(t),
                FlipStep::Running => {}
                FlipStep::Idle => panic!("flip ended early at tick {t}"),
            }
            assert_eq!(f.remaining(), FLIP_FRAMES - t);
        }
        assert_eq!(reveals, vec![(0, 10), (1, 30), (2, 50), (3, 70), (4, 90)]);
        assert_eq!(done_at, Some(FLIP_FRAMES));
        assert_eq!(f, Flip::Idle);
        assert_eq!(f.tick(), FlipStep::Idle);
    }

    #[test]
    fn flip_tile_collapses_then_expands() {
        let mut f = Flip::start();
        assert_eq!(f.tile_height(10), Some((0, 10)));
        f.tick();
        assert_eq!(f.tile_height(10), Some((0, 9)));
        for _ in 0..9 {
            f.tick();
        }
        assert_eq!(f.tile_height(10), Some((0, 0)));
        for _ in 0..10 {
            f.tick();
        }
        assert_eq!(f.tile_height(10), Some((0, 10)));
        f.tick();
        assert_eq!(f.tile_height(10), Some((1, 9)));
    }
}
