//! TerminalRenderer: shows the panel in a terminal.
//!
//! Every terminal cell carries two panel pixels stacked vertically, drawn as an
//! upper half block with the top pixel as foreground and the bottom pixel as
//! background. Frames are diffed against the previous one and only changed
//! runs of cells are rewritten.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};
use tracing::debug;

use crate::backend::Display;
use crate::fb::{Canvas, PixelBuffer, Rgb};

const HALF_BLOCK: char = '\u{2580}';

/// One terminal cell: two vertically stacked pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HalfCell {
    pub top: Rgb,
    pub bottom: Rgb,
}

/// A panel frame folded into terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellFrame {
    width: u16,
    height: u16,
    cells: Vec<HalfCell>,
}

impl CellFrame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![HalfCell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<HalfCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Refill from a pixel buffer, resizing to `width x ceil(height / 2)`.
    ///
    /// An odd last pixel row pairs with black.
    pub fn fill_from(&mut self, pixels: &PixelBuffer) {
        let width = pixels.width().max(0) as u16;
        let height = ((pixels.height().max(0) + 1) / 2) as u16;
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, HalfCell::default());

        for y in 0..height {
            for x in 0..width {
                let px = x as i32;
                let py = y as i32 * 2;
                let cell = HalfCell {
                    top: pixels.get(px, py).unwrap_or_default(),
                    bottom: pixels.get(px, py + 1).unwrap_or_default(),
                };
                self.cells[y as usize * width as usize + x as usize] = cell;
            }
        }
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<CellFrame>,
    next: CellFrame,
    buf: Vec<u8>,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            next: CellFrame::new(0, 0),
            buf: Vec::with_capacity(64 * 1024),
            entered: false,
        }
    }

    /// Switch to the alternate screen. Raw mode is owned by the input reader.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf().context("failed to enter alternate screen")?;
        self.entered = true;
        debug!("entered alternate screen");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        debug!("left alternate screen");
        Ok(())
    }

    /// Draw a frame, diffing against the previous one.
    ///
    /// The folded frame is swapped into internal state so the next call can
    /// reuse the old allocation.
    pub fn draw(&mut self, frame: &PixelBuffer) -> Result<()> {
        self.next.fill_from(frame);

        self.buf.clear();
        match self.last.take() {
            Some(prev) if prev.width() == self.next.width() && prev.height() == self.next.height() => {
                encode_diff_into(&prev, &self.next, &mut self.buf)?;
                self.last = Some(std::mem::replace(&mut self.next, prev));
            }
            prev => {
                debug!(
                    cols = self.next.width(),
                    rows = self.next.height(),
                    "full redraw"
                );
                encode_full_into(&self.next, &mut self.buf)?;
                let spare = prev.unwrap_or_else(|| CellFrame::new(0, 0));
                self.last = Some(std::mem::replace(&mut self.next, spare));
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TerminalRenderer {
    fn present(&mut self, frame: &PixelBuffer) -> Result<()> {
        self.draw(frame).context("failed to draw to terminal")
    }

    fn shutdown(&mut self) -> Result<()> {
        if let Some((w, h)) = self.last.as_ref().map(|f| (f.width(), f.height() * 2)) {
            self.draw(&PixelBuffer::new(w, h))?;
        }
        self.exit()
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(frame: &CellFrame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<HalfCell> = None;
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..frame.width() {
            let cell = frame.get(x, y).unwrap_or_default();
            put_cell(out, cell, &mut current)?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the changed runs between `prev` and `next` into `out`.
pub fn encode_diff_into(prev: &CellFrame, next: &CellFrame, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<HalfCell> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            put_cell(out, cell, &mut current)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn put_cell(out: &mut Vec<u8>, cell: HalfCell, current: &mut Option<HalfCell>) -> Result<()> {
    if *current != Some(cell) {
        out.queue(SetForegroundColor(rgb_to_color(cell.top)))?;
        out.queue(SetBackgroundColor(rgb_to_color(cell.bottom)))?;
        *current = Some(cell);
    }
    out.queue(Print(HALF_BLOCK))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &CellFrame,
    next: &CellFrame,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
