//! Pixel framebuffer and the drawing surface seam.

use crate::font::BitmapFont;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Pixel-addressable drawing surface.
///
/// This is everything the game view needs from a display: clear, plot a pixel,
/// and draw text with a bitmap font. Out-of-bounds pixels are ignored.
pub trait Canvas {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    fn clear(&mut self);
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb);

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Square outline of side `size` with its top-left corner at `(x, y)`.
    fn outline(&mut self, x: i32, y: i32, size: i32, color: Rgb) {
        for i in 0..size {
            self.set_pixel(x + i, y, color);
            self.set_pixel(x + i, y + size - 1, color);
            self.set_pixel(x, y + i, color);
            self.set_pixel(x + size - 1, y + i, color);
        }
    }

    /// Draw `text` with its baseline at `y`. Returns the advance width.
    fn draw_text(&mut self, font: &BitmapFont, x: i32, y: i32, color: Rgb, text: &str) -> i32 {
        font.draw_text(self, x, y, color, text)
    }
}

/// In-memory frame of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u16,
    height: u16,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; len],
        }
    }

    /// Resize the buffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.pixels.resize(len, Rgb::BLACK);
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Number of pixels with exactly this color.
    pub fn count(&self, color: Rgb) -> usize {
        self.pixels.iter().filter(|p| **p == color).count()
    }
}

impl Canvas for PixelBuffer {
    fn width(&self) -> i32 {
        self.width as i32
    }

    fn height(&self) -> i32 {
        self.height as i32
    }

    fn clear(&mut self) {
        self.fill(Rgb::BLACK);
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }
}
