//! Bitmap fonts.
//!
//! Glyphs come either from BDF files (the format the LED panel fonts ship in)
//! or from a small built-in 3x5 font used by the terminal simulator. Text is
//! positioned by its baseline, like the panel library does.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use rustc_hash::FxHashMap;

use crate::fb::{Canvas, Rgb};

/// A single glyph bitmap.
///
/// Each row is left-aligned in a `u64`: pixel `x` is bit `63 - x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub advance: i32,
    pub width: i32,
    pub height: i32,
    pub x_offset: i32,
    pub y_offset: i32,
    rows: Vec<u64>,
}

impl Glyph {
    #[inline]
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height || x >= 64 {
            return false;
        }
        self.rows[y as usize] & (1u64 << (63 - x)) != 0
    }
}

#[derive(Debug, Clone)]
pub struct BitmapFont {
    glyphs: FxHashMap<char, Glyph>,
    height: i32,
    ascent: i32,
}

impl BitmapFont {
    pub fn load_bdf<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let src = fs::read_to_string(path)
            .with_context(|| format!("failed to read font {}", path.display()))?;
        Self::parse_bdf(&src).with_context(|| format!("failed to parse font {}", path.display()))
    }

    /// Parse the subset of BDF 2.1 needed for rendering.
    pub fn parse_bdf(src: &str) -> Result<Self> {
        let mut lines = src.lines().map(str::trim);
        match lines.next() {
            Some(l) if l.starts_with("STARTFONT") => {}
            _ => bail!("missing STARTFONT header"),
        }

        let mut glyphs = FxHashMap::default();
        let mut height = 0;
        let mut ascent = None;

        while let Some(line) = lines.next() {
            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("FONTBOUNDINGBOX") => {
                    let bbx = parse_ints::<4>(parts).context("bad FONTBOUNDINGBOX")?;
                    height = bbx[1];
                }
                Some("FONT_ASCENT") => {
                    ascent = Some(parse_ints::<1>(parts).context("bad FONT_ASCENT")?[0]);
                }
                Some("STARTCHAR") => {
                    if let Some((c, glyph)) = parse_char(&mut lines)? {
                        glyphs.insert(c, glyph);
                    }
                }
                Some("ENDFONT") => break,
                _ => {}
            }
        }

        if glyphs.is_empty() {
            bail!("font has no glyphs");
        }
        Ok(Self {
            glyphs,
            height,
            ascent: ascent.unwrap_or(height),
        })
    }

    /// Built-in 3x5 font with a 4 pixel advance.
    ///
    /// Covers `A`-`Z`, digits and a little punctuation; lowercase text falls back
    /// to the uppercase glyphs.
    pub fn builtin() -> Self {
        let glyphs = BUILTIN_GLYPHS
            .iter()
            .map(|(c, rows)| {
                let rows = rows
                    .iter()
                    .map(|row| {
                        row.bytes()
                            .enumerate()
                            .filter(|(_, b)| *b == b'#')
                            .fold(0u64, |acc, (x, _)| acc | (1u64 << (63 - x)))
                    })
                    .collect();
                let glyph = Glyph {
                    advance: 4,
                    width: 3,
                    height: 5,
                    x_offset: 0,
                    y_offset: 0,
                    rows,
                };
                (*c, glyph)
            })
            .collect();
        Self {
            glyphs,
            height: 5,
            ascent: 5,
        }
    }

    /// Copy of this font with every pixel blown up to `factor` x `factor`.
    pub fn scaled(&self, factor: i32) -> Self {
        let factor = factor.max(1);
        let glyphs = self
            .glyphs
            .iter()
            .map(|(c, g)| {
                let mut rows = Vec::with_capacity((g.height * factor) as usize);
                for y in 0..g.height {
                    let mut row = 0u64;
                    for x in 0..g.width {
                        if g.is_set(x, y) {
                            for k in 0..factor {
                                let sx = x * factor + k;
                                if sx < 64 {
                                    row |= 1u64 << (63 - sx);
                                }
                            }
                        }
                    }
                    for _ in 0..factor {
                        rows.push(row);
                    }
                }
                let glyph = Glyph {
                    advance: g.advance * factor,
                    width: (g.width * factor).min(64),
                    height: g.height * factor,
                    x_offset: g.x_offset * factor,
                    y_offset: g.y_offset * factor,
                    rows,
                };
                (*c, glyph)
            })
            .collect();
        Self {
            glyphs,
            height: self.height * factor,
            ascent: self.ascent * factor,
        }
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn ascent(&self) -> i32 {
        self.ascent
    }

    /// Glyph for `c`, falling back to its ASCII uppercase form.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs
            .get(&c)
            .or_else(|| self.glyphs.get(&c.to_ascii_uppercase()))
    }

    pub fn char_width(&self, c: char) -> i32 {
        self.glyph(c).map_or(0, |g| g.advance)
    }

    pub fn text_width(&self, text: &str) -> i32 {
        text.chars().map(|c| self.char_width(c)).sum()
    }

    /// Draw `text` with its baseline at `y`. Returns the advance width.
    pub fn draw_text<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        x: i32,
        y: i32,
        color: Rgb,
        text: &str,
    ) -> i32 {
        let mut pen = x;
        for c in text.chars() {
            let Some(g) = self.glyph(c) else {
                continue;
            };
            let top = y - g.height - g.y_offset;
            for gy in 0..g.height {
                for gx in 0..g.width {
                    if g.is_set(gx, gy) {
                        canvas.set_pixel(pen + g.x_offset + gx, top + gy, color);
                    }
                }
            }
            pen += g.advance;
        }
        pen - x
    }
}

fn parse_ints<'a, const N: usize>(mut parts: impl Iterator<Item = &'a str>) -> Result<[i32; N]> {
    let mut out = [0i32; N];
    for slot in out.iter_mut() {
        let token = parts.next().ok_or_else(|| anyhow!("expected {N} values"))?;
        *slot = token
            .parse()
            .with_context(|| format!("not a number: {token:?}"))?;
    }
    Ok(out)
}

/// Parse one `STARTCHAR` .. `ENDCHAR` block. Glyphs without a usable encoding
/// are skipped.
fn parse_char<'a>(lines: &mut impl Iterator<Item = &'a str>) -> Result<Option<(char, Glyph)>> {
    let mut encoding: Option<char> = None;
    let mut advance = 0;
    let mut bbx = [0i32; 4];
    let mut rows = Vec::new();

    while let Some(line) = lines.next() {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("ENCODING") => {
                let code = parse_ints::<1>(parts).context("bad ENCODING")?[0];
                encoding = u32::try_from(code).ok().and_then(char::from_u32);
            }
            Some("DWIDTH") => {
                advance = parse_ints::<1>(parts).context("bad DWIDTH")?[0];
            }
            Some("BBX") => {
                bbx = parse_ints::<4>(parts).context("bad BBX")?;
            }
            Some("BITMAP") => {
                for _ in 0..bbx[1] {
                    let hex = lines
                        .next()
                        .ok_or_else(|| anyhow!("truncated BITMAP"))?
                        .trim();
                    let bits = (hex.len() * 4).min(64) as u32;
                    let value = u64::from_str_radix(hex, 16)
                        .with_context(|| format!("bad bitmap row {hex:?}"))?;
                    rows.push(if bits == 0 { 0 } else { value << (64 - bits) });
                }
            }
            Some("ENDCHAR") => {
                let [width, height, x_offset, y_offset] = bbx;
                if rows.len() != height.max(0) as usize {
                    bail!("glyph bitmap has {} rows, BBX says {height}", rows.len());
                }
                return Ok(encoding.map(|c| {
                    (
                        c,
                        Glyph {
                            advance,
                            width: width.min(64),
                            height,
                            x_offset,
                            y_offset,
                            rows,
                        },
                    )
                }));
            }
            _ => {}
        }
    }
    bail!("unterminated STARTCHAR block")
}

/// Every font the game view draws with.
#[derive(Debug, Clone)]
pub struct FontSet {
    /// Tile letters and end screen text.
    pub game: BitmapFont,
    pub logo: BitmapFont,
    pub victory: BitmapFont,
    pub defeat: BitmapFont,
    /// On-screen keyboard labels.
    pub keyboard: BitmapFont,
}

impl FontSet {
    pub fn builtin() -> Self {
        let small = BitmapFont::builtin();
        let large = small.scaled(2);
        Self {
            game: small.clone(),
            logo: large.clone(),
            victory: large.clone(),
            defeat: large,
            keyboard: small,
        }
    }

    /// Load the panel fonts from a directory. Any missing font is an error.
    pub fn load_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            game: BitmapFont::load_bdf(dir.join("5x6.bdf"))?,
            logo: BitmapFont::load_bdf(dir.join("Karnak.bdf"))?,
            victory: BitmapFont::load_bdf(dir.join("victory.bdf"))?,
            defeat: BitmapFont::load_bdf(dir.join("defeat.bdf"))?,
            keyboard: BitmapFont::load_bdf(dir.join("3x3pixel.bdf"))?,
        })
    }
}

#[rustfmt::skip]
const BUILTIN_GLYPHS: &[(char, [&str; 5])] = &[
    ('A', [".#.", "#.#", "###", "#.#", "#.#"]),
    ('B', ["##.", "#.#", "##.", "#.#", "##."]),
    ('C', [".##", "#..", "#..", "#..", ".##"]),
    ('D', ["##.", "#.#", "#.#", "#.#", "##."]),
    ('E', ["###", "#..", "##.", "#..", "###"]),
    ('F', ["###", "#..", "##.", "#..", "#.."]),
    ('G', [".##", "#..", "#.#", "#.#", ".##"]),
    ('H', ["#.#", "#.#", "###", "#.#", "#.#"]),
    ('I', ["###", ".#.", ".#.", ".#.", "###"]),
    ('J', ["..#", "..#", "..#", "#.#", ".#."]),
    ('K', ["#.#", "#.#", "##.", "#.#", "#.#"]),
    ('L', ["#..", "#..", "#..", "#..", "###"]),
    ('M', ["#.#", "###", "###", "#.#", "#.#"]),
    ('N', ["##.", "#.#", "#.#", "#.#", "#.#"]),
    ('O', [".#.", "#.#", "#.#", "#.#", ".#."]),
    ('P', ["##.", "#.#", "##.", "#..", "#.."]),
    ('Q', [".#.", "#.#", "#.#", "##.", ".##"]),
    ('R', ["##.", "#.#", "##.", "#.#", "#.#"]),
    ('S', [".##", "#..", ".#.", "..#", "##."]),
    ('T', ["###", ".#.", ".#.", ".#.", ".#."]),
    ('U', ["#.#", "#.#", "#.#", "#.#", "###"]),
    ('V', ["#.#", "#.#", "#.#", "#.#", ".#."]),
    ('W', ["#.#", "#.#", "###", "###", "#.#"]),
    ('X', ["#.#", "#.#", ".#.", "#.#", "#.#"]),
    ('Y', ["#.#", "#.#", ".#.", ".#.", ".#."]),
    ('Z', ["###", "..#", ".#.", "#..", "###"]),
    ('0', ["###", "#.#", "#.#", "#.#", "###"]),
    ('1', [".#.", "##.", ".#.", ".#.", "###"]),
    ('2', ["##.", "..#", ".#.", "#..", "###"]),
    ('3', ["##.", "..#", ".#.", "..#", "##."]),
    ('4', ["#.#", "#.#", "###", "..#", "..#"]),
    ('5', ["###", "#..", "##.", "..#", "##."]),
    ('6', [".##", "#..", "###", "#.#", "###"]),
    ('7', ["###", "..#", ".#.", ".#.", ".#."]),
    ('8', ["###", "#.#", "###", "#.#", "###"]),
    ('9', ["###", "#.#", "###", "..#", "##."]),
    (' ', ["...", "...", "...", "...", "..."]),
    ('!', [".#.", ".#.", ".#.", "...", ".#."]),
    ('?', ["##.", "..#", ".#.", "...", ".#."]),
    ('%', ["#.#", "..#", ".#.", "#..", "#.#"]),
    (':', ["...", ".#.", "...", ".#.", "..."]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::PixelBuffer;

    const TINY_BDF: &str = "STARTFONT 2.1
FONT -misc-tiny
SIZE 4 75 75
FONTBOUNDINGBOX 3 4 0 -1
STARTPROPERTIES 2
FONT_ASCENT 3
FONT_DESCENT 1
ENDPROPERTIES
CHARS 2
STARTCHAR A
ENCODING 65
SWIDTH 500 0
DWIDTH 4 0
BBX 3 3 0 0
BITMAP
40
A0
E0
ENDCHAR
STARTCHAR unknown
ENCODING -1
DWIDTH 4 0
BBX 1 1 0 0
BITMAP
80
ENDCHAR
ENDFONT
";

    #[test]
    fn parses_bdf_glyphs() {
        let font = BitmapFont::parse_bdf(TINY_BDF).unwrap();
        assert_eq!(font.height(), 4);
        assert_eq!(font.ascent(), 3);
        let a = font.glyph('A').unwrap();
        assert_eq!((a.width, a.height, a.advance), (3, 3, 4));
        assert!(a.is_set(1, 0));
        assert!(!a.is_set(0, 0));
        assert!(a.is_set(0, 1) && a.is_set(2, 1));
        assert!((0..3).all(|x| a.is_set(x, 2)));
        // Negative encodings are dropped.
        assert_eq!(font.glyph('?'), None);
    }

    #[test]
    fn rejects_broken_bdf() {
        assert!(BitmapFont::parse_bdf("hello").is_err());
        assert!(BitmapFont::parse_bdf("STARTFONT 2.1\nENDFONT\n").is_err());
        let truncated = "STARTFONT 2.1\nSTARTCHAR A\nENCODING 65\nBBX 3 3 0 0\nBITMAP\n40\n";
        assert!(BitmapFont::parse_bdf(truncated).is_err());
    }

    #[test]
    fn draws_on_the_baseline() {
        let font = BitmapFont::parse_bdf(TINY_BDF).unwrap();
        let mut fb = PixelBuffer::new(8, 8);
        let white = Rgb::new(255, 255, 255);
        let advance = fb.draw_text(&font, 1, 5, white, "AA");
        assert_eq!(advance, 8);
        // BBX height 3 with y offset 0: rows 2..=4 above baseline 5.
        assert_eq!(fb.get(2, 2), Some(white));
        assert_eq!(fb.get(1, 4), Some(white));
        assert_eq!(fb.get(6, 2), Some(white));
        assert_eq!(fb.get(2, 5), Some(Rgb::BLACK));
    }

    #[test]
    fn builtin_covers_game_text() {
        let font = BitmapFont::builtin();
        for c in "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 !%:".chars() {
            assert!(font.glyph(c).is_some(), "missing {c:?}");
        }
        assert_eq!(font.text_width("Streak: 3"), 9 * 4);
        assert_eq!(font.char_width('\u{2603}'), 0);
    }

    #[test]
    fn scaling_doubles_everything() {
        let small = BitmapFont::builtin();
        let large = small.scaled(2);
        let a = large.glyph('A').unwrap();
        assert_eq!((a.width, a.height, a.advance), (6, 10, 8));
        assert_eq!(large.text_width("VICTORY"), 56);
        // The top of 'A' is its middle column only.
        assert!(!a.is_set(0, 0) && !a.is_set(1, 1));
        assert!(a.is_set(2, 0) && a.is_set(3, 1));
    }
}
