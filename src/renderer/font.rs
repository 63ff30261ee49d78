//! Built-in 5x7 bitmap font
//!
//! Covers printable ASCII (0x20..=0x7E). Each glyph is 7 rows of 5 bits,
//! MSB on the left, stored in the low bits of a u8. Text is drawn in
//! "font pixels": one font pixel is `font_scale(size)` screen pixels.

use glam::Vec2;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per glyph in font pixels (glyph + 1px gap)
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;
/// Font size that maps to one screen pixel per font pixel
pub const BASE_SIZE: f32 = 10.0;

const FIRST_CHAR: u32 = 0x20;
const LAST_CHAR: u32 = 0x7E;
/// Substituted for anything outside the table
const FALLBACK: char = '?';

#[rustfmt::skip]
const GLYPHS: [[u8; 7]; 95] = [
    [0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000], // ' '
    [0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100], // '!'
    [0b01010,0b01010,0b01010,0b00000,0b00000,0b00000,0b00000], // '"'
    [0b01010,0b01010,0b11111,0b01010,0b11111,0b01010,0b01010], // '#'
    [0b00100,0b01111,0b10100,0b01110,0b00101,0b11110,0b00100], // '$'
    [0b11000,0b11001,0b00010,0b00100,0b01000,0b10011,0b00011], // '%'
    [0b01100,0b10010,0b10100,0b01000,0b10101,0b10010,0b01101], // '&'
    [0b01100,0b00100,0b01000,0b00000,0b00000,0b00000,0b00000], // '\''
    [0b00010,0b00100,0b01000,0b01000,0b01000,0b00100,0b00010], // '('
    [0b01000,0b00100,0b00010,0b00010,0b00010,0b00100,0b01000], // ')'
    [0b00000,0b00100,0b10101,0b01110,0b10101,0b00100,0b00000], // '*'
    [0b00000,0b00100,0b00100,0b11111,0b00100,0b00100,0b00000], // '+'
    [0b00000,0b00000,0b00000,0b00000,0b01100,0b00100,0b01000], // ','
    [0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000], // '-'
    [0b00000,0b00000,0b00000,0b00000,0b00000,0b01100,0b01100], // '.'
    [0b00000,0b00001,0b00010,0b00100,0b01000,0b10000,0b00000], // '/'
    [0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110], // '0'
    [0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110], // '1'
    [0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111], // '2'
    [0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110], // '3'
    [0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010], // '4'
    [0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110], // '5'
    [0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110], // '6'
    [0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000], // '7'
    [0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110], // '8'
    [0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100], // '9'
    [0b00000,0b01100,0b01100,0b00000,0b01100,0b01100,0b00000], // ':'
    [0b00000,0b01100,0b01100,0b00000,0b01100,0b00100,0b01000], // ';'
    [0b00010,0b00100,0b01000,0b10000,0b01000,0b00100,0b00010], // '<'
    [0b00000,0b00000,0b11111,0b00000,0b11111,0b00000,0b00000], // '='
    [0b01000,0b00100,0b00010,0b00001,0b00010,0b00100,0b01000], // '>'
    [0b01110,0b10001,0b00001,0b00010,0b00100,0b00000,0b00100], // '?'
    [0b01110,0b10001,0b00001,0b01101,0b10101,0b10101,0b01110], // '@'
    [0b01110,0b10001,0b10001,0b10001,0b11111,0b10001,0b10001], // 'A'
    [0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110], // 'B'
    [0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110], // 'C'
    [0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100], // 'D'
    [0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111], // 'E'
    [0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000], // 'F'
    [0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111], // 'G'
    [0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001], // 'H'
    [0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110], // 'I'
    [0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100], // 'J'
    [0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001], // 'K'
    [0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111], // 'L'
    [0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001], // 'M'
    [0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001], // 'N'
    [0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110], // 'O'
    [0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000], // 'P'
    [0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101], // 'Q'
    [0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001], // 'R'
    [0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110], // 'S'
    [0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100], // 'T'
    [0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110], // 'U'
    [0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100], // 'V'
    [0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010], // 'W'
    [0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001], // 'X'
    [0b10001,0b10001,0b10001,0b01010,0b00100,0b00100,0b00100], // 'Y'
    [0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111], // 'Z'
    [0b01110,0b01000,0b01000,0b01000,0b01000,0b01000,0b01110], // '['
    [0b00000,0b10000,0b01000,0b00100,0b00010,0b00001,0b00000], // '\\'
    [0b01110,0b00010,0b00010,0b00010,0b00010,0b00010,0b01110], // ']'
    [0b00100,0b01010,0b10001,0b00000,0b00000,0b00000,0b00000], // '^'
    [0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b11111], // '_'
    [0b01000,0b00100,0b00010,0b00000,0b00000,0b00000,0b00000], // '`'
    [0b00000,0b00000,0b01110,0b00001,0b01111,0b10001,0b01111], // 'a'
    [0b10000,0b10000,0b10110,0b11001,0b10001,0b10001,0b11110], // 'b'
    [0b00000,0b00000,0b01110,0b10000,0b10000,0b10001,0b01110], // 'c'
    [0b00001,0b00001,0b01101,0b10011,0b10001,0b10001,0b01111], // 'd'
    [0b00000,0b00000,0b01110,0b10001,0b11111,0b10000,0b01110], // 'e'
    [0b00110,0b01001,0b01000,0b11100,0b01000,0b01000,0b01000], // 'f'
    [0b00000,0b01111,0b10001,0b10001,0b01111,0b00001,0b01110], // 'g'
    [0b10000,0b10000,0b10110,0b11001,0b10001,0b10001,0b10001], // 'h'
    [0b00100,0b00000,0b01100,0b00100,0b00100,0b00100,0b01110], // 'i'
    [0b00010,0b00000,0b00110,0b00010,0b00010,0b10010,0b01100], // 'j'
    [0b10000,0b10000,0b10010,0b10100,0b11000,0b10100,0b10010], // 'k'
    [0b01100,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110], // 'l'
    [0b00000,0b00000,0b11010,0b10101,0b10101,0b10001,0b10001], // 'm'
    [0b00000,0b00000,0b10110,0b11001,0b10001,0b10001,0b10001], // 'n'
    [0b00000,0b00000,0b01110,0b10001,0b10001,0b10001,0b01110], // 'o'
    [0b00000,0b00000,0b11110,0b10001,0b11110,0b10000,0b10000], // 'p'
    [0b00000,0b00000,0b01101,0b10011,0b01111,0b00001,0b00001], // 'q'
    [0b00000,0b00000,0b10110,0b11001,0b10000,0b10000,0b10000], // 'r'
    [0b00000,0b00000,0b01110,0b10000,0b01110,0b00001,0b11110], // 's'
    [0b01000,0b01000,0b11100,0b01000,0b01000,0b01001,0b00110], // 't'
    [0b00000,0b00000,0b10001,0b10001,0b10001,0b10011,0b01101], // 'u'
    [0b00000,0b00000,0b10001,0b10001,0b10001,0b01010,0b00100], // 'v'
    [0b00000,0b00000,0b10001,0b10001,0b10101,0b10101,0b01010], // 'w'
    [0b00000,0b00000,0b10001,0b01010,0b00100,0b01010,0b10001], // 'x'
    [0b00000,0b00000,0b10001,0b10001,0b01111,0b00001,0b01110], // 'y'
    [0b00000,0b00000,0b11111,0b00010,0b00100,0b01000,0b11111], // 'z'
    [0b00010,0b00100,0b00100,0b01000,0b00100,0b00100,0b00010], // '{'
    [0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100], // '|'
    [0b01000,0b00100,0b00100,0b00010,0b00100,0b00100,0b01000], // '}'
    [0b00000,0b00000,0b01000,0b10101,0b00010,0b00000,0b00000], // '~'
];

/// One positioned glyph, ready for the GPU
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    /// Top-left corner in screen pixels
    pub origin: Vec2,
    /// Screen pixels per font pixel
    pub pixel: f32,
    /// Index into the glyph table
    pub index: u32,
}

/// Index of `ch` in the glyph table, falling back to '?'
pub fn glyph_index(ch: char) -> u32 {
    let code = ch as u32;
    if (FIRST_CHAR..=LAST_CHAR).contains(&code) {
        code - FIRST_CHAR
    } else {
        FALLBACK as u32 - FIRST_CHAR
    }
}

/// Bitmap rows for `ch`
pub fn glyph_rows(ch: char) -> &'static [u8; 7] {
    &GLYPHS[glyph_index(ch) as usize]
}

/// Screen pixels per font pixel for a font size (whole pixels, at least 1)
pub fn font_scale(size: f32) -> f32 {
    (size / BASE_SIZE).floor().max(1.0)
}

/// Width in screen pixels of `text` at `size` (no trailing gap)
pub fn measure_text(text: &str, size: f32) -> f32 {
    let count = text.chars().count() as f32;
    if count == 0.0 {
        return 0.0;
    }
    let scale = font_scale(size);
    (count * GLYPH_ADVANCE as f32 - 1.0) * scale
}

/// Lay `text` out left-to-right from `pos` (top-left). Blank glyphs only advance.
pub fn layout_text(text: &str, pos: Vec2, size: f32) -> Vec<GlyphQuad> {
    let pixel = font_scale(size);
    let advance = GLYPH_ADVANCE as f32 * pixel;

    let mut quads = Vec::with_capacity(text.len());
    let mut pen_x = pos.x;
    for ch in text.chars() {
        if glyph_rows(ch).iter().any(|row| *row != 0) {
            quads.push(GlyphQuad {
                origin: Vec2::new(pen_x, pos.y),
                pixel,
                index: glyph_index(ch),
            });
        }
        pen_x += advance;
    }
    quads
}

/// Glyph table flattened to one u32 per row, for a GPU storage buffer
pub fn glyph_table() -> Vec<u32> {
    GLYPHS
        .iter()
        .flat_map(|rows| rows.iter().map(|&r| r as u32))
        .collect()
}

/// Number of glyphs in the table
pub const GLYPH_COUNT: u32 = LAST_CHAR - FIRST_CHAR + 1;
