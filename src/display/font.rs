//! Bitmap font rendering
//!
//! A fixed 5x7 pixel font covering uppercase letters, digits, and space.
//! Each glyph row is one byte; the low 5 bits hold the columns with the
//! leftmost column in the most significant of the five. Lookups case-fold,
//! so callers can pass mixed-case text. Characters without a glyph advance
//! the cursor by a blank-space width and draw nothing.

use super::pixel_buffer::{PixelBuffer, Rgba};

/// Glyph width in pixels (before scaling)
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in pixels (before scaling)
pub const GLYPH_HEIGHT: u32 = 7;
/// Cursor advance for characters missing from the table, in unscaled pixels
const BLANK_ADVANCE: u32 = 4;

/// One row byte per scanline, top to bottom
pub type Glyph = [u8; GLYPH_HEIGHT as usize];

/// Look up the glyph for a character (ASCII case-insensitive).
/// Returns None for characters outside A-Z, 0-9, and space.
pub fn get_glyph(ch: char) -> Option<&'static Glyph> {
    match ch.to_ascii_uppercase() {
        'A' => Some(&[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'B' => Some(&[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
        'C' => Some(&[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
        'D' => Some(&[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
        'E' => Some(&[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
        'F' => Some(&[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
        'G' => Some(&[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110]),
        'H' => Some(&[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'I' => Some(&[0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        'J' => Some(&[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
        'K' => Some(&[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
        'L' => Some(&[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        'M' => Some(&[0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
        'N' => Some(&[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001]),
        'O' => Some(&[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'P' => Some(&[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
        'Q' => Some(&[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
        'R' => Some(&[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
        'S' => Some(&[0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
        'T' => Some(&[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        'U' => Some(&[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'V' => Some(&[0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b01010, 0b00100]),
        'W' => Some(&[0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
        'X' => Some(&[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
        'Y' => Some(&[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
        'Z' => Some(&[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
        ' ' => Some(&[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]),
        '0' => Some(&[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
        '1' => Some(&[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        '2' => Some(&[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111]),
        '3' => Some(&[0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110]),
        '4' => Some(&[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
        '5' => Some(&[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
        '6' => Some(&[0b01110, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
        '7' => Some(&[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
        '8' => Some(&[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
        '9' => Some(&[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110]),
        _ => None,
    }
}

/// Cursor advance for one character at the given scale.
/// Shared by `draw_text` and `text_width` so the two can never drift apart.
#[inline]
fn advance(ch: char, scale: u32) -> i32 {
    match get_glyph(ch) {
        Some(_) => ((GLYPH_WIDTH + 1) * scale) as i32,
        None => (BLANK_ADVANCE * scale) as i32,
    }
}

/// Draw text with the top-left corner at (x, y). Each ink cell becomes a
/// scale x scale block of alpha-blended pixels. Unknown characters advance
/// the cursor without drawing.
pub fn draw_text(buffer: &mut PixelBuffer, text: &str, x: i32, y: i32, scale: u32, color: Rgba) {
    let mut cursor_x = x;
    for ch in text.chars() {
        if let Some(glyph) = get_glyph(ch) {
            for (row_idx, &row) in glyph.iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if row & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    for sy in 0..scale as i32 {
                        for sx in 0..scale as i32 {
                            buffer.blend_pixel(
                                cursor_x + (col * scale) as i32 + sx,
                                y + row_idx as i32 * scale as i32 + sy,
                                color,
                            );
                        }
                    }
                }
            }
        }
        cursor_x += advance(ch, scale);
    }
}

/// Pixel width of a string at the given scale: the sum of the same
/// per-character advances `draw_text` uses, minus the trailing gap after
/// the last character.
pub fn text_width(text: &str, scale: u32) -> i32 {
    if text.is_empty() {
        return 0;
    }
    let total: i32 = text.chars().map(|ch| advance(ch, scale)).sum();
    total - scale as i32
}

/// Draw text horizontally centered on the buffer at the given y
pub fn draw_text_centered(buffer: &mut PixelBuffer, text: &str, y: i32, scale: u32, color: Rgba) {
    let x = (buffer.width() as i32 - text_width(text, scale)) / 2;
    draw_text(buffer, text, x, y, scale, color);
}
