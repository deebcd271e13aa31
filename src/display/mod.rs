//! Software rendering: the RGBA pixel buffer, shape rasterizer, and
//! bitmap font.

mod font;
mod pixel_buffer;

pub use font::{
    draw_text, draw_text_centered, get_glyph, text_width, Glyph, GLYPH_HEIGHT, GLYPH_WIDTH,
};
pub use pixel_buffer::{PixelBuffer, Rgba};

/// Default canvas width for the DMG installer window
pub const DEFAULT_WIDTH: u32 = 660;
/// Default canvas height for the DMG installer window
pub const DEFAULT_HEIGHT: u32 = 400;
