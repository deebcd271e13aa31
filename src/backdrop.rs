//! Backdrop composition
//!
//! Renders the installer background in five fixed stages: vertical gradient,
//! radial highlight, icon glow spots, the drag arrow, and the centered
//! labels. Stage order is a contract: the highlight and glows add onto
//! whatever is already in the buffer, and the arrow and text draw over the
//! accumulated result.

use log::debug;

use crate::config::BackdropConfig;
use crate::display::{draw_text_centered, PixelBuffer};

/// Arrow shaft half-height in pixels
const ARROW_SHAFT_HALF_HEIGHT: i32 = 4;
/// Arrow head half-height at its base
const ARROW_HEAD_HALF_HEIGHT: i32 = 14;
/// Horizontal length of the tapering arrow head
const ARROW_HEAD_LENGTH: i32 = 22;
/// Gap between a glow circle's edge and the arrow's nearest end
const ARROW_STANDOFF: i32 = 5;

/// The full installer-background composition for one canvas.
pub struct Backdrop {
    config: BackdropConfig,
}

impl Backdrop {
    pub fn new(config: BackdropConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    /// Render all stages into the buffer, in order.
    pub fn render(&self, buffer: &mut PixelBuffer) {
        debug!("stage: gradient");
        self.draw_gradient(buffer);
        debug!("stage: radial highlight");
        self.draw_highlight(buffer);
        debug!("stage: icon glows");
        self.draw_glows(buffer);
        debug!("stage: arrow");
        self.draw_arrow(buffer);
        debug!("stage: labels");
        self.draw_labels(buffer);
    }

    /// Stage 1: vertical linear gradient, one color per scanline, alpha 255.
    fn draw_gradient(&self, buffer: &mut PixelBuffer) {
        let width = buffer.width() as i32;
        let height = buffer.height();
        let denom = height.saturating_sub(1).max(1) as f32;

        for y in 0..height as i32 {
            let t = y as f32 / denom;
            let color = self.config.gradient_top.lerp(self.config.gradient_bottom, t);
            buffer.hline(0, width - 1, y, color);
        }
    }

    /// Stage 2: radial brightening centered above the canvas midpoint.
    /// Falloff is quadratic in normalized distance, zero at the corners.
    fn draw_highlight(&self, buffer: &mut PixelBuffer) {
        let cx = (buffer.width() / 2) as i32;
        let cy = (buffer.height() / 2) as i32 - self.config.highlight_lift;
        let max_dist = ((cx * cx + cy * cy) as f32).sqrt();
        let strength = self.config.highlight_strength as f32;

        for y in 0..buffer.height() as i32 {
            for x in 0..buffer.width() as i32 {
                let dx = (x - cx) as f32;
                let dy = (y - cy) as f32;
                let t = ((dx * dx + dy * dy).sqrt() / max_dist).min(1.0);
                let brightness = (strength * (1.0 - t * t)) as u8;
                buffer.blend_pixel_additive(x, y, brightness, brightness, brightness);
            }
        }
    }

    /// Stage 3: a soft circular glow under each icon position, with a
    /// slight blue bias so the spots read as screen light.
    fn draw_glows(&self, buffer: &mut PixelBuffer) {
        let radius = self.config.glow_radius;
        let strength = self.config.glow_strength as f32;

        for &(cx, cy) in &self.config.icon_centers {
            for dy in -radius..=radius {
                for dx in -radius..=radius {
                    let dist = ((dx * dx + dy * dy) as f32).sqrt();
                    if dist < radius as f32 {
                        let glow = (strength * (1.0 - dist / radius as f32)) as u8;
                        buffer.blend_pixel_additive(cx + dx, cy + dy, glow, glow, glow + 2);
                    }
                }
            }
        }
    }

    /// Stage 4: the drag arrow, standing off from the first and last glow
    /// circles.
    fn draw_arrow(&self, buffer: &mut PixelBuffer) {
        let (Some(&(left_x, left_y)), Some(&(right_x, _))) = (
            self.config.icon_centers.first(),
            self.config.icon_centers.last(),
        ) else {
            return;
        };

        let x_start = left_x + self.config.glow_radius + ARROW_STANDOFF;
        let x_end = right_x - self.config.glow_radius - ARROW_STANDOFF;
        if x_end <= x_start {
            return;
        }

        buffer.fill_arrow(
            x_start,
            x_end,
            left_y,
            ARROW_SHAFT_HALF_HEIGHT,
            ARROW_HEAD_HALF_HEIGHT,
            ARROW_HEAD_LENGTH,
            self.config.arrow_color,
        );
    }

    /// Stage 5: title and subtitle, horizontally centered.
    fn draw_labels(&self, buffer: &mut PixelBuffer) {
        let c = &self.config;
        draw_text_centered(buffer, &c.title, c.title_y, c.title_scale, c.title_color);
        draw_text_centered(
            buffer,
            &c.subtitle,
            c.subtitle_y,
            c.subtitle_scale,
            c.subtitle_color,
        );
    }
}
