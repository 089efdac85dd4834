//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! The logical surface is scaled to fill the viewport. This module is pure
//! (no I/O), so it can be unit-tested.

use crate::canvas::PixelCanvas;
use crate::core::{Bitmap, GameState};
use crate::fb::{FrameBuffer, Rgb};
use crate::types::{PlayerRect, BG_COLOR, PLAYER_COLOR};

/// Sprite pixels with less alpha than this are not drawn.
const ALPHA_CUTOFF: u8 = 128;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Mapping between logical surface pixels and canvas pixels.
#[derive(Debug, Clone, Copy)]
struct Scale {
    surface_w: i64,
    surface_h: i64,
    canvas_w: i64,
    canvas_h: i64,
}

impl Scale {
    /// Canvas span `[start, end)` touched by the logical span `[from, from + len)`.
    fn canvas_span(from: i64, len: i64, surface: i64, canvas: i64) -> (i64, i64) {
        let start = (from * canvas).div_euclid(surface).max(0);
        let end = ((from + len) * canvas + surface - 1)
            .div_euclid(surface)
            .min(canvas);
        (start, end)
    }

    /// Logical coordinate at the center of canvas pixel `c`.
    fn surface_at(c: i64, surface: i64, canvas: i64) -> i64 {
        ((2 * c + 1) * surface).div_euclid(2 * canvas)
    }
}

/// Draws the background tiles and the player.
pub struct GameView {
    canvas: PixelCanvas,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            canvas: PixelCanvas::new(0, 0),
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport as needed.
    pub fn render_into(&mut self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        self.canvas
            .resize(viewport.width, viewport.height.saturating_mul(2));
        self.canvas.fill(Rgb::from(BG_COLOR));

        let (surface_w, surface_h) = state.surface_size();
        if surface_w == 0 || surface_h == 0 || self.canvas.width() == 0 || self.canvas.height() == 0 {
            self.canvas.to_framebuffer(fb);
            return;
        }
        let scale = Scale {
            surface_w: surface_w as i64,
            surface_h: surface_h as i64,
            canvas_w: self.canvas.width() as i64,
            canvas_h: self.canvas.height() as i64,
        };

        let bg = state.background();
        for tile in state.tiles() {
            let dst = PlayerRect::new(tile.x, tile.y, bg.width(), bg.height());
            self.blit(bg, dst, scale);
        }

        let rect = state.player().rect();
        match state.sprite_bitmap() {
            Some(sprite) => self.blit(sprite, rect, scale),
            None => self.fill_rect(rect, Rgb::from(PLAYER_COLOR), scale),
        }

        self.canvas.to_framebuffer(fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Draw `bitmap` stretched over the logical rectangle `dst`.
    fn blit(&mut self, bitmap: &Bitmap, dst: PlayerRect, scale: Scale) {
        if bitmap.is_empty() || dst.width == 0 || dst.height == 0 {
            return;
        }
        let (dst_w, dst_h) = (dst.width as i64, dst.height as i64);
        self.for_each_covered(dst, scale, |sx, sy| {
            let u = (sx - dst.x as i64) * bitmap.width() as i64 / dst_w;
            let v = (sy - dst.y as i64) * bitmap.height() as i64 / dst_h;
            match bitmap.get(u as u32, v as u32) {
                Some([r, g, b, a]) if a >= ALPHA_CUTOFF => Some(Rgb::new(r, g, b)),
                _ => None,
            }
        });
    }

    fn fill_rect(&mut self, dst: PlayerRect, color: Rgb, scale: Scale) {
        self.for_each_covered(dst, scale, |_, _| Some(color));
    }

    /// Visit every canvas pixel whose center falls inside `dst`, passing the
    /// logical coordinates of that center to `shade`.
    fn for_each_covered(
        &mut self,
        dst: PlayerRect,
        scale: Scale,
        mut shade: impl FnMut(i64, i64) -> Option<Rgb>,
    ) {
        let (x0, x1) = Scale::canvas_span(dst.x as i64, dst.width as i64, scale.surface_w, scale.canvas_w);
        let (y0, y1) = Scale::canvas_span(dst.y as i64, dst.height as i64, scale.surface_h, scale.canvas_h);

        for cy in y0..y1 {
            let sy = Scale::surface_at(cy, scale.surface_h, scale.canvas_h);
            for cx in x0..x1 {
                let sx = Scale::surface_at(cx, scale.surface_w, scale.canvas_w);
                if !dst.contains(sx as i32, sy as i32) {
                    continue;
                }
                if let Some(c) = shade(sx, sy) {
                    self.canvas.set(cx, cy, c);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_span_rounds_outwards_and_clips() {
        assert_eq!(Scale::canvas_span(100, 50, 800, 80), (10, 15));
        assert_eq!(Scale::canvas_span(-64, 64, 800, 80), (0, 0));
        assert_eq!(Scale::canvas_span(768, 64, 800, 80), (76, 80));
        assert_eq!(Scale::canvas_span(101, 1, 800, 80), (10, 11));
    }

    #[test]
    fn surface_at_samples_pixel_centers() {
        assert_eq!(Scale::surface_at(0, 800, 80), 5);
        assert_eq!(Scale::surface_at(79, 800, 80), 795);
        assert_eq!(Scale::surface_at(0, 600, 600), 0);
    }
}
