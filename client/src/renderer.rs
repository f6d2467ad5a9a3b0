//! Presents core draw commands through macroquad

use game_core::{DrawCommand, GameMap, Renderer, TextMeasure};
use macroquad::prelude as mq;

/// Uniform scale plus centring offset that fits the playfield in the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset: (f32, f32),
}

impl Viewport {
    /// Letterbox `field` inside a `screen` of the given size
    pub fn fit(screen: (f32, f32), field: &GameMap) -> Self {
        let scale = (screen.0 / field.width).min(screen.1 / field.height);
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self {
            scale,
            offset: (
                (screen.0 - field.width * scale) / 2.0,
                (screen.1 - field.height * scale) / 2.0,
            ),
        }
    }

    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (self.offset.0 + x * self.scale, self.offset.1 + y * self.scale)
    }

    pub fn to_field(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.offset.0) / self.scale, (y - self.offset.1) / self.scale)
    }
}

fn to_mq(color: game_core::Color) -> mq::Color {
    mq::Color::new(color.r, color.g, color.b, color.a)
}

pub struct MacroquadRenderer {
    map: GameMap,
    viewport: Viewport,
    frames: u64,
}

impl MacroquadRenderer {
    pub fn new(map: GameMap) -> Self {
        Self {
            map,
            viewport: Viewport::fit((mq::screen_width(), mq::screen_height()), &map),
            frames: 0,
        }
    }

    /// Refit to the current window size; call once per frame before drawing
    pub fn refresh_viewport(&mut self) {
        self.viewport = Viewport::fit((mq::screen_width(), mq::screen_height()), &self.map);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for MacroquadRenderer {
    fn draw(&mut self, command: &DrawCommand) {
        let vp = self.viewport;
        match command {
            DrawCommand::Clear { color } => mq::clear_background(to_mq(*color)),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                let (x, y) = vp.to_screen(center.x, center.y);
                mq::draw_circle(x, y, radius * vp.scale, to_mq(*color));
            }
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => {
                let (x1, y1) = vp.to_screen(from.x, from.y);
                let (x2, y2) = vp.to_screen(to.x, to.y);
                mq::draw_line(x1, y1, x2, y2, width * vp.scale, to_mq(*color));
            }
            DrawCommand::Rect { min, size, color } => {
                let (x, y) = vp.to_screen(min.x, min.y);
                mq::draw_rectangle(x, y, size.x * vp.scale, size.y * vp.scale, to_mq(*color));
            }
            DrawCommand::Text {
                pos,
                text,
                size,
                color,
            } => {
                let font_size = (size * vp.scale).round().max(1.0);
                let dims = mq::measure_text(text, None, font_size as u16, 1.0);
                let (x, y) = vp.to_screen(pos.x, pos.y);
                // macroquad places text by its baseline
                mq::draw_text(text, x, y + dims.offset_y, font_size, to_mq(*color));
            }
        }
    }

    fn present(&mut self) {
        // Buffers swap in `next_frame().await`
        self.frames += 1;
    }
}

/// Text extents from macroquad's built-in font
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroquadMetrics;

impl TextMeasure for MacroquadMetrics {
    fn measure(&self, text: &str, font_size: f32) -> game_core::glam::Vec2 {
        let dims = mq::measure_text(text, None, font_size.round().max(1.0) as u16, 1.0);
        game_core::glam::Vec2::new(dims.width, dims.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_has_no_bars() {
        let vp = Viewport::fit((1440.0, 960.0), &GameMap::default());
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.offset, (0.0, 0.0));
    }

    #[test]
    fn test_wide_window_pillarboxes() {
        let vp = Viewport::fit((1920.0, 960.0), &GameMap::default());
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.offset, (240.0, 0.0));
    }

    #[test]
    fn test_small_window_scales_down() {
        let vp = Viewport::fit((720.0, 720.0), &GameMap::default());
        assert_eq!(vp.scale, 0.5);
        assert_eq!(vp.offset, (0.0, 120.0));
        assert_eq!(vp.to_screen(1440.0, 960.0), (720.0, 600.0));
    }

    #[test]
    fn test_field_mapping_inverts_screen_mapping() {
        let vp = Viewport::fit((1000.0, 900.0), &GameMap::default());
        let (sx, sy) = vp.to_screen(300.0, 450.0);
        let (fx, fy) = vp.to_field(sx, sy);
        assert!((fx - 300.0).abs() < 1e-3);
        assert!((fy - 450.0).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_window_keeps_unit_scale() {
        let vp = Viewport::fit((0.0, 0.0), &GameMap::default());
        assert_eq!(vp.scale, 1.0);
    }
}
