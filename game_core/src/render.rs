//! Render boundary: the core describes each frame as an ordered list of
//! primitives and never waits on the presenter.

use std::f32::consts::TAU;

use glam::Vec2;
use hecs::World;

use crate::color::Color;
use crate::components::{Ball, Paddle, ScoreBadge, Side, VictoryBanner};
use crate::config::Config;
use crate::params::Params;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole target
    Clear { color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Line { from: Vec2, to: Vec2, width: f32, color: Color },
    /// Filled rectangle
    Rect { min: Vec2, size: Vec2, color: Color },
    /// `pos` is the top-left corner of the text's extent
    Text { pos: Vec2, text: String, size: f32, color: Color },
}

/// Commands for one frame, in paint order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

/// Text extent lookup, supplied by whoever owns the font
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> Vec2;
}

/// Fixed-advance estimate for headless runs
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    /// Glyph advance as a fraction of the font size
    pub advance: f32,
    pub line_height: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self {
            advance: 0.55,
            line_height: 1.0,
        }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn measure(&self, text: &str, font_size: f32) -> Vec2 {
        let chars = text.chars().count() as f32;
        Vec2::new(chars * self.advance * font_size, self.line_height * font_size)
    }
}

/// Emit the whole scene: background, badges, paddles, ball, banner
pub fn draw_world(world: &World, config: &Config, metrics: &dyn TextMeasure, list: &mut DrawList) {
    list.push(DrawCommand::Clear {
        color: config.palette.background,
    });

    let mut badges: Vec<ScoreBadge> = world.query::<&ScoreBadge>().iter().map(|(_e, b)| *b).collect();
    badges.sort_by_key(|b| b.side == Side::Right);
    for badge in &badges {
        draw_score_badge(badge, config, list);
    }

    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side == Side::Right);
    for paddle in &paddles {
        draw_paddle(paddle, list);
    }

    for (_entity, ball) in world.query::<&Ball>().iter() {
        draw_ball(ball, list);
    }

    for (_entity, banner) in world.query::<&VictoryBanner>().iter() {
        draw_banner(banner, config, metrics, list);
    }
}

fn draw_score_badge(badge: &ScoreBadge, config: &Config, list: &mut DrawList) {
    list.push(DrawCommand::Text {
        pos: badge.pos + Vec2::from(Params::SCORE_TEXT_OFFSET),
        text: badge.label(),
        size: config.font_size,
        color: config.palette.text,
    });

    for i in 0..badge.points {
        let angle = (i as f32 / badge.points as f32) * TAU + badge.time;
        let dir = Vec2::new(angle.cos(), angle.sin());
        list.push(DrawCommand::Line {
            from: badge.pos + dir * Params::SCORE_TICK_INNER,
            to: badge.pos + dir * Params::SCORE_TICK_OUTER,
            width: Params::SCORE_TICK_STROKE,
            color: badge.color,
        });
    }
}

fn draw_paddle(paddle: &Paddle, list: &mut DrawList) {
    let offset = paddle.tilt();
    let cx = paddle.bounds.center().x;
    list.push(DrawCommand::Line {
        from: Vec2::new(cx - offset, paddle.bounds.top()),
        to: Vec2::new(cx + offset, paddle.bounds.bottom()),
        width: Params::PADDLE_STROKE,
        color: paddle.color,
    });
}

fn draw_ball(ball: &Ball, list: &mut DrawList) {
    let color = ball.current_color();
    let center = ball.bounds.center();

    if ball.is_sleeping() {
        // Serve indicator: a short dash pointing where the ball will go
        let dir = ball.vel.normalize_or_zero();
        list.push(DrawCommand::Line {
            from: center + dir * Params::INDICATOR_NEAR,
            to: center + dir * Params::INDICATOR_FAR,
            width: Params::INDICATOR_STROKE,
            color,
        });
    }

    list.push(DrawCommand::Circle {
        center,
        radius: ball.bounds.size().x / 2.0,
        color,
    });
}

fn draw_banner(banner: &VictoryBanner, config: &Config, metrics: &dyn TextMeasure, list: &mut DrawList) {
    let extent = metrics.measure(&banner.text, config.font_size);
    let padding = Vec2::splat(Params::BANNER_PADDING);
    let size = extent + padding * 2.0;
    let min = banner.pos - size / 2.0;

    list.push(DrawCommand::Rect {
        min,
        size,
        color: banner.color,
    });
    list.push(DrawCommand::Text {
        pos: min + padding,
        text: banner.text.clone(),
        size: config.font_size,
        color: banner.text_color(),
    });
}
