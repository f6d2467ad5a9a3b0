use glam::Vec2;
use rand::Rng;

use crate::color::Color;
use crate::map::Aabb;
use crate::params::Params;
use crate::resources::GameRng;

/// Which half of the playfield a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // player 1
    Right, // player 2
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Direction a paddle on this side faces (towards the middle)
    pub fn facing(self) -> Side {
        self.opponent()
    }

    /// Sign of x velocity that travels towards this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }

    pub fn label(self) -> String {
        format!("Player {}", self.player_number())
    }
}

/// Ball component - the pong ball
///
/// `pos` is the top-left corner of `bounds`; the box always follows the
/// position and is never moved on its own.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub bounds: Aabb,
    pub color: Color,
    pub hue: f32,
    /// Top/bottom wall gate, re-armed once the box is back inside the field
    pub can_bounce: bool,
    /// Paddle gate, re-armed on any frame without paddle contact
    pub paddle_bounce: bool,
    /// Seconds left before a served ball starts moving
    pub sleep: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, color: Color) -> Self {
        let (hue, _, _, _) = color.to_hsla();
        Self {
            pos,
            vel,
            size,
            bounds: Aabb::from_top_left(pos, Vec2::splat(size)),
            color,
            hue,
            can_bounce: true,
            paddle_bounce: true,
            sleep: 0.0,
        }
    }

    pub fn sync_bounds(&mut self) {
        self.bounds = Aabb::from_top_left(self.pos, Vec2::splat(self.size));
    }

    pub fn is_sleeping(&self) -> bool {
        self.sleep > 0.0
    }

    pub fn current_color(&self) -> Color {
        self.color.with_hue(self.hue)
    }

    /// Reset in place at `spawn` and launch towards `toward` after `delay`
    ///
    /// Horizontal speed grows by `speedup`; the vertical component is drawn
    /// from `[-|vx|, |vx|]` using the speed before the increase.
    pub fn serve(&mut self, spawn: Vec2, toward: Side, speedup: f32, delay: f32, rng: &mut GameRng) {
        let xval = self.vel.x.abs();
        self.vel.y = if xval > 0.0 {
            rng.0.gen_range(-xval..=xval)
        } else {
            0.0
        };
        self.vel.x = xval * toward.direction() * speedup;

        self.pos = spawn;
        self.sync_bounds();
        self.sleep = delay;
        self.can_bounce = true;
        self.paddle_bounce = true;
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    /// Centre of the paddle
    pub pos: Vec2,
    pub size: Vec2,
    pub bounds: Aabb,
    /// Smoothed vertical speed, transferred to the ball as spin
    pub dy: f32,
    /// `pos.y` at the end of the previous update
    pub prev_y: f32,
    pub color: Color,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            side,
            pos,
            size,
            bounds: Aabb::from_center_size(pos, size),
            dy: 0.0,
            prev_y: pos.y,
            color,
        }
    }

    pub fn facing(&self) -> Side {
        self.side.facing()
    }

    pub fn sync_bounds(&mut self) {
        self.bounds = Aabb::from_center_size(self.pos, self.size);
    }

    /// Horizontal lean of the drawn paddle, rounded to one decimal
    pub fn tilt(&self) -> f32 {
        let offset = (self.dy * Params::PADDLE_TILT * 10.0).round() / 10.0;
        match self.facing() {
            Side::Left => offset,
            Side::Right => -offset,
        }
    }
}

/// Movement command for a paddle, written by the input mapper
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    /// Units per second, positive is down
    pub velocity: f32,
    /// Absolute y to jump to (pointer control)
    pub target_y: Option<f32>,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Score display: two-digit counter with one orbiting tick per point
#[derive(Debug, Clone, Copy)]
pub struct ScoreBadge {
    pub side: Side,
    pub pos: Vec2,
    pub points: u32,
    pub time: f32,
    pub color: Color,
}

impl ScoreBadge {
    pub fn new(side: Side, pos: Vec2, color: Color) -> Self {
        Self {
            side,
            pos,
            points: 0,
            time: 0.0,
            color,
        }
    }

    pub fn label(&self) -> String {
        format!("{:02}", self.points)
    }
}

/// Terminal display shown once a match is decided
#[derive(Debug, Clone)]
pub struct VictoryBanner {
    pub text: String,
    pub pos: Vec2,
    pub color: Color,
    pub color1: Color,
    pub color2: Color,
    pub hue: f32,
}

impl VictoryBanner {
    pub fn new(text: String, pos: Vec2, color: Color, color1: Color, color2: Color) -> Self {
        Self {
            text,
            pos,
            color,
            color1,
            color2,
            hue: 0.0,
        }
    }

    /// Text colour: eases between the two banner colours as the hue turns
    pub fn text_color(&self) -> Color {
        let wave = ((self.hue.to_radians().sin() + 1.0) * 0.5).max(0.0);
        self.color1.lerp(self.color2, wave.sqrt())
    }
}
