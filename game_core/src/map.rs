use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Overlap with positive area; boxes that only touch do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// `other` lies entirely inside `self` (edges may coincide)
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        other.min.x >= self.min.x
            && other.max.x <= self.max.x
            && other.min.y >= self.min.y
            && other.max.y <= self.max.y
    }
}

/// The playfield: a rectangle anchored at the origin
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(Vec2::ZERO, Vec2::new(self.width, self.height))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Where the ball is placed for a serve
    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.height)
    }

    /// Paddle centre at match start
    pub fn paddle_spawn(&self, side: Side, inset: f32) -> Vec2 {
        let x = match side {
            Side::Left => inset,
            Side::Right => self.width - inset,
        };
        Vec2::new(x, self.height / 2.0)
    }

    pub fn score_anchor(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => Params::SCORE_ANCHOR_X,
            Side::Right => self.width - Params::SCORE_ANCHOR_X,
        };
        Vec2::new(x, Params::SCORE_ANCHOR_Y)
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(Params::SCREEN_WIDTH, Params::SCREEN_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_edges() {
        let b = Aabb::from_top_left(Vec2::new(10.0, 20.0), Vec2::new(15.0, 15.0));
        assert_eq!(b.left(), 10.0);
        assert_eq!(b.right(), 25.0);
        assert_eq!(b.top(), 20.0);
        assert_eq!(b.bottom(), 35.0);
        assert_eq!(b.center(), Vec2::new(17.5, 27.5));
    }

    #[test]
    fn test_from_center_size() {
        let b = Aabb::from_center_size(Vec2::new(50.0, 480.0), Vec2::new(16.0, 150.0));
        assert_eq!(b.min, Vec2::new(42.0, 405.0));
        assert_eq!(b.max, Vec2::new(58.0, 555.0));
        assert_eq!(b.size(), Vec2::new(16.0, 150.0));
    }

    #[test]
    fn test_touching_boxes_do_not_intersect() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.intersects(&b), "Shared edge is not an overlap");

        let c = Aabb::new(Vec2::new(9.0, 9.0), Vec2::new(20.0, 20.0));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a), "Intersection is symmetric");
    }

    #[test]
    fn test_contains_aabb() {
        let field = GameMap::new(100.0, 50.0).bounds();
        let inside = Aabb::from_top_left(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let across = Aabb::from_top_left(Vec2::new(95.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(field.contains_aabb(&inside), "Edges may coincide");
        assert!(!field.contains_aabb(&across));
    }

    #[test]
    fn test_map_spawns() {
        let map = GameMap::default();
        assert_eq!(map.ball_spawn(), Vec2::new(720.0, 480.0));
        assert_eq!(map.paddle_spawn(Side::Left, 50.0), Vec2::new(50.0, 480.0));
        assert_eq!(map.paddle_spawn(Side::Right, 50.0), Vec2::new(1390.0, 480.0));
        assert_eq!(map.score_anchor(Side::Right), Vec2::new(1040.0, 100.0));
    }

    #[test]
    fn test_clamp_y() {
        let map = GameMap::default();
        assert_eq!(map.clamp_y(-5.0), 0.0);
        assert_eq!(map.clamp_y(2000.0), 960.0);
        assert_eq!(map.clamp_y(300.0), 300.0);
    }
}
