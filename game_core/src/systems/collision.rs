//! Ball resolution against the playfield walls and the paddles
//!
//! Both contacts are debounced: once a bounce fires, its flag stays down
//! until the ball has separated, so overlapping for several frames still
//! inverts the velocity only once. A ball fast enough to cross a paddle or
//! wall within one step is not detected (no continuous collision).

use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::map::{Aabb, GameMap};
use crate::resources::{Events, Time};

/// What the ball needs to know about a paddle to bounce off it
#[derive(Debug, Clone, Copy)]
pub struct PaddleContact {
    pub bounds: Aabb,
    pub dy: f32,
}

impl From<&Paddle> for PaddleContact {
    fn from(paddle: &Paddle) -> Self {
        Self {
            bounds: paddle.bounds,
            dy: paddle.dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallOutcome {
    Clear,
    Bounced,
    /// The ball left through a side edge; the opposite player scores
    Scored(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    Sleeping,
    Moved,
    Scored(Side),
}

/// Side exits signal a point; top/bottom contact inverts and damps `vel.y`
pub fn resolve_walls(ball: &mut Ball, field: &Aabb, decay: f32) -> WallOutcome {
    if ball.bounds.left() < field.left() {
        return WallOutcome::Scored(Side::Right);
    }
    if ball.bounds.right() > field.right() {
        return WallOutcome::Scored(Side::Left);
    }

    if ball.can_bounce && (ball.bounds.top() < field.top() || ball.bounds.bottom() > field.bottom()) {
        ball.vel.y *= -decay;
        ball.can_bounce = false;
        return WallOutcome::Bounced;
    }

    WallOutcome::Clear
}

/// Invert `vel.x` and pick up spin from the first paddle touched
///
/// Returns true when a bounce fired. The gate re-arms on any call where
/// the ball overlaps no paddle.
pub fn resolve_paddles(ball: &mut Ball, paddles: &[PaddleContact], spin_transfer: f32) -> bool {
    match paddles.iter().find(|p| ball.bounds.intersects(&p.bounds)) {
        Some(paddle) if ball.paddle_bounce => {
            ball.vel.x = -ball.vel.x;
            ball.vel.y += paddle.dy * spin_transfer;
            ball.paddle_bounce = false;
            true
        }
        Some(_) => false,
        None => {
            ball.paddle_bounce = true;
            false
        }
    }
}

/// The wall gate comes back only once the whole box is inside the field
pub fn rearm_wall_bounce(ball: &mut Ball, field: &Aabb) {
    if field.contains_aabb(&ball.bounds) {
        ball.can_bounce = true;
    }
}

/// One frame of ball motion: walls, paddles, integrate, re-arm
///
/// A scoring frame returns before moving; the caller owns the score and
/// the serve.
pub fn advance_ball(
    ball: &mut Ball,
    paddles: &[PaddleContact],
    field: &Aabb,
    config: &Config,
    dt: f32,
    events: &mut Events,
) -> BallOutcome {
    if ball.is_sleeping() {
        ball.sleep -= dt;
        return BallOutcome::Sleeping;
    }

    match resolve_walls(ball, field, config.bounce_decay) {
        WallOutcome::Scored(side) => return BallOutcome::Scored(side),
        WallOutcome::Bounced => {
            log::debug!("Wall bounce, vel={:?}", ball.vel);
            events.ball_hit_wall = true;
        }
        WallOutcome::Clear => {}
    }

    if resolve_paddles(ball, paddles, config.spin_transfer) {
        log::debug!("Paddle bounce, vel={:?}", ball.vel);
        events.ball_hit_paddle = true;
    }

    ball.pos += ball.vel * dt;
    ball.sync_bounds();
    rearm_wall_bounce(ball, field);

    BallOutcome::Moved
}

/// Run the ball against the current paddles
pub fn update_ball(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) -> Option<BallOutcome> {
    // Snapshot paddles first so the ball can be borrowed mutably
    let mut paddles: Vec<(Side, PaddleContact)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, PaddleContact::from(p)))
        .collect();
    paddles.sort_by_key(|(side, _)| *side == Side::Right);
    let contacts: Vec<PaddleContact> = paddles.into_iter().map(|(_, c)| c).collect();

    let field = map.bounds();
    world
        .query_mut::<&mut Ball>()
        .into_iter()
        .next()
        .map(|(_e, ball)| advance_ball(ball, &contacts, &field, config, time.dt, events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use glam::Vec2;

    const DT: f32 = 1.0 / 240.0;

    fn field() -> Aabb {
        GameMap::default().bounds()
    }

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), 15.0, Color::WHITE)
    }

    fn paddle_contact(x: f32, y: f32, dy: f32) -> PaddleContact {
        PaddleContact {
            bounds: Aabb::from_center_size(Vec2::new(x, y), Vec2::new(16.0, 150.0)),
            dy,
        }
    }

    #[test]
    fn test_ball_inside_field_is_untouched() {
        let mut ball = ball_at(700.0, 400.0, 600.0, 120.0);
        let outcome = resolve_walls(&mut ball, &field(), 0.6);
        assert_eq!(outcome, WallOutcome::Clear);
        assert_eq!(ball.vel, Vec2::new(600.0, 120.0));
        assert!(ball.can_bounce);
    }

    #[test]
    fn test_ball_bounces_off_top_wall_with_decay() {
        let mut ball = ball_at(700.0, -2.0, 600.0, -300.0);
        let outcome = resolve_walls(&mut ball, &field(), 0.6);

        assert_eq!(outcome, WallOutcome::Bounced);
        assert!((ball.vel.y - 180.0).abs() < 1e-3, "Inverted and damped, got {}", ball.vel.y);
        assert_eq!(ball.vel.x, 600.0, "X velocity should be unchanged");
        assert!(!ball.can_bounce, "Gate drops after a bounce");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let mut ball = ball_at(700.0, 950.0, -600.0, 200.0);
        let outcome = resolve_walls(&mut ball, &field(), 0.95);

        assert_eq!(outcome, WallOutcome::Bounced);
        assert!(ball.vel.y < 0.0, "Ball should bounce up after hitting bottom wall");
        assert!(ball.vel.y.abs() < 200.0);
    }

    #[test]
    fn test_wall_bounce_fires_once_while_overlapping() {
        let mut ball = ball_at(700.0, -5.0, 0.0, -10.0);
        let mut bounces = 0;

        for _ in 0..5 {
            if resolve_walls(&mut ball, &field(), 0.6) == WallOutcome::Bounced {
                bounces += 1;
            }
            // Stay stuck across the boundary
            ball.pos.y = -5.0;
            ball.sync_bounds();
            rearm_wall_bounce(&mut ball, &field());
        }

        assert_eq!(bounces, 1, "Only one inversion while the box overlaps the wall");
        assert!((ball.vel.y - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_wall_gate_rearms_only_when_fully_inside() {
        let mut ball = ball_at(700.0, -1.0, 0.0, 0.0);
        ball.can_bounce = false;

        rearm_wall_bounce(&mut ball, &field());
        assert!(!ball.can_bounce, "Still crossing the top edge");

        ball.pos.y = 0.0;
        ball.sync_bounds();
        rearm_wall_bounce(&mut ball, &field());
        assert!(ball.can_bounce, "Box touching the edge from inside counts as contained");
    }

    #[test]
    fn test_left_exit_scores_for_right() {
        let mut ball = ball_at(-0.5, 400.0, -600.0, 0.0);
        assert_eq!(resolve_walls(&mut ball, &field(), 0.6), WallOutcome::Scored(Side::Right));
        assert_eq!(ball.vel, Vec2::new(-600.0, 0.0), "Scoring does not bounce");
    }

    #[test]
    fn test_right_exit_scores_for_left() {
        let mut ball = ball_at(1430.0, 400.0, 600.0, 0.0);
        assert_eq!(resolve_walls(&mut ball, &field(), 0.6), WallOutcome::Scored(Side::Left));
    }

    #[test]
    fn test_exit_scores_even_when_wall_gate_is_down() {
        let mut ball = ball_at(-3.0, -3.0, -600.0, -100.0);
        ball.can_bounce = false;
        assert_eq!(resolve_walls(&mut ball, &field(), 0.6), WallOutcome::Scored(Side::Right));
    }

    #[test]
    fn test_paddle_bounce_inverts_and_transfers_spin() {
        let mut ball = ball_at(52.0, 470.0, -600.0, 10.0);
        let paddles = [paddle_contact(50.0, 480.0, 400.0)];

        assert!(resolve_paddles(&mut ball, &paddles, 0.5));
        assert_eq!(ball.vel.x, 600.0);
        assert_eq!(ball.vel.y, 210.0, "Half the paddle dy is added");
        assert!(!ball.paddle_bounce);
    }

    #[test]
    fn test_paddle_bounce_debounced_while_overlapping() {
        let mut ball = ball_at(52.0, 470.0, -600.0, 0.0);
        let paddles = [paddle_contact(50.0, 480.0, 0.0)];
        let mut inversions = 0;

        for _ in 0..10 {
            if resolve_paddles(&mut ball, &paddles, 0.5) {
                inversions += 1;
            }
        }

        assert_eq!(inversions, 1, "Continuous overlap inverts exactly once");
        assert_eq!(ball.vel.x, 600.0);
    }

    #[test]
    fn test_paddle_gate_rearms_after_separation() {
        let mut ball = ball_at(52.0, 470.0, -600.0, 0.0);
        let paddles = [paddle_contact(50.0, 480.0, 0.0)];

        assert!(resolve_paddles(&mut ball, &paddles, 0.5));

        ball.pos.x = 300.0;
        ball.sync_bounds();
        assert!(!resolve_paddles(&mut ball, &paddles, 0.5));
        assert!(ball.paddle_bounce, "Clear of every paddle re-arms the gate");

        ball.pos.x = 52.0;
        ball.sync_bounds();
        assert!(resolve_paddles(&mut ball, &paddles, 0.5), "Second contact bounces again");
    }

    #[test]
    fn test_advance_ball_sleeps_without_moving() {
        let config = Config::new();
        let mut events = Events::new();
        let mut ball = ball_at(720.0, 480.0, 630.0, 0.0);
        ball.sleep = 1.5;

        let outcome = advance_ball(&mut ball, &[], &field(), &config, 0.5, &mut events);

        assert_eq!(outcome, BallOutcome::Sleeping);
        assert_eq!(ball.pos, Vec2::new(720.0, 480.0));
        assert!((ball.sleep - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_advance_ball_moves_and_tracks_bounds() {
        let config = Config::new();
        let mut events = Events::new();
        let mut ball = ball_at(720.0, 480.0, 600.0, -240.0);

        let outcome = advance_ball(&mut ball, &[], &field(), &config, DT, &mut events);

        assert_eq!(outcome, BallOutcome::Moved);
        assert!((ball.pos.x - 722.5).abs() < 1e-3);
        assert!((ball.pos.y - 479.0).abs() < 1e-3);
        assert_eq!(ball.bounds.min, ball.pos, "Box follows position");
        assert!(!events.ball_hit_wall && !events.ball_hit_paddle);
    }

    #[test]
    fn test_advance_ball_scoring_frame_does_not_move() {
        let config = Config::new();
        let mut events = Events::new();
        let mut ball = ball_at(-1.0, 480.0, -600.0, 0.0);

        let outcome = advance_ball(&mut ball, &[], &field(), &config, DT, &mut events);

        assert_eq!(outcome, BallOutcome::Scored(Side::Right));
        assert_eq!(ball.pos, Vec2::new(-1.0, 480.0));
    }

    #[test]
    fn test_wall_and_paddle_can_fire_in_same_frame() {
        let config = Config::new();
        let mut events = Events::new();
        // Top-left corner: touching the ceiling and the left paddle at once
        let mut ball = ball_at(52.0, -2.0, -600.0, -100.0);
        let paddles = [paddle_contact(50.0, 40.0, 0.0)];

        advance_ball(&mut ball, &paddles, &field(), &config, DT, &mut events);

        assert!(events.ball_hit_wall, "Wall gate was armed");
        assert!(events.ball_hit_paddle, "Paddle gate was armed");
        assert!(ball.vel.x > 0.0 && ball.vel.y > 0.0);
    }

    #[test]
    fn test_update_ball_without_ball() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();

        let outcome = update_ball(&mut world, &Time::new(DT, 0.0), &GameMap::default(), &config, &mut events);

        assert_eq!(outcome, None, "No ball, nothing to resolve");
    }

    #[test]
    fn test_update_ball_uses_paddles_from_world() {
        let mut world = World::new();
        let config = Config::new();
        let map = GameMap::default();
        let mut events = Events::new();
        let paddle = Paddle::new(Side::Right, Vec2::new(1390.0, 480.0), Vec2::new(16.0, 150.0), Color::WHITE);
        world.spawn((paddle,));
        world.spawn((ball_at(1380.0, 470.0, 600.0, 0.0),));

        update_ball(&mut world, &Time::new(DT, 0.0), &map, &config, &mut events);

        assert!(events.ball_hit_paddle);
        for (_e, ball) in world.query::<&Ball>().iter() {
            assert!(ball.vel.x < 0.0, "Ball should bounce left after hitting right paddle");
        }
    }
}
