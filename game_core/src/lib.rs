pub mod color;
pub mod components;
pub mod config;
pub mod frame;
pub mod game;
pub mod input;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use color::*;
pub use components::*;
pub use config::*;
pub use frame::*;
pub use game::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;

pub use glam;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one update pass of the Pong simulation
///
/// Paddles move before the ball so the ball always sees fresh `dy`.
/// Once the match is finished only the cosmetic animation keeps running.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    input: &InputState,
    score: &mut Score,
    phase: &mut MatchPhase,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    animate(world, time);

    if phase.is_finished() {
        time.now += time.dt;
        return;
    }

    // 1. Held keys / pointer -> paddle intents
    ingest_inputs(world, input, config);

    // 2. Move paddles and refresh their smoothed dy
    move_paddles(world, time, map, config);

    // 3. Ball against walls and paddles
    if let Some(BallOutcome::Scored(side)) = update_ball(world, time, map, config, events) {
        // 4. Point and re-serve towards the side that conceded
        award_point(score, events, side);
        serve_ball(world, map, config, rng, side.opponent());
    }

    // 5. Badges and the win check
    sync_score_badges(world, score);
    check_match_end(world, map, config, score, phase, events);

    time.now += time.dt;
}

/// Helper to create a paddle entity at its side's spawn point
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let map = config.map();
    let paddle = Paddle::new(
        side,
        map.paddle_spawn(side, config.paddle_inset),
        Vec2::new(config.paddle_width, config.paddle_height),
        config.palette.side(side),
    );
    world.spawn((paddle, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, config: &Config, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_size, config.palette.ball),))
}

/// Helper to create a score badge anchored on its side
pub fn create_score_badge(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let anchor = config.map().score_anchor(side);
    world.spawn((ScoreBadge::new(side, anchor, config.palette.side(side)),))
}
