use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::config::Config;
use crate::map::GameMap;
use crate::resources::Time;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, time: &Time, map: &GameMap, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        match intent.target_y {
            Some(y) => paddle.pos.y = y,
            None => paddle.pos.y += intent.velocity * time.dt,
        }
        update_paddle(paddle, map, time.dt, config.dy_smoothing);
    }
}

/// Clamp, re-derive bounds and refresh the smoothed vertical speed
///
/// `dy` keeps `smoothing` of its previous value, so a constant command
/// approaches its speed from below without overshooting. A zero `dt`
/// leaves `dy` untouched.
pub fn update_paddle(paddle: &mut Paddle, map: &GameMap, dt: f32, smoothing: f32) {
    paddle.pos.y = map.clamp_y(paddle.pos.y);
    paddle.sync_bounds();

    if dt > 0.0 {
        let raw_dy = (paddle.pos.y - paddle.prev_y) / dt;
        paddle.dy = lerp(raw_dy, paddle.dy, smoothing);
    }
    paddle.prev_y = paddle.pos.y;
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}
