use hecs::World;

use crate::components::*;
use crate::config::Config;
use crate::input::InputState;

/// Turn held keys (or the pointer) into paddle movement intents
pub fn ingest_inputs(world: &mut World, input: &InputState, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.velocity = input.vertical(paddle.side) * config.player_speed;
        intent.target_y = if config.pointer_control && paddle.side == Side::Right {
            input.pointer_y
        } else {
            None
        };
    }
}
