use hecs::World;

use crate::components::{Ball, ScoreBadge, VictoryBanner};
use crate::params::Params;
use crate::resources::Time;

/// Advance purely cosmetic state: ball hue, badge spin, banner pulse
pub fn animate(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.hue = (ball.hue + Params::BALL_HUE_RATE * time.dt) % 360.0;
    }
    for (_entity, badge) in world.query_mut::<&mut ScoreBadge>() {
        badge.time += time.dt * Params::SCORE_SPIN_RATE;
    }
    for (_entity, banner) in world.query_mut::<&mut VictoryBanner>() {
        banner.hue = (banner.hue + Params::BANNER_HUE_RATE * time.dt) % 360.0;
    }
}
