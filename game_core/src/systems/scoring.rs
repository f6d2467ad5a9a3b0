use hecs::World;

use crate::components::{Ball, ScoreBadge, Side, VictoryBanner};
use crate::config::Config;
use crate::map::GameMap;
use crate::resources::{Events, GameRng, MatchPhase, Score};

/// Credit a point; the only place that writes to `Score`
pub fn award_point(score: &mut Score, events: &mut Events, side: Side) {
    score.award(side);
    match side {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
    log::info!(
        "{} scores ({} - {})",
        side.label(),
        score.left,
        score.right
    );
}

/// Put the ball back at the centre, aimed at `toward`, resting for the serve delay
pub fn serve_ball(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng, toward: Side) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(
            map.ball_spawn(),
            toward,
            config.serve_speedup,
            config.serve_delay,
            rng,
        );
        log::info!("Serving towards {}, vel={:?}", toward.label(), ball.vel);
    }
}

/// Mirror the match counters onto the score badges
pub fn sync_score_badges(world: &mut World, score: &Score) {
    for (_entity, badge) in world.query_mut::<&mut ScoreBadge>() {
        badge.points = score.points(badge.side);
    }
}

/// Move to `Finished` once a side reaches the threshold
///
/// The whole entity set is swapped for a single victory banner in one go,
/// so no frame ever draws a half-torn-down match. Returns the winner on
/// the transition frame only.
pub fn check_match_end(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &Score,
    phase: &mut MatchPhase,
    events: &mut Events,
) -> Option<Side> {
    if phase.is_finished() {
        return None;
    }

    let winner = score.has_winner(config.win_score)?;
    let banner = VictoryBanner::new(
        format!("{} wins!", winner.label()),
        map.center(),
        config.palette.side(winner),
        config.palette.banner_light,
        config.palette.banner_dark,
    );

    world.clear();
    world.spawn((banner,));
    *phase = MatchPhase::Finished { winner };
    events.match_finished = true;

    log::info!(
        "Match finished: {} wins {} - {}",
        winner.label(),
        score.left,
        score.right
    );
    Some(winner)
}
