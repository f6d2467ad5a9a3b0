use hecs::World;
use rand::Rng;

use crate::components::{Ball, Paddle, Side, VictoryBanner};
use crate::config::Config;
use crate::input::InputState;
use crate::map::GameMap;
use crate::render::{draw_world, DrawList, TextMeasure};
use crate::resources::{Events, GameRng, MatchPhase, Score, Time};
use crate::systems::serve_ball;
use crate::{create_ball, create_paddle, create_score_badge, step};

/// A complete match: the entity world plus every resource `step` needs
pub struct Game {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub phase: MatchPhase,
    pub events: Events,
    pub rng: GameRng,
}

impl Game {
    /// Spawn badges, paddles and a ball already resting for its first serve
    pub fn new(config: Config, seed: u64) -> Self {
        let map = config.map();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        for side in Side::BOTH {
            create_score_badge(&mut world, &config, side);
            create_paddle(&mut world, &config, side);
        }
        create_ball(
            &mut world,
            &config,
            map.ball_spawn(),
            glam::Vec2::new(config.ball_speed, 0.0),
        );

        let toward = if rng.0.gen_bool(0.5) { Side::Left } else { Side::Right };
        serve_ball(&mut world, &map, &config, &mut rng, toward);

        log::info!(
            "New match on {}x{} field, first to {} (seed {})",
            map.width,
            map.height,
            config.win_score,
            seed
        );

        Self {
            world,
            time: Time::default(),
            map,
            config,
            score: Score::new(),
            phase: MatchPhase::Playing,
            events: Events::new(),
            rng,
        }
    }

    /// Advance by a raw frame delta; bad clock readings are sanitized first
    pub fn update(&mut self, input: &InputState, raw_dt: f32) {
        self.time.dt = Time::sanitize_dt(raw_dt, self.config.max_dt);
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            input,
            &mut self.score,
            &mut self.phase,
            &mut self.events,
            &mut self.rng,
        );
    }

    /// Replace `list` with this frame's draw commands
    pub fn draw(&self, metrics: &dyn TextMeasure, list: &mut DrawList) {
        list.clear();
        draw_world(&self.world, &self.config, metrics, list);
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }

    pub fn banner(&self) -> Option<VictoryBanner> {
        self.world
            .query::<&VictoryBanner>()
            .iter()
            .next()
            .map(|(_e, b)| b.clone())
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }
}
