//! Frame loop: delta, input, update, draw, present, throttle
//!
//! The window, input devices and clock are all behind traits so the loop
//! can run headless. A frontend with its own event pump (an async
//! `next_frame`, say) can drive `run_frame` directly with `FrameTimer` and
//! `FrameLimiter` instead of calling `run`.

use std::time::{Duration, Instant};

use crate::game::Game;
use crate::input::InputState;
use crate::render::{DrawCommand, DrawList, TextMeasure};

/// Non-blocking sample of the current input state
pub trait InputSource {
    fn poll(&mut self) -> InputState;
}

/// Consumes draw commands; presentation is fire-and-forget
pub trait Renderer {
    fn draw(&mut self, command: &DrawCommand);
    fn present(&mut self);
}

pub trait Clock {
    /// Monotonic time since some fixed origin
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by `Instant` and `thread::sleep`
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Seconds elapsed between consecutive ticks
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameTimer {
    last: Option<Duration>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delta since the previous tick; the first tick reports zero
    pub fn tick(&mut self, now: Duration) -> f32 {
        let dt = match self.last {
            Some(last) => now.saturating_sub(last).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

/// Works out how long to sleep to hold a target frame rate
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    frame: Option<Duration>,
}

impl FrameLimiter {
    /// `None` or `Some(0)` runs uncapped
    pub fn new(target_fps: Option<u32>) -> Self {
        let frame = target_fps
            .filter(|fps| *fps > 0)
            .map(|fps| Duration::from_secs_f64(1.0 / fps as f64));
        Self { frame }
    }

    /// Remaining budget after a frame that took `frame_elapsed`
    pub fn delay(&self, frame_elapsed: Duration) -> Option<Duration> {
        let frame = self.frame?;
        let remaining = frame.saturating_sub(frame_elapsed);
        (!remaining.is_zero()).then_some(remaining)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub frames: u64,
    /// Sum of the deltas handed to the simulation
    pub simulated: f32,
}

/// One pass: update fully, then draw everything, then present
pub fn run_frame(
    game: &mut Game,
    input: &InputState,
    dt: f32,
    renderer: &mut dyn Renderer,
    metrics: &dyn TextMeasure,
    list: &mut DrawList,
) {
    game.update(input, dt);
    game.draw(metrics, list);
    for command in list.iter() {
        renderer.draw(command);
    }
    renderer.present();
}

/// Drive `game` until the input source reports quit
///
/// Quit is checked right after sampling, so the frame that sees it runs
/// neither update nor draw.
pub fn run<I, R, C>(
    game: &mut Game,
    input: &mut I,
    renderer: &mut R,
    clock: &mut C,
    metrics: &dyn TextMeasure,
) -> FrameStats
where
    I: InputSource,
    R: Renderer,
    C: Clock,
{
    let mut timer = FrameTimer::new();
    let limiter = FrameLimiter::new(game.config.target_fps);
    let mut list = DrawList::new();
    let mut stats = FrameStats::default();

    loop {
        let frame_start = clock.now();
        let dt = timer.tick(frame_start);

        let state = input.poll();
        if state.quit {
            log::info!("Quit requested after {} frames", stats.frames);
            break;
        }

        run_frame(game, &state, dt, renderer, metrics, &mut list);
        stats.frames += 1;
        stats.simulated += game.time.dt;

        if let Some(delay) = limiter.delay(clock.now().saturating_sub(frame_start)) {
            clock.sleep(delay);
        }
    }

    stats
}
