use clap::Parser;
use game_core::{run_frame, Clock, Config, DrawList, FrameLimiter, FrameTimer, Game, InputSource, SystemClock};
use input::KeyboardInput;
use macroquad::prelude as mq;
use renderer::{MacroquadMetrics, MacroquadRenderer};

mod cli;
mod input;
mod renderer;

fn window_conf(config: &Config) -> mq::Conf {
    mq::Conf {
        window_title: "Pong".to_owned(),
        window_width: config.width.round() as i32,
        window_height: config.height.round() as i32,
        high_dpi: true,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();
    let config = args.resolve_config()?;

    if args.dump_config {
        println!("{}", config.to_ron_string()?);
        return Ok(());
    }

    let seed = args.seed();
    log::info!("Pong {} starting", env!("CARGO_PKG_VERSION"));
    macroquad::Window::from_config(window_conf(&config), run(config, seed));
    Ok(())
}

async fn run(config: Config, seed: u64) {
    // Window close is reported through the input state instead
    mq::prevent_quit();

    let map = config.map();
    let mut game = Game::new(config, seed);
    let mut renderer = MacroquadRenderer::new(map);
    let mut input = KeyboardInput::new(map, renderer.viewport());
    let metrics = MacroquadMetrics;
    let mut clock = SystemClock::new();
    let mut timer = FrameTimer::new();
    let limiter = FrameLimiter::new(game.config.target_fps);
    let mut list = DrawList::new();

    log::info!("Window ready, frame cap {:?}", game.config.target_fps);

    loop {
        let frame_start = clock.now();
        let dt = timer.tick(frame_start);

        renderer.refresh_viewport();
        input.set_viewport(renderer.viewport());

        let state = input.poll();
        if state.quit {
            break;
        }

        run_frame(&mut game, &state, dt, &mut renderer, &metrics, &mut list);

        if let Some(delay) = limiter.delay(clock.now().saturating_sub(frame_start)) {
            clock.sleep(delay);
        }
        mq::next_frame().await;
    }

    let score = game.score();
    log::info!(
        "Exiting after {} frames at {} - {}",
        renderer.frames(),
        score.left,
        score.right
    );
}
