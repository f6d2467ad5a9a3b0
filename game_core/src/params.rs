/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Frame rate
    pub const TARGET_FPS: u32 = 240;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps

    // Playfield
    pub const SCREEN_WIDTH: f32 = 1440.0;
    pub const SCREEN_HEIGHT: f32 = 960.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 150.0;
    pub const PADDLE_INSET: f32 = 50.0; // distance from the side edge to the paddle centre
    pub const PLAYER_SPEED: f32 = 1200.0; // units per second
    pub const DY_SMOOTHING: f32 = 0.9; // weight kept from the previous dy estimate
    pub const PADDLE_STROKE: f32 = 6.0;
    pub const PADDLE_TILT: f32 = 0.005; // dy -> slant of the drawn paddle

    // Ball
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_SPEED: f32 = 600.0;
    pub const SERVE_SPEEDUP: f32 = 1.05; // horizontal speed multiplier on each serve
    pub const SERVE_DELAY: f32 = 1.5; // seconds the ball rests before relaunch
    pub const BOUNCE_DECAY: f32 = 0.6; // top/bottom walls keep this much vertical speed
    pub const SPIN_TRANSFER: f32 = 0.5; // fraction of paddle dy added to the ball
    pub const BALL_HUE_RATE: f32 = 24.0; // degrees per second
    pub const INDICATOR_NEAR: f32 = 15.0;
    pub const INDICATOR_FAR: f32 = 20.0;
    pub const INDICATOR_STROKE: f32 = 3.0;

    // Score
    pub const WIN_SCORE: u32 = 5;
    pub const SCORE_ANCHOR_X: f32 = 400.0; // from the nearest side edge
    pub const SCORE_ANCHOR_Y: f32 = 100.0;
    pub const SCORE_TEXT_OFFSET: [f32; 2] = [-26.0, -22.0];
    pub const SCORE_TICK_INNER: f32 = 40.0;
    pub const SCORE_TICK_OUTER: f32 = 50.0;
    pub const SCORE_TICK_STROKE: f32 = 3.0;
    pub const SCORE_SPIN_RATE: f32 = 0.3; // radians per second

    // Victory banner
    pub const BANNER_PADDING: f32 = 25.0;
    pub const BANNER_HUE_RATE: f32 = 120.0; // degrees per second

    // Text
    pub const FONT_SIZE: f32 = 48.0;

    // Palette (RGB)
    pub const BACKGROUND_RGB: [u8; 3] = [10, 15, 20];
    pub const LEFT_RGB: [u8; 3] = [176, 255, 54];
    pub const RIGHT_RGB: [u8; 3] = [255, 58, 100];
    pub const BALL_RGB: [u8; 3] = [150, 255, 255];
    pub const TEXT_RGB: [u8; 3] = [255, 255, 255];
    pub const BANNER_LIGHT_RGB: [u8; 3] = [100, 210, 240];
    pub const BANNER_DARK_RGB: [u8; 3] = [10, 15, 20];
}
