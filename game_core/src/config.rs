use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::components::Side;
use crate::map::GameMap;
use crate::params::Params;

/// Errors raised while loading or checking a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Colours for both sides and the shared scenery
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub left: Color,
    pub right: Color,
    pub ball: Color,
    pub text: Color,
    pub banner_light: Color,
    pub banner_dark: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(Params::BACKGROUND_RGB),
            left: Color::from_rgb8(Params::LEFT_RGB),
            right: Color::from_rgb8(Params::RIGHT_RGB),
            ball: Color::from_rgb8(Params::BALL_RGB),
            text: Color::from_rgb8(Params::TEXT_RGB),
            banner_light: Color::from_rgb8(Params::BANNER_LIGHT_RGB),
            banner_dark: Color::from_rgb8(Params::BANNER_DARK_RGB),
        }
    }
}

impl Palette {
    pub fn side(&self, side: Side) -> Color {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame cap; `None` runs uncapped
    pub target_fps: Option<u32>,
    pub width: f32,
    pub height: f32,
    pub win_score: u32,
    pub player_speed: f32,
    pub ball_speed: f32,
    pub ball_size: f32,
    pub bounce_decay: f32,
    pub serve_delay: f32,
    pub serve_speedup: f32,
    pub spin_transfer: f32,
    pub dy_smoothing: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    /// Right paddle follows the pointer instead of the arrow keys
    pub pointer_control: bool,
    pub max_dt: f32,
    pub font_size: f32,
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_fps: Some(Params::TARGET_FPS),
            width: Params::SCREEN_WIDTH,
            height: Params::SCREEN_HEIGHT,
            win_score: Params::WIN_SCORE,
            player_speed: Params::PLAYER_SPEED,
            ball_speed: Params::BALL_SPEED,
            ball_size: Params::BALL_SIZE,
            bounce_decay: Params::BOUNCE_DECAY,
            serve_delay: Params::SERVE_DELAY,
            serve_speedup: Params::SERVE_SPEEDUP,
            spin_transfer: Params::SPIN_TRANSFER,
            dy_smoothing: Params::DY_SMOOTHING,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            pointer_control: false,
            max_dt: Params::MAX_DT,
            font_size: Params::FONT_SIZE,
            palette: Palette::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a RON document; omitted fields keep their defaults
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&source)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                })
            }
        }

        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("player_speed", self.player_speed)?;
        positive("ball_speed", self.ball_speed)?;
        positive("ball_size", self.ball_size)?;
        positive("serve_speedup", self.serve_speedup)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("max_dt", self.max_dt)?;
        positive("font_size", self.font_size)?;

        if self.win_score == 0 {
            return Err(ConfigError::Invalid {
                field: "win_score",
                reason: "a match needs at least one point to finish".to_string(),
            });
        }
        if !(self.bounce_decay > 0.0 && self.bounce_decay < 1.0) {
            return Err(ConfigError::Invalid {
                field: "bounce_decay",
                reason: format!("must be in (0, 1), got {}", self.bounce_decay),
            });
        }
        if !(0.0..1.0).contains(&self.dy_smoothing) {
            return Err(ConfigError::Invalid {
                field: "dy_smoothing",
                reason: format!("must be in [0, 1), got {}", self.dy_smoothing),
            });
        }
        if !(self.serve_delay.is_finite() && self.serve_delay >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "serve_delay",
                reason: format!("must not be negative, got {}", self.serve_delay),
            });
        }
        if !(self.spin_transfer.is_finite() && self.spin_transfer >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "spin_transfer",
                reason: format!("must not be negative, got {}", self.spin_transfer),
            });
        }
        if self.target_fps == Some(0) {
            return Err(ConfigError::Invalid {
                field: "target_fps",
                reason: "use None for an uncapped frame rate".to_string(),
            });
        }
        Ok(())
    }

    pub fn map(&self) -> GameMap {
        GameMap::new(self.width, self.height)
    }
}
