use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use game_core::Config;

/// Two-player local Pong.
#[derive(Parser, Debug)]
#[command(name = "pong", version, about)]
pub struct Args {
    /// RON file with tuning overrides; omitted fields keep their defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Points needed to win the match.
    #[arg(long, value_name = "N")]
    pub win_score: Option<u32>,

    /// Frame cap, 0 runs uncapped.
    #[arg(long, value_name = "N")]
    pub fps: Option<u32>,

    /// Seed for serve directions; defaults to the current time.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Player 2 follows the mouse instead of the arrow keys.
    #[arg(long)]
    pub pointer: bool,

    /// Print the effective configuration as RON and exit.
    #[arg(long)]
    pub dump_config: bool,
}

impl Args {
    /// File (or defaults) with command-line overrides applied on top
    pub fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => Config::new(),
        };

        if let Some(win_score) = self.win_score {
            config.win_score = win_score;
        }
        if let Some(fps) = self.fps {
            config.target_fps = (fps > 0).then_some(fps);
        }
        if self.pointer {
            config.pointer_control = true;
        }

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
