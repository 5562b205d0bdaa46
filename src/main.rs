use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_snake::game::{DeathPolicy, GameConfig};
use grid_snake::modes::{HeadlessMode, PlayMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a fixed grid, played in the terminal")]
struct Cli {
    /// How to run the game
    #[arg(long, value_enum, default_value = "play")]
    mode: Mode,

    /// TOML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Cell edge length in pixels
    #[arg(long)]
    cell_size: Option<u32>,

    /// Initial snake length
    #[arg(long)]
    length: Option<usize>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// What happens when the snake dies
    #[arg(long, value_enum)]
    on_death: Option<OnDeath>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Number of games to play in headless mode
    #[arg(long, default_value = "10")]
    games: usize,

    /// Step cap per headless game
    #[arg(long, default_value = "10000")]
    max_steps: u64,

    /// Write logs here (play mode owns the terminal, so logs are dropped otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Play,
    /// Let the autopilot play without a terminal
    Headless,
}

#[derive(Clone, Copy, ValueEnum)]
enum OnDeath {
    Freeze,
    Reset,
}

impl From<OnDeath> for DeathPolicy {
    fn from(value: OnDeath) -> Self {
        match value {
            OnDeath::Freeze => DeathPolicy::Freeze,
            OnDeath::Reset => DeathPolicy::Reset,
        }
    }
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.window_width = width;
        }
        if let Some(height) = self.height {
            config.window_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(length) = self.length {
            config.initial_snake_length = length;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(on_death) = self.on_death {
            config.on_death = on_death.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match (&cli.log_file, cli.mode) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        (None, Mode::Headless) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        (None, Mode::Play) => {}
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = cli.game_config()?;

    match cli.mode {
        Mode::Play => {
            let mut play_mode = PlayMode::new(config)?;
            play_mode.run().await?;
        }
        Mode::Headless => {
            let mut headless = HeadlessMode::new(config, cli.max_steps)?;
            let summaries = headless.run(cli.games)?;
            let metrics = headless.metrics();
            println!(
                "Played {} games: best score {}, {} food eaten, {} wall deaths, {} self collisions",
                summaries.len(),
                metrics.high_score,
                metrics.food_eaten,
                metrics.wall_deaths,
                metrics.self_deaths,
            );
        }
    }

    Ok(())
}
