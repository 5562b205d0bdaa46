use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigFileError};
use super::grid::Grid;

/// What the engine does once the snake dies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeathPolicy {
    /// Stay dead until the host restarts the game
    #[default]
    Freeze,
    /// Start a fresh game right away
    Reset,
}

/// Configuration for the game
///
/// Everything is fixed at startup. Missing fields in a config file fall back
/// to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Real-time delay between two ticks
    pub tick_interval_ms: u64,
    pub on_death: DeathPolicy,
    /// Fixed seed for food placement; entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 480,
            cell_size: 16,
            initial_snake_length: 5,
            tick_interval_ms: 75,
            on_death: DeathPolicy::Freeze,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom window size
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            window_width,
            window_height,
            ..Default::default()
        }
    }

    /// Configuration sized to exactly `cols` x `rows` cells
    pub fn with_grid(cols: u32, rows: u32) -> Self {
        let defaults = Self::default();
        Self {
            window_width: cols * defaults.cell_size,
            window_height: rows * defaults.cell_size,
            ..defaults
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self {
            initial_snake_length: 3,
            ..Self::with_grid(10, 10)
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::from_window(self.window_width, self.window_height, self.cell_size)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Parse a TOML document
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigFileError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Reject configurations that cannot start a game.
    ///
    /// The initial snake starts at the grid center heading right, so its body
    /// must fit between the center column and the left wall, and at least one
    /// cell must stay free for food.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        let grid = self.grid();
        if grid.cell_count() == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.window_width,
                height: self.window_height,
                cell_size: self.cell_size,
            });
        }

        let length = self.initial_snake_length;
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }

        let available = grid.center().col as usize + 1;
        if length > available {
            return Err(ConfigError::SnakeTooLong { length, available });
        }

        if length >= grid.cell_count() {
            return Err(ConfigError::NoRoomForFood {
                cols: grid.cols(),
                rows: grid.rows(),
                length,
            });
        }

        Ok(())
    }
}
