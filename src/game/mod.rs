//! Core game logic for Snake
//!
//! Grid model, snake state, food placement and the tick engine. Nothing in
//! here touches the terminal, so it can be driven by the play mode, the
//! headless runner, or tests alike.

pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use config::{DeathPolicy, GameConfig};
pub use direction::Direction;
pub use engine::{Collision, GameEngine, GameStatus, Snapshot, StepOutcome};
pub use error::{ConfigError, ConfigFileError, GameError};
pub use food::{FoodPlacer, MAX_SAMPLING_ATTEMPTS};
pub use grid::{Cell, Grid};
pub use snake::Snake;
