use std::path::PathBuf;

use thiserror::Error;

use super::grid::Cell;

/// Configuration rejected before a game can start.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("window {width}x{height} is too small for {cell_size}px cells")]
    EmptyGrid {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("initial snake length must be at least 1")]
    ZeroLength,
    #[error("initial snake length {length} does not fit in {available} columns behind the center")]
    SnakeTooLong { length: usize, available: usize },
    #[error("a {cols}x{rows} grid leaves no room for food next to a snake of length {length}")]
    NoRoomForFood { cols: u32, rows: u32, length: usize },
    #[error("tick interval must be positive")]
    ZeroTickInterval,
}

/// A config file that could not be read or parsed.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised while building or seeding a game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("every cell of the grid is occupied; food cannot be placed")]
    GridFull,
    #[error("snake body must contain at least one cell")]
    EmptyBody,
    #[error("snake cell {cell:?} lies outside the grid")]
    OutOfBounds { cell: Cell },
    #[error("snake body overlaps itself at {cell:?}")]
    Overlap { cell: Cell },
    #[error("snake body is not contiguous after segment {index}")]
    Discontiguous { index: usize },
    #[error("food at {cell:?} lies on the snake or outside the grid")]
    InvalidFood { cell: Cell },
}
