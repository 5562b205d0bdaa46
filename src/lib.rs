//! Grid Snake - a snake game on a fixed-size lattice
//!
//! This library provides:
//! - Core game logic: grid, snake, food placement, tick engine (game module)
//! - Keyboard mapping with reversal filtering (input module)
//! - Terminal rendering of engine snapshots (render module)
//! - Session counters (metrics module)
//! - Interactive and headless drivers (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
