//! Keyboard input: raw key events to direction intents and control actions

pub mod handler;

pub use handler::{InputHandler, KeyAction, key_direction, map_direction};
