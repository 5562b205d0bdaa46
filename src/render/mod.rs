//! Terminal render adapter. Reads snapshots, never mutates game state.

pub mod renderer;

pub use renderer::Renderer;
