pub mod headless;
pub mod play;

pub use headless::{Autopilot, GameSummary, HeadlessMode};
pub use play::PlayMode;
