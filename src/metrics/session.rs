use std::time::{Duration, Instant};

use crate::game::{Collision, StepOutcome};

/// Per-session counters shown in the header and logged by the headless runner
#[derive(Debug, Clone)]
pub struct SessionMetrics {
    started: Option<Instant>,
    banked: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub food_eaten: u32,
    pub wall_deaths: u32,
    pub self_deaths: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            started: Some(Instant::now()),
            banked: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            food_eaten: 0,
            wall_deaths: 0,
            self_deaths: 0,
        }
    }

    /// Play time of the current game, excluding paused stretches
    pub fn elapsed(&self) -> Duration {
        self.banked + self.started.map(|at| at.elapsed()).unwrap_or_default()
    }

    pub fn is_paused(&self) -> bool {
        self.started.is_none()
    }

    pub fn pause(&mut self) {
        if let Some(at) = self.started.take() {
            self.banked += at.elapsed();
        }
    }

    pub fn resume(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    pub fn on_game_start(&mut self) {
        self.started = Some(Instant::now());
        self.banked = Duration::ZERO;
    }

    /// Fold one tick into the counters. `score` is the score after the tick.
    pub fn record(&mut self, outcome: StepOutcome, score: u32) {
        match outcome {
            StepOutcome::Ate => self.food_eaten += 1,
            StepOutcome::Filled => {
                self.food_eaten += 1;
                self.finish(score);
            }
            StepOutcome::Died(Collision::Wall) => {
                self.wall_deaths += 1;
                self.finish(score);
            }
            StepOutcome::Died(Collision::SelfCollision) => {
                self.self_deaths += 1;
                self.finish(score);
            }
            StepOutcome::Moved | StepOutcome::Halted => {}
        }
    }

    fn finish(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
        self.pause();
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
