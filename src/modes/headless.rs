//! Headless runner
//!
//! Plays whole games without a terminal, steering with a greedy [`Autopilot`].
//! Used as a smoke driver from the CLI and as a soak test for the engine
//! invariants.

use anyhow::{Context, Result};
use tracing::info;

use crate::game::{Direction, GameConfig, GameEngine, GameStatus, StepOutcome};
use crate::metrics::SessionMetrics;

/// Heads for the food along the shortest safe direction.
///
/// "Safe" only looks one cell ahead, so the autopilot happily walks into
/// dead ends. That is fine for exercising the engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct Autopilot;

impl Autopilot {
    /// Direction to steer next, or none to keep going straight
    pub fn choose(&self, engine: &GameEngine) -> Option<Direction> {
        let snake = engine.snake();
        let grid = engine.grid();
        let head = snake.head();
        let target = engine.food()?;

        Direction::ALL
            .into_iter()
            .filter(|dir| !snake.heading().is_opposite(*dir))
            .map(|dir| (dir, head.step(dir)))
            .filter(|(_, next)| grid.in_bounds(*next) && !snake.hits_body(*next))
            .min_by_key(|(_, next)| next.col.abs_diff(target.col) + next.row.abs_diff(target.row))
            .map(|(dir, _)| dir)
    }
}

/// How one headless game ended
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub score: u32,
    pub steps: u64,
    pub length: usize,
    pub status: GameStatus,
}

pub struct HeadlessMode {
    engine: GameEngine,
    autopilot: Autopilot,
    metrics: SessionMetrics,
    max_steps: u64,
}

impl HeadlessMode {
    pub fn new(config: GameConfig, max_steps: u64) -> Result<Self> {
        let engine = GameEngine::new(config).context("Failed to start game")?;
        Ok(Self {
            engine,
            autopilot: Autopilot,
            metrics: SessionMetrics::new(),
            max_steps,
        })
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Play `games` games back to back
    pub fn run(&mut self, games: usize) -> Result<Vec<GameSummary>> {
        let mut summaries = Vec::with_capacity(games);

        for game in 0..games {
            if game > 0 {
                self.engine.reset().context("Failed to reset game")?;
                self.metrics.on_game_start();
            }

            let summary = self.play_one();
            info!(
                game = game + 1,
                score = summary.score,
                steps = summary.steps,
                length = summary.length,
                status = ?summary.status,
                "game finished"
            );
            summaries.push(summary);
        }

        info!(
            games = self.metrics.games_played,
            high_score = self.metrics.high_score,
            food = self.metrics.food_eaten,
            wall_deaths = self.metrics.wall_deaths,
            self_deaths = self.metrics.self_deaths,
            "headless run complete"
        );
        Ok(summaries)
    }

    fn play_one(&mut self) -> GameSummary {
        loop {
            if let Some(direction) = self.autopilot.choose(&self.engine) {
                self.engine.steer(direction);
            }

            let before = self.engine.snapshot();
            let outcome = self.engine.step();

            match outcome {
                StepOutcome::Moved | StepOutcome::Ate if self.engine.steps() < self.max_steps => {
                    self.metrics.record(outcome, self.engine.score());
                }
                StepOutcome::Moved
                | StepOutcome::Ate
                | StepOutcome::Filled
                | StepOutcome::Halted => {
                    self.metrics.record(outcome, self.engine.score());
                    return GameSummary {
                        score: self.engine.score(),
                        steps: self.engine.steps(),
                        length: self.engine.snake().len(),
                        status: self.engine.status(),
                    };
                }
                StepOutcome::Died(collision) => {
                    // The reset policy may already have replaced the game, so
                    // report from the last pre-death snapshot.
                    self.metrics.record(outcome, before.score);
                    return GameSummary {
                        score: before.score,
                        steps: before.steps,
                        length: before.body.len(),
                        status: GameStatus::Dead(collision),
                    };
                }
            }
        }
    }
}
