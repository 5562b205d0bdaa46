use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::info;

use crate::game::{GameConfig, GameEngine, StepOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Interactive terminal game
pub struct PlayMode {
    engine: GameEngine,
    metrics: SessionMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    paused: bool,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let engine = GameEngine::new(config).context("Failed to start game")?;

        Ok(Self {
            engine,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            paused: false,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        info!(
            games = self.metrics.games_played,
            high_score = self.metrics.high_score,
            "session ended"
        );
        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut render_timer = interval(RENDER_INTERVAL);
        render_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event)?,
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    if !self.paused {
                        self.update_game();
                    }
                }

                _ = render_timer.tick() => {
                    let snapshot = self.engine.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let heading = self.engine.snake().heading();
        match self.input_handler.handle_key_event(key, heading) {
            KeyAction::Steer(direction) => {
                if !self.paused {
                    self.engine.steer(direction);
                }
            }
            KeyAction::TogglePause => self.toggle_pause(),
            KeyAction::Restart => self.restart()?,
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }

        Ok(())
    }

    fn update_game(&mut self) {
        let score_before = self.engine.score();
        let outcome = self.engine.step();
        let score = match outcome {
            StepOutcome::Died(_) => score_before,
            _ => self.engine.score(),
        };
        self.metrics.record(outcome, score);

        // Under the reset policy the engine is already running a new game
        if matches!(outcome, StepOutcome::Died(_)) && self.engine.is_alive() {
            self.metrics.on_game_start();
        }
    }

    fn toggle_pause(&mut self) {
        if !self.engine.is_alive() {
            return;
        }
        self.paused = !self.paused;
        if self.paused {
            self.metrics.pause();
        } else {
            self.metrics.resume();
        }
    }

    fn restart(&mut self) -> Result<()> {
        self.engine.reset().context("Failed to restart game")?;
        self.metrics.on_game_start();
        self.paused = false;
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
