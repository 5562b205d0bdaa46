use std::collections::HashSet;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, Collision, GameStatus, Snapshot};
use crate::metrics::SessionMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &SessionMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);

        let game_area = chunks[1];
        match snapshot.status {
            GameStatus::Running => {
                frame.render_widget(self.render_grid(snapshot, metrics.is_paused()), game_area)
            }
            GameStatus::Dead(collision) => frame.render_widget(
                self.render_game_over(Self::death_message(collision), Color::Red, snapshot),
                game_area,
            ),
            GameStatus::Filled => frame.render_widget(
                self.render_game_over("GRID FILLED", Color::Green, snapshot),
                game_area,
            ),
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn death_message(collision: Collision) -> &'static str {
        match collision {
            Collision::Wall => "GAME OVER - hit the wall",
            Collision::SelfCollision => "GAME OVER - bit your own tail",
        }
    }

    fn render_grid(&self, snapshot: &Snapshot, paused: bool) -> Paragraph<'static> {
        let head = snapshot.body.first().copied();
        let body: HashSet<Cell> = snapshot.body.iter().copied().collect();
        let grid = snapshot.grid;

        let lines: Vec<Line> = (0..grid.rows() as i32)
            .map(|row| {
                let spans: Vec<Span> = (0..grid.cols() as i32)
                    .map(|col| {
                        let cell = Cell::new(col, row);
                        if Some(cell) == head {
                            Span::styled(
                                "■ ",
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            )
                        } else if body.contains(&cell) {
                            Span::styled("□ ", Style::default().fg(Color::Green))
                        } else if Some(cell) == snapshot.food {
                            Span::styled(
                                "O ",
                                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                            )
                        } else {
                            Span::styled(". ", Style::default().fg(Color::DarkGray))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let title = if paused { " Snake (paused) " } else { " Snake " };

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(title),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &SessionMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(snapshot.body.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(
        &self,
        headline: &'static str,
        color: Color,
        snapshot: &Snapshot,
    ) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
