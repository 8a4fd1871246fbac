//! # StatusPanel Component
//!
//! Shows the active pattern, a spinner while loading, the error line and
//! timing of the last completed fetch.

use std::time::Duration;

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::idiom::Idiom;
use crate::tui::component::Component;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct StatusPanel<'a> {
    pub idiom: Idiom,
    pub is_loading: bool,
    pub error: Option<&'a str>,
    pub last_elapsed: Option<Duration>,
    pub last_fetched_at: Option<DateTime<Local>>,
    pub spinner_frame: usize,
}

impl<'a> StatusPanel<'a> {
    fn lines(&self) -> Vec<Line<'a>> {
        let mut pattern = vec![
            Span::styled("Current Pattern: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(self.idiom.key()),
            Span::styled(
                format!(" ({})", self.idiom.strategy().label()),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if let (Some(elapsed), Some(at)) = (self.last_elapsed, self.last_fetched_at) {
            pattern.push(Span::styled(
                format!("  last: {}ms at {}", elapsed.as_millis(), at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let mut lines = vec![Line::from(pattern)];
        if self.is_loading {
            let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
            lines.push(Line::from(Span::styled(
                format!("{spinner} Loading..."),
                Style::default().fg(Color::Yellow),
            )));
        }
        if let Some(error) = self.error {
            lines.push(Line::from(Span::styled(
                format!("Error: {error}"),
                Style::default().fg(Color::Red),
            )));
        }
        lines
    }
}

impl Component for StatusPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .block(Block::bordered().title("Status"))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
