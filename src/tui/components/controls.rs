//! # Controls Component
//!
//! The idiom "buttons": one bordered group per [`IdiomGroup`], each entry
//! prefixed with its hotkey. Also maps key presses to selections.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::idiom::{Idiom, IdiomGroup};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// What a key press on the controls asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Select(Idiom),
    Rerun,
}

pub struct Controls {
    /// Currently selected idiom (highlighted)
    pub active: Idiom,
    /// Dims the entries while a fetch is in flight
    pub is_loading: bool,
}

impl Controls {
    pub fn new(active: Idiom, is_loading: bool) -> Self {
        Self { active, is_loading }
    }

    /// Rows needed: the largest group plus borders.
    pub fn required_height() -> u16 {
        let tallest = IdiomGroup::ALL
            .iter()
            .map(|g| g.idioms().count())
            .max()
            .unwrap_or(0);
        tallest as u16 + 2
    }

    fn entry(&self, idiom: Idiom) -> Line<'static> {
        let mut style = Style::default();
        if idiom == self.active {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        if self.is_loading {
            style = style.add_modifier(Modifier::DIM);
        }
        Line::from(vec![
            Span::styled(format!("[{}] ", idiom.hotkey()), Style::default().fg(Color::DarkGray)),
            Span::styled(idiom.label(), style),
        ])
    }
}

impl Component for Controls {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let columns = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

        for (group, column) in IdiomGroup::ALL.iter().zip(columns.iter()) {
            let lines: Vec<Line> = group.idioms().map(|idiom| self.entry(idiom)).collect();
            let paragraph = Paragraph::new(lines).block(
                Block::bordered()
                    .title(group.title())
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
            frame.render_widget(paragraph, *column);
        }
    }
}

impl EventHandler for Controls {
    type Event = ControlEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar('r') => Some(ControlEvent::Rerun),
            TuiEvent::InputChar(c) => Idiom::from_hotkey(*c).map(ControlEvent::Select),
            _ => None,
        }
    }
}
