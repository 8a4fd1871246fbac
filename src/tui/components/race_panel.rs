//! # RacePanel Component
//!
//! Shows the race winner and its payload as pretty JSON inside a
//! scrollable view. The news payload is long, so the scroll offset
//! persists in [`RacePanelState`] between frames.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::view::RaceView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the payload view. Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct RacePanelState {
    pub scroll_state: ScrollViewState,
}

impl RacePanelState {
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
    }
}

impl EventHandler for RacePanelState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

pub struct RacePanel<'a> {
    pub race: &'a RaceView,
    pub state: &'a mut RacePanelState,
}

impl Component for RacePanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title("Race Result");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [winner_area, payload_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);

        let winner = Line::from(vec![
            Span::styled("Winner: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                self.race.winner.label(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(winner, winner_area);

        // -1 for the scrollbar
        let content_width = payload_area.width.saturating_sub(1);
        let content_height = self.race.payload_json.lines().count() as u16;
        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let payload = Paragraph::new(self.race.payload_json.as_str())
            .style(Style::default().fg(Color::Gray));
        scroll_view.render_widget(payload, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, payload_area, &mut self.state.scroll_state);
    }
}
