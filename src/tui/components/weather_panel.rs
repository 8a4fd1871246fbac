use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::view::WeatherView;
use crate::tui::component::Component;

pub const WEATHER_PLACEHOLDER: &str = "Select a method to fetch weather data";

/// Current conditions, or a placeholder before anything is fetched.
pub struct WeatherPanel<'a> {
    pub weather: Option<&'a WeatherView>,
}

impl Component for WeatherPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = match self.weather {
            Some(weather) => weather
                .rows()
                .into_iter()
                .map(|(label, value)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{label}: "),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(value),
                    ])
                })
                .collect(),
            None => vec![Line::from(Span::styled(
                WEATHER_PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))],
        };

        let paragraph = Paragraph::new(lines).block(Block::bordered().title("Weather"));
        frame.render_widget(paragraph, area);
    }
}
