use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::App;
use crate::core::view::{PostView, ResultsView, WeatherView, results_view};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    Controls, NewsPanel, RacePanel, StatusPanel, TitleBar, WeatherPanel,
};

const STATUS_HEIGHT: u16 = 5;
const FOOTER_TEXT: &str = "1-9 select pattern | r re-run | ↑/↓ scroll | q quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(1),
        Length(Controls::required_height()),
        Length(STATUS_HEIGHT),
        Min(0),
        Length(1),
    ]);
    let [title_area, controls_area, status_area, results_area, footer_area] =
        layout.areas(frame.area());

    TitleBar::new(app.status_message.clone()).render(frame, title_area);
    Controls::new(app.idiom, app.is_loading).render(frame, controls_area);

    StatusPanel {
        idiom: app.idiom,
        is_loading: app.is_loading,
        error: app.error(),
        last_elapsed: app.last_elapsed,
        last_fetched_at: app.last_fetched_at,
        spinner_frame,
    }
    .render(frame, status_area);

    match results_view(app) {
        ResultsView::Placeholder => draw_combined(frame, results_area, None, None),
        ResultsView::Combined { weather, news } => {
            draw_combined(frame, results_area, Some(&weather), Some(news.as_slice()))
        }
        ResultsView::Race(race) => RacePanel {
            race: &race,
            state: &mut tui.race_panel,
        }
        .render(frame, results_area),
    }

    frame.render_widget(
        Line::from(Span::styled(FOOTER_TEXT, Style::default().fg(Color::DarkGray))),
        footer_area,
    );
}

fn draw_combined(
    frame: &mut Frame,
    area: Rect,
    weather: Option<&WeatherView>,
    news: Option<&[PostView]>,
) {
    let [weather_area, news_area] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(area);
    WeatherPanel { weather }.render(frame, weather_area);
    NewsPanel { posts: news }.render(frame, news_area);
}

/// Buffer contents as text, one line per row.
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::idiom::Idiom;
    use crate::core::state::Content;
    use crate::feed::{CombinedResult, Outcome, RaceResult};
    use crate::test_support::{sample_news, sample_weather, test_app};
    use crate::tui::components::news_panel::NEWS_PLACEHOLDER;
    use crate::tui::components::weather_panel::WEATHER_PLACEHOLDER;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Duration;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, app, &mut tui, 0)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn complete(app: &mut App, generation: u64, outcome: Outcome) {
        update(
            app,
            Action::FetchCompleted {
                generation,
                result: Ok(outcome),
                elapsed: Duration::from_millis(90),
            },
        );
    }

    #[test]
    fn test_idle_shows_placeholders() {
        let text = render(&test_app());
        assert!(text.contains(WEATHER_PLACEHOLDER));
        assert!(text.contains(NEWS_PLACEHOLDER));
        assert!(text.contains("Current Pattern: callback"));
        assert!(!text.contains("Loading..."));
    }

    #[test]
    fn test_combined_result_renders_weather_and_first_five_posts() {
        let mut app = test_app();
        update(&mut app, Action::Select(Idiom::PromiseAll));
        complete(
            &mut app,
            1,
            Outcome::Combined(CombinedResult {
                weather: sample_weather(),
                news: sample_news(10),
            }),
        );

        let text = render(&app);
        assert!(text.contains("Temperature: 14.2°C"));
        assert!(text.contains("Windspeed: 11.5 km/h"));
        assert!(text.contains("Wind Direction: 230°"));
        assert!(text.contains("Weather Code: 61 (Rain)"));
        assert!(text.contains("Headline number 1"));
        assert!(text.contains("Headline number 5"));
        assert!(!text.contains("Headline number 6"));
        assert!(!text.contains(WEATHER_PLACEHOLDER));
    }

    #[test]
    fn test_race_result_hides_combined_panels() {
        let mut app = test_app();
        update(&mut app, Action::Select(Idiom::AsyncRace));
        complete(&mut app, 1, Outcome::Race(RaceResult::Weather(sample_weather())));

        let text = render(&app);
        assert!(text.contains("Race Result"));
        assert!(text.contains("Winner: weather"));
        assert!(!text.contains("News Headlines"));
        assert!(!text.contains(NEWS_PLACEHOLDER));
    }

    #[test]
    fn test_loading_clears_previous_results() {
        let mut app = test_app();
        update(&mut app, Action::Select(Idiom::PromiseChain));
        complete(
            &mut app,
            1,
            Outcome::Combined(CombinedResult {
                weather: sample_weather(),
                news: sample_news(3),
            }),
        );
        update(&mut app, Action::Select(Idiom::AsyncRace));

        let text = render(&app);
        assert!(text.contains("Loading..."));
        assert!(text.contains("Current Pattern: asyncRace"));
        assert!(!text.contains("Temperature:"));
        assert!(!text.contains("Headline number"));
    }

    #[test]
    fn test_error_is_shown_in_status() {
        let mut app = test_app();
        app.content = Content::Failed("news fetch failed: HTTP 503".into());
        let text = render(&app);
        assert!(text.contains("Error: news fetch failed: HTTP 503"));
        assert!(text.contains(WEATHER_PLACEHOLDER));
    }
}
