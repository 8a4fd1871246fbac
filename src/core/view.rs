//! # View Model
//!
//! Pure projection of [`App`] into what the results area shows. The TUI
//! renders this and the one-shot mode prints it, so both agree on which
//! posts are shown and how bodies are cut.

use crate::core::state::{App, Content};
use crate::feed::{NewsResult, RaceResult, Resource, WeatherResult};

/// Posts shown from a page.
pub const NEWS_DISPLAY_LIMIT: usize = 5;
/// Characters of a post body shown before truncation.
pub const BODY_EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: u16,
    pub description: &'static str,
}

impl WeatherView {
    pub fn from_result(weather: &WeatherResult) -> Self {
        let current = &weather.current_weather;
        Self {
            temperature: current.temperature,
            windspeed: current.windspeed,
            winddirection: current.winddirection,
            weathercode: current.weathercode,
            description: weather_description(current.weathercode),
        }
    }

    /// Label/value rows in display order.
    pub fn rows(&self) -> [(&'static str, String); 4] {
        [
            ("Temperature", format!("{}°C", self.temperature)),
            ("Windspeed", format!("{} km/h", self.windspeed)),
            ("Wind Direction", format!("{}°", self.winddirection)),
            (
                "Weather Code",
                format!("{} ({})", self.weathercode, self.description),
            ),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    pub id: u64,
    pub title: String,
    /// At most [`BODY_EXCERPT_CHARS`] characters of the body.
    pub excerpt: String,
    pub truncated: bool,
    pub likes: u64,
    pub dislikes: u64,
}

impl PostView {
    /// Excerpt with an ellipsis when the body was cut.
    pub fn display_excerpt(&self) -> String {
        if self.truncated {
            format!("{}...", self.excerpt)
        } else {
            self.excerpt.clone()
        }
    }

    pub fn reactions_line(&self) -> String {
        format!("👍 {} | 👎 {}", self.likes, self.dislikes)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaceView {
    pub winner: Resource,
    pub payload_json: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView {
    /// Nothing to show (idle, loading, or failed).
    Placeholder,
    Combined {
        weather: WeatherView,
        news: Vec<PostView>,
    },
    Race(RaceView),
}

pub fn results_view(app: &App) -> ResultsView {
    match &app.content {
        Content::Empty | Content::Failed(_) => ResultsView::Placeholder,
        Content::Combined(combined) => ResultsView::Combined {
            weather: WeatherView::from_result(&combined.weather),
            news: news_view(&combined.news),
        },
        Content::Race(race) => ResultsView::Race(race_view(race)),
    }
}

pub fn news_view(news: &NewsResult) -> Vec<PostView> {
    news.posts
        .iter()
        .take(NEWS_DISPLAY_LIMIT)
        .map(|post| {
            let (excerpt, truncated) = excerpt(&post.body, BODY_EXCERPT_CHARS);
            PostView {
                id: post.id,
                title: post.title.clone(),
                excerpt,
                truncated,
                likes: post.reactions.likes,
                dislikes: post.reactions.dislikes,
            }
        })
        .collect()
}

pub fn race_view(race: &RaceResult) -> RaceView {
    RaceView {
        winner: race.winner(),
        payload_json: race.payload_json(),
    }
}

/// First `max_chars` characters of `text`, and whether anything was cut.
pub fn excerpt(text: &str, max_chars: usize) -> (String, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (text[..byte_index].to_string(), true),
        None => (text.to_string(), false),
    }
}

/// WMO weather interpretation code to a short description.
pub fn weather_description(code: u16) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}

/// Plain-text rendering for non-interactive output.
pub fn plain_text(view: &ResultsView) -> String {
    let mut lines = Vec::new();
    match view {
        ResultsView::Placeholder => lines.push("No data.".to_string()),
        ResultsView::Race(race) => {
            lines.push("Race Result".to_string());
            lines.push(format!("Winner: {}", race.winner));
            lines.push(race.payload_json.clone());
        }
        ResultsView::Combined { weather, news } => {
            lines.push("Weather".to_string());
            for (label, value) in weather.rows() {
                lines.push(format!("  {label}: {value}"));
            }
            lines.push(String::new());
            lines.push("News Headlines".to_string());
            for post in news {
                lines.push(format!("  * {}", post.title));
                lines.push(format!("    {}", post.display_excerpt()));
                lines.push(format!("    {}", post.reactions_line()));
            }
        }
    }
    lines.join("\n")
}
