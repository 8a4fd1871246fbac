//! Payload types for the two feeds and the shapes a fetch can produce.
//!
//! The field names mirror the upstream JSON (Open-Meteo `current_weather`,
//! DummyJSON `posts`) so the structs deserialize directly from the response
//! body. A missing required field is a shape error, not a default.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two endpoints a value or an error belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Weather,
    News,
}

impl Resource {
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Weather => "weather",
            Resource::News => "news",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Weather
// ============================================================================

/// Top-level forecast response. Only `current_weather` is required.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    pub current_weather: CurrentWeather,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Degrees Celsius
    pub temperature: f64,
    /// km/h
    pub windspeed: f64,
    /// Degrees
    pub winddirection: f64,
    /// WMO weather interpretation code
    pub weathercode: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_day: Option<u8>,
}

// ============================================================================
// News
// ============================================================================

/// One page of posts. Order is preserved from the response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewsResult {
    pub posts: Vec<Post>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub reactions: Reactions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reactions {
    pub likes: u64,
    pub dislikes: u64,
}

// ============================================================================
// Fetch results
// ============================================================================

/// Both payloads from one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedResult {
    pub weather: WeatherResult,
    pub news: NewsResult,
}

/// Whichever payload arrived first, tagged by source.
#[derive(Debug, Clone, PartialEq)]
pub enum RaceResult {
    Weather(WeatherResult),
    News(NewsResult),
}

impl RaceResult {
    pub fn winner(&self) -> Resource {
        match self {
            RaceResult::Weather(_) => Resource::Weather,
            RaceResult::News(_) => Resource::News,
        }
    }

    /// The winning payload as pretty-printed JSON.
    pub fn payload_json(&self) -> String {
        let rendered = match self {
            RaceResult::Weather(w) => serde_json::to_string_pretty(w),
            RaceResult::News(n) => serde_json::to_string_pretty(n),
        };
        // Plain structs of strings and numbers always serialize
        rendered.unwrap_or_default()
    }
}

/// What a single fetch produces, depending on the strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Combined(CombinedResult),
    Race(RaceResult),
}
