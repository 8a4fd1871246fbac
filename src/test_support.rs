//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::core::state::App;
use crate::feed::{
    CurrentWeather, FeedSource, FetchError, NewsResult, Post, Reactions, Resource, WeatherResult,
};

/// A request lifecycle event recorded by [`StubSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Started(Resource),
    Finished(Resource),
}

struct Reply<T> {
    delay: Duration,
    result: Result<T, FetchError>,
}

/// A feed source with canned replies and controllable latency.
///
/// `Started` is recorded when the request future is first polled and
/// `Finished` after its delay elapses, so a dropped request never finishes.
/// Pair with `#[tokio::test(start_paused = true)]` for deterministic timing.
pub struct StubSource {
    weather: Reply<WeatherResult>,
    news: Reply<NewsResult>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Default for StubSource {
    fn default() -> Self {
        Self::new()
    }
}

impl StubSource {
    pub fn new() -> Self {
        Self {
            weather: Reply {
                delay: Duration::from_millis(30),
                result: Ok(sample_weather()),
            },
            news: Reply {
                delay: Duration::from_millis(60),
                result: Ok(sample_news(10)),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn weather_after(mut self, delay: Duration) -> Self {
        self.weather.delay = delay;
        self
    }

    pub fn news_after(mut self, delay: Duration) -> Self {
        self.news.delay = delay;
        self
    }

    pub fn weather_fails(mut self, err: FetchError) -> Self {
        self.weather.result = Err(err);
        self
    }

    pub fn news_fails(mut self, err: FetchError) -> Self {
        self.news.result = Err(err);
        self
    }

    pub fn with_news(mut self, news: NewsResult) -> Self {
        self.news.result = Ok(news);
        self
    }

    /// Snapshot of recorded calls, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: Call) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    async fn reply<T: Clone>(&self, resource: Resource, reply: &Reply<T>) -> Result<T, FetchError> {
        self.record(Call::Started(resource));
        tokio::time::sleep(reply.delay).await;
        self.record(Call::Finished(resource));
        reply.result.clone()
    }
}

#[async_trait]
impl FeedSource for StubSource {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_weather(&self) -> Result<WeatherResult, FetchError> {
        self.reply(Resource::Weather, &self.weather).await
    }

    async fn fetch_news(&self) -> Result<NewsResult, FetchError> {
        self.reply(Resource::News, &self.news).await
    }
}

pub fn sample_weather() -> WeatherResult {
    WeatherResult {
        latitude: Some(51.5),
        longitude: Some(-0.12),
        current_weather: CurrentWeather {
            temperature: 14.2,
            windspeed: 11.5,
            winddirection: 230.0,
            weathercode: 61,
            time: Some("2026-10-14T09:00".to_string()),
            is_day: Some(1),
        },
    }
}

/// `count` posts with ids 1..=count and bodies longer than 100 characters.
pub fn sample_news(count: u64) -> NewsResult {
    let posts = (1..=count)
        .map(|id| Post {
            id,
            title: format!("Headline number {id}"),
            body: format!("Post {id} body. {}", "lorem ipsum dolor sit amet ".repeat(6)),
            reactions: Reactions {
                likes: id * 10,
                dislikes: id,
            },
            tags: vec!["history".to_string()],
            views: Some(id * 100),
        })
        .collect();
    NewsResult {
        posts,
        total: Some(251),
        skip: Some(0),
        limit: Some(count),
    }
}

pub fn test_app() -> App {
    App::new(crate::core::idiom::Idiom::default())
}
