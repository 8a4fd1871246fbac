//! # Fetch Orchestration
//!
//! One operation, "fetch weather and news", run under one of three
//! strategies:
//!
//! ```text
//! Sequential     weather ──▶ news                 latency ≈ a + b
//! ConcurrentAll  weather ─┐                       latency ≈ max(a, b)
//!                news    ─┴─▶ both or first error
//! Race           weather ─┐                       latency ≈ min(a, b)
//!                news    ─┴─▶ first to finish (loser dropped)
//! ```
//!
//! The callback idiom is [`with_callback`]: the sequential strategy with its
//! result handed to a continuation instead of returned.

use std::time::Instant;

use futures::future::{self, Either};
use log::{debug, info, warn};

use super::source::{FeedSource, FetchError};
use super::types::{CombinedResult, Outcome, RaceResult};

/// How the two requests are scheduled relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// News is issued only after the weather response arrives.
    Sequential,
    /// Both issued up front; waits for both, fails on the first error.
    ConcurrentAll,
    /// Both issued up front; the first to complete decides the outcome.
    Race,
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::ConcurrentAll => "concurrent-all",
            Strategy::Race => "race",
        }
    }
}

/// Runs one fetch under `strategy`.
pub async fn fetch(source: &dyn FeedSource, strategy: Strategy) -> Result<Outcome, FetchError> {
    let started = Instant::now();
    info!("Fetch starting: strategy={}, source={}", strategy.label(), source.name());

    let result = match strategy {
        Strategy::Sequential => sequential(source).await.map(Outcome::Combined),
        Strategy::ConcurrentAll => concurrent_all(source).await.map(Outcome::Combined),
        Strategy::Race => race(source).await.map(Outcome::Race),
    };

    let elapsed_ms = started.elapsed().as_millis();
    match &result {
        Ok(_) => info!("Fetch finished: strategy={} in {}ms", strategy.label(), elapsed_ms),
        Err(e) => warn!("Fetch failed: strategy={} after {}ms: {}", strategy.label(), elapsed_ms, e),
    }
    result
}

/// Weather, then news. A weather failure means news is never requested.
pub async fn sequential(source: &dyn FeedSource) -> Result<CombinedResult, FetchError> {
    debug!("sequential: requesting weather");
    let weather = source.fetch_weather().await?;
    debug!("sequential: weather received, requesting news");
    let news = source.fetch_news().await?;
    Ok(CombinedResult { weather, news })
}

/// Both requests in flight at once. The first error wins and the other
/// request is dropped; no partial result is produced.
pub async fn concurrent_all(source: &dyn FeedSource) -> Result<CombinedResult, FetchError> {
    debug!("concurrent-all: requesting weather and news");
    let (weather, news) = tokio::try_join!(source.fetch_weather(), source.fetch_news())?;
    Ok(CombinedResult { weather, news })
}

/// Both requests in flight at once; whichever completes first, success or
/// failure, is the result. The loser's future is dropped unfinished.
///
/// On a tie in the same poll, weather is checked first.
pub async fn race(source: &dyn FeedSource) -> Result<RaceResult, FetchError> {
    debug!("race: requesting weather and news");
    let weather = source.fetch_weather();
    let news = source.fetch_news();

    match future::select(weather, news).await {
        Either::Left((result, _news)) => {
            debug!("race: weather finished first");
            result.map(RaceResult::Weather)
        }
        Either::Right((result, _weather)) => {
            debug!("race: news finished first");
            result.map(RaceResult::News)
        }
    }
}

/// Sequential fetch delivered through a continuation.
///
/// `on_done` is `FnOnce`, so it runs exactly once: with the combined result,
/// or with the first error and nothing else.
pub async fn with_callback<F>(source: &dyn FeedSource, on_done: F)
where
    F: FnOnce(Result<CombinedResult, FetchError>),
{
    let started = Instant::now();
    info!("Fetch starting: callback, source={}", source.name());
    let result = sequential(source).await;
    debug!("callback: completing after {}ms", started.elapsed().as_millis());
    on_done(result);
}
