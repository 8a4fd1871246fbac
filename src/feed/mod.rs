pub mod http;
pub mod orchestrator;
pub mod source;
pub mod types;

pub use http::{Endpoints, HttpFeedSource};
pub use orchestrator::Strategy;
pub use source::{FeedSource, FetchError};
pub use types::{
    CombinedResult, CurrentWeather, NewsResult, Outcome, Post, RaceResult, Reactions, Resource,
    WeatherResult,
};
