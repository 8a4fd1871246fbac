//! HTTP implementation of [`FeedSource`] backed by reqwest.
//!
//! Weather comes from Open-Meteo's forecast endpoint with
//! `current_weather=true`; news from DummyJSON's `/posts` listing.
//! The body is read as text first and then parsed, so transport failures
//! and shape mismatches surface as different [`FetchError`] variants.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{FeedSource, FetchError};
use super::types::{NewsResult, Resource, WeatherResult};

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";
pub const DEFAULT_NEWS_BASE_URL: &str = "https://dummyjson.com";
pub const DEFAULT_LATITUDE: f64 = 51.5074;
pub const DEFAULT_LONGITUDE: f64 = -0.1278;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Fixed request parameters for both endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub weather_base_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub news_base_url: String,
    pub page_size: u32,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            weather_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            news_base_url: DEFAULT_NEWS_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Endpoints {
    pub fn weather_url(&self) -> String {
        format!(
            "{}/v1/forecast?latitude={}&longitude={}&current_weather=true",
            self.weather_base_url.trim_end_matches('/'),
            self.latitude,
            self.longitude
        )
    }

    pub fn news_url(&self) -> String {
        format!(
            "{}/posts?limit={}",
            self.news_base_url.trim_end_matches('/'),
            self.page_size
        )
    }
}

pub struct HttpFeedSource {
    endpoints: Endpoints,
    client: reqwest::Client,
}

impl HttpFeedSource {
    /// Builds a source. `timeout` of `None` means requests may hang forever.
    pub fn new(endpoints: Endpoints, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            endpoints,
            client: builder.build()?,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        url: &str,
    ) -> Result<T, FetchError> {
        let network = |e: reqwest::Error| FetchError::Network {
            resource,
            message: e.to_string(),
        };

        let started = Instant::now();
        info!("GET {} ({})", url, resource);

        let response = self.client.get(url).send().await.map_err(network)?;
        let status = response.status();
        debug!("{} response status: {}", resource, status);

        if !status.is_success() {
            warn!("{} request returned HTTP {}", resource, status.as_u16());
            return Err(FetchError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(network)?;
        debug!(
            "{} body received: {} bytes in {}ms",
            resource,
            body.len(),
            started.elapsed().as_millis()
        );

        serde_json::from_str(&body).map_err(|e| {
            warn!("{} payload did not match expected shape: {}", resource, e);
            FetchError::Shape {
                resource,
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_weather(&self) -> Result<WeatherResult, FetchError> {
        let url = self.endpoints.weather_url();
        self.get_json(Resource::Weather, &url).await
    }

    async fn fetch_news(&self) -> Result<NewsResult, FetchError> {
        let url = self.endpoints.news_url();
        self.get_json(Resource::News, &url).await
    }
}
