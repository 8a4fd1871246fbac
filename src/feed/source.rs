use std::fmt;

use async_trait::async_trait;

use super::types::{NewsResult, Resource, WeatherResult};

/// Errors that can occur while fetching either feed.
/// Every variant is terminal for the fetch attempt; nothing is retried.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Request could not be completed (DNS, connection refused, timeout).
    Network { resource: Resource, message: String },
    /// Server answered with a non-success status.
    Status { resource: Resource, status: u16 },
    /// Body arrived but did not match the expected shape.
    Shape { resource: Resource, message: String },
}

impl FetchError {
    pub fn resource(&self) -> Resource {
        match self {
            FetchError::Network { resource, .. }
            | FetchError::Status { resource, .. }
            | FetchError::Shape { resource, .. } => *resource,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network { resource, message } => {
                write!(f, "{resource} fetch failed: network error: {message}")
            }
            FetchError::Status { resource, status } => {
                write!(f, "{resource} fetch failed: HTTP {status}")
            }
            FetchError::Shape { resource, message } => {
                write!(f, "{resource} fetch failed: unexpected response: {message}")
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// The two endpoints the dashboard reads from.
///
/// Location and page size are fixed by whoever builds the source, so both
/// calls take no arguments. Each call is one outbound request.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    async fn fetch_weather(&self) -> Result<WeatherResult, FetchError>;

    async fn fetch_news(&self) -> Result<NewsResult, FetchError>;
}
