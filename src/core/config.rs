//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.weathernews/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::idiom::Idiom;
use crate::feed::Endpoints;
use crate::feed::http::{
    DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_NEWS_BASE_URL, DEFAULT_PAGE_SIZE,
    DEFAULT_WEATHER_BASE_URL,
};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub news: NewsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_idiom: Option<Idiom>,
    pub request_timeout_secs: Option<u64>,
    pub log_file: Option<String>,
    pub fetch_on_start: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WeatherConfig {
    pub base_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NewsConfig {
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "weathernews.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub idiom: Idiom,
    pub endpoints: Endpoints,
    /// `None` means no timeout: a hung request hangs its fetch.
    pub request_timeout: Option<Duration>,
    pub log_file: String,
    pub fetch_on_start: bool,
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub idiom: Option<Idiom>,
    pub fetch_on_start: Option<bool>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.weathernews/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".weathernews").join("config.toml"))
}

/// Load config from `~/.weathernews/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DashboardConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DashboardConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DashboardConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DashboardConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DashboardConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Weather & News Dashboard Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_idiom = "callback"         # callback, promise, promise-chain, promise-all,
#                                    # promise-race, async, async-sequential,
#                                    # async-parallel, async-race
# request_timeout_secs = 10          # Unset = wait forever
# log_file = "weathernews.log"
# fetch_on_start = true

# [weather]
# base_url = "https://api.open-meteo.com"
# latitude = 51.5074
# longitude = -0.1278

# [news]
# base_url = "https://dummyjson.com"
# page_size = 10
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DashboardConfig, cli: CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &DashboardConfig, cli: CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Idiom: CLI → env → config → default
    let idiom = cli
        .idiom
        .or_else(|| env("WEATHERNEWS_IDIOM").and_then(|s| parse_idiom(&s)))
        .or(config.general.default_idiom)
        .unwrap_or_default();

    // Weather base URL: env → config → default
    let weather_base_url = env("WEATHERNEWS_WEATHER_URL")
        .or_else(|| config.weather.base_url.clone())
        .unwrap_or_else(|| DEFAULT_WEATHER_BASE_URL.to_string());

    // News base URL: env → config → default
    let news_base_url = env("WEATHERNEWS_NEWS_URL")
        .or_else(|| config.news.base_url.clone())
        .unwrap_or_else(|| DEFAULT_NEWS_BASE_URL.to_string());

    // Timeout: env → config → none
    let request_timeout = env("WEATHERNEWS_TIMEOUT_SECS")
        .and_then(|s| match s.trim().parse::<u64>() {
            Ok(secs) => Some(secs),
            Err(e) => {
                warn!("Ignoring invalid WEATHERNEWS_TIMEOUT_SECS {:?}: {}", s, e);
                None
            }
        })
        .or(config.general.request_timeout_secs)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    ResolvedConfig {
        idiom,
        endpoints: Endpoints {
            weather_base_url,
            latitude: config.weather.latitude.unwrap_or(DEFAULT_LATITUDE),
            longitude: config.weather.longitude.unwrap_or(DEFAULT_LONGITUDE),
            news_base_url,
            page_size: config.news.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        },
        request_timeout,
        log_file: config
            .general
            .log_file
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        fetch_on_start: cli
            .fetch_on_start
            .or(config.general.fetch_on_start)
            .unwrap_or(true),
    }
}

fn parse_idiom(value: &str) -> Option<Idiom> {
    use clap::ValueEnum;
    match Idiom::from_str(value.trim(), true) {
        Ok(idiom) => Some(idiom),
        Err(e) => {
            warn!("Ignoring invalid WEATHERNEWS_IDIOM {:?}: {}", value, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = DashboardConfig::default();
        assert!(config.general.default_idiom.is_none());
        assert!(config.weather.base_url.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: DashboardConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.news.page_size.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&DashboardConfig::default(), CliOverrides::default(), no_env);
        assert_eq!(resolved.idiom, Idiom::Callback);
        assert_eq!(resolved.endpoints, Endpoints::default());
        assert!(resolved.request_timeout.is_none());
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
        assert!(resolved.fetch_on_start);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = DashboardConfig {
            general: GeneralConfig {
                default_idiom: Some(Idiom::AsyncRace),
                request_timeout_secs: Some(7),
                log_file: Some("/tmp/dash.log".into()),
                fetch_on_start: Some(false),
            },
            weather: WeatherConfig {
                base_url: Some("http://weather.local".into()),
                latitude: Some(48.85),
                longitude: Some(2.35),
            },
            news: NewsConfig {
                base_url: Some("http://news.local".into()),
                page_size: Some(30),
            },
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), no_env);
        assert_eq!(resolved.idiom, Idiom::AsyncRace);
        assert_eq!(resolved.request_timeout, Some(Duration::from_secs(7)));
        assert_eq!(resolved.endpoints.weather_base_url, "http://weather.local");
        assert_eq!(resolved.endpoints.latitude, 48.85);
        assert_eq!(resolved.endpoints.news_base_url, "http://news.local");
        assert_eq!(resolved.endpoints.page_size, 30);
        assert_eq!(resolved.log_file, "/tmp/dash.log");
        assert!(!resolved.fetch_on_start);
    }

    #[test]
    fn test_env_overrides_config_and_cli_overrides_env() {
        let config = DashboardConfig {
            general: GeneralConfig {
                default_idiom: Some(Idiom::Promise),
                request_timeout_secs: Some(30),
                ..Default::default()
            },
            weather: WeatherConfig {
                base_url: Some("http://from-config".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("WEATHERNEWS_IDIOM", "promise-all"),
            ("WEATHERNEWS_WEATHER_URL", "http://from-env"),
            ("WEATHERNEWS_TIMEOUT_SECS", "3"),
        ]);
        let lookup = |key: &str| env.get(key).map(|v| v.to_string());

        let resolved = resolve_with_env(&config, CliOverrides::default(), lookup);
        assert_eq!(resolved.idiom, Idiom::PromiseAll);
        assert_eq!(resolved.endpoints.weather_base_url, "http://from-env");
        assert_eq!(resolved.request_timeout, Some(Duration::from_secs(3)));

        let cli = CliOverrides {
            idiom: Some(Idiom::AsyncSequential),
            fetch_on_start: Some(false),
        };
        let resolved = resolve_with_env(&config, cli, lookup);
        assert_eq!(resolved.idiom, Idiom::AsyncSequential);
        assert!(!resolved.fetch_on_start);
    }

    #[test]
    fn test_invalid_env_values_fall_through() {
        let config = DashboardConfig {
            general: GeneralConfig {
                request_timeout_secs: Some(12),
                ..Default::default()
            },
            ..Default::default()
        };
        let lookup = |key: &str| match key {
            "WEATHERNEWS_IDIOM" => Some("promise-everything".to_string()),
            "WEATHERNEWS_TIMEOUT_SECS" => Some("soon".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), lookup);
        assert_eq!(resolved.idiom, Idiom::Callback);
        assert_eq!(resolved.request_timeout, Some(Duration::from_secs(12)));
    }

    #[test]
    fn test_zero_timeout_means_none() {
        let config = DashboardConfig {
            general: GeneralConfig {
                request_timeout_secs: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), no_env);
        assert!(resolved.request_timeout.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[news]
page_size = 5
"#;
        let config: DashboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.news.page_size, Some(5));
        assert!(config.news.base_url.is_none());
        assert!(config.general.default_idiom.is_none());
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[general]
default_idiom = "promise-race"
request_timeout_secs = 10
fetch_on_start = false

[weather]
latitude = 40.7128
longitude = -74.006

[news]
base_url = "http://localhost:8080"
"#;
        let config: DashboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_idiom, Some(Idiom::PromiseRace));
        assert_eq!(config.general.request_timeout_secs, Some(10));
        assert_eq!(config.weather.longitude, Some(-74.006));
        assert_eq!(config.news.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("weathernews-cfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\ndefault_idiom = ").unwrap();

        let result = load_config_from(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("weathernews-gen-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.default_idiom.is_none());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }
}
