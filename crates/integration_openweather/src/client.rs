//! OpenWeatherMap HTTP client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentResponse, ForecastResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The API did not recognize the requested city name
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The API rejected the configured key
    #[error("Invalid or missing API key")]
    Unauthorized,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key (`appid` query parameter)
    pub api_key: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language code for localized condition descriptions (default: `pl`)
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_lang() -> String {
    "pl".to_string()
}

impl OpenWeatherConfig {
    /// Create a configuration with defaults for everything but the key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            timeout_secs: default_timeout(),
            lang: default_lang(),
        }
    }
}

/// Weather API trait for fetching current conditions and forecasts
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Get current weather for a city by name
    async fn current(&self, city: &str) -> Result<CurrentResponse, OpenWeatherError>;

    /// Get the 5-day/3-hour forecast for a city by name
    async fn forecast(&self, city: &str) -> Result<ForecastResponse, OpenWeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Always sent: metric units keep temperatures in Celsius
    const UNITS: &'static str = "metric";

    async fn fetch<T>(&self, endpoint: &str, city: &str) -> Result<T, OpenWeatherError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{endpoint}", self.config.base_url);
        debug!(url = %url, city = %city, "Fetching from weather API");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", Self::UNITS),
                ("lang", self.config.lang.as_str()),
            ])
            .send()
            .await
            .map_err(|e| OpenWeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(OpenWeatherError::CityNotFound(city.to_string()));
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(OpenWeatherError::Unauthorized);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OpenWeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(OpenWeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(OpenWeatherError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    #[instrument(skip(self), fields(city = %city))]
    async fn current(&self, city: &str) -> Result<CurrentResponse, OpenWeatherError> {
        self.fetch("weather", city).await
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn forecast(&self, city: &str) -> Result<ForecastResponse, OpenWeatherError> {
        self.fetch("forecast", city).await
    }

    async fn is_healthy(&self) -> bool {
        // Lightweight probe against a city that always resolves
        self.current("Warszawa").await.is_ok()
    }
}
