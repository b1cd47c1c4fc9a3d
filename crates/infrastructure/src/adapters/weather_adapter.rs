//! Weather port adapter
//!
//! Implements `WeatherPort` on top of the OpenWeatherMap client, mapping
//! wire models into domain types and client errors into application errors.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tracing::{instrument, warn};

use application::error::ApplicationError;
use application::ports::{CurrentConditions, Precipitation, WeatherPort};
use domain::entities::ForecastSample;
use domain::value_objects::Temperature;
use integration_openweather::{
    CurrentResponse, ForecastEntry, OpenWeatherClient, OpenWeatherError, PrecipitationVolume,
    WeatherApi,
};

/// Forecast timestamps arrive as `YYYY-MM-DD HH:MM:SS` local time
const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `WeatherPort` implementation backed by OpenWeatherMap
pub struct OpenWeatherAdapter {
    client: OpenWeatherClient,
}

impl OpenWeatherAdapter {
    /// Create an adapter around an initialized client
    #[must_use]
    pub fn new(client: OpenWeatherClient) -> Self {
        Self { client }
    }
}

fn map_error(error: OpenWeatherError) -> ApplicationError {
    match error {
        OpenWeatherError::CityNotFound(city) => {
            ApplicationError::NotFound(format!("City: {city}"))
        },
        OpenWeatherError::Unauthorized => {
            ApplicationError::Configuration("Weather API rejected the key".to_string())
        },
        OpenWeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        OpenWeatherError::ConnectionFailed(msg)
        | OpenWeatherError::RequestFailed(msg)
        | OpenWeatherError::ServiceUnavailable(msg) => ApplicationError::ExternalService(msg),
        OpenWeatherError::ParseError(msg) => {
            ApplicationError::Internal(format!("Weather response: {msg}"))
        },
    }
}

/// Pick the reported volume, preferring the 1-hour window
fn volume_of(block: &PrecipitationVolume) -> Option<(f64, u8)> {
    block
        .one_hour
        .map(|mm| (mm, 1))
        .or_else(|| block.three_hours.map(|mm| (mm, 3)))
}

fn map_precipitation(response: &CurrentResponse) -> Option<Precipitation> {
    if let Some((volume_mm, window_hours)) = response.rain.as_ref().and_then(volume_of) {
        return Some(Precipitation::Rain {
            volume_mm,
            window_hours,
        });
    }
    if let Some((volume_mm, window_hours)) = response.snow.as_ref().and_then(volume_of) {
        return Some(Precipitation::Snow {
            volume_mm,
            window_hours,
        });
    }
    None
}

fn map_current(response: &CurrentResponse) -> CurrentConditions {
    CurrentConditions {
        temperature: Temperature::from_celsius(response.main.temp),
        condition: response.condition().unwrap_or_default().to_string(),
        wind_speed: response.wind.speed,
        wind_direction_deg: response.wind.deg,
        cloud_cover: response.clouds.all,
        pressure: response.main.pressure,
        humidity: response.main.humidity,
        precipitation: map_precipitation(response),
    }
}

fn map_sample(entry: &ForecastEntry) -> Option<ForecastSample> {
    let timestamp = match NaiveDateTime::parse_from_str(&entry.dt_txt, DT_TXT_FORMAT) {
        Ok(timestamp) => timestamp,
        Err(e) => {
            // A single malformed entry must not sink the whole forecast
            warn!(dt_txt = %entry.dt_txt, error = %e, "Skipping unparseable forecast entry");
            return None;
        },
    };

    Some(ForecastSample {
        timestamp,
        temperature: Temperature::from_celsius(entry.main.temp),
        condition: entry.condition().map(ToString::to_string),
        precipitation_probability: entry.pop,
    })
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(city = %city))]
    async fn current_weather(&self, city: &str) -> Result<CurrentConditions, ApplicationError> {
        let response = self.client.current(city).await.map_err(map_error)?;
        Ok(map_current(&response))
    }

    #[instrument(skip(self), fields(city = %city))]
    async fn forecast_samples(
        &self,
        city: &str,
    ) -> Result<Vec<ForecastSample>, ApplicationError> {
        let response = self.client.forecast(city).await.map_err(map_error)?;
        Ok(response.list.iter().filter_map(map_sample).collect())
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}
