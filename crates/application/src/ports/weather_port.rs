//! Weather service port
//!
//! Defines the interface for weather data retrieval. Locations are addressed
//! by city name, exactly as the user typed or selected them.

use async_trait::async_trait;
use domain::entities::ForecastSample;
use domain::value_objects::{Temperature, WindDirection};
#[cfg(test)]
use mockall::automock;
use serde::Serialize;

use crate::error::ApplicationError;

/// Reported precipitation volume for the recent past
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Precipitation {
    /// Rain volume in mm over the given window
    Rain {
        /// Measured volume in mm
        volume_mm: f64,
        /// Measurement window in hours (1 or 3)
        window_hours: u8,
    },
    /// Snow volume in mm over the given window
    Snow {
        /// Measured volume in mm
        volume_mm: f64,
        /// Measurement window in hours (1 or 3)
        window_hours: u8,
    },
}

/// Current weather conditions for a city
#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: Temperature,
    /// Dominant condition label, e.g. `Clouds`
    pub condition: String,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind bearing in degrees
    pub wind_direction_deg: f64,
    /// Cloud cover percentage (0-100)
    pub cloud_cover: u8,
    /// Surface pressure in hPa
    pub pressure: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Recent precipitation, when the API reported any
    pub precipitation: Option<Precipitation>,
}

impl CurrentConditions {
    /// Compass direction derived from the wind bearing
    #[must_use]
    pub fn wind_direction(&self) -> WindDirection {
        WindDirection::from_degrees(self.wind_direction_deg)
    }
}

/// Port for weather data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a city
    async fn current_weather(&self, city: &str) -> Result<CurrentConditions, ApplicationError>;

    /// Get the raw 3-hour forecast samples for a city
    ///
    /// Returns samples in API order, typically 5 days at 3-hour resolution.
    async fn forecast_samples(&self, city: &str)
    -> Result<Vec<ForecastSample>, ApplicationError>;

    /// Check if the weather service is reachable
    async fn is_available(&self) -> bool;
}
