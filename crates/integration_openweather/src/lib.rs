//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap API (<https://openweathermap.org/api>).
//! Provides current weather conditions and the 5-day/3-hour forecast,
//! addressed by city name. Requires an API key.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, OpenWeatherConfig, OpenWeatherError, WeatherApi};
pub use models::{
    CloudsData, CurrentResponse, ForecastEntry, ForecastResponse, MainData, PrecipitationVolume,
    WeatherDescription, WindData,
};
