//! Application services - Use case implementations

mod preference_service;
mod weather_service;

pub use preference_service::PreferenceService;
pub use weather_service::{CityWeather, WeatherService};
