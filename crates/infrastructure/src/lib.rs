//! Infrastructure layer - Adapters, configuration, and persistence
//!
//! Wires the application ports to the outside world: the OpenWeatherMap
//! client behind `WeatherPort` and a JSON state file behind
//! `PreferenceStorePort`.

pub mod adapters;
pub mod config;
pub mod persistence;

pub use adapters::OpenWeatherAdapter;
pub use config::{AppConfig, PreferencesSettings, WeatherSettings};
pub use persistence::JsonPreferenceStore;
