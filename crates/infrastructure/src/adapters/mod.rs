//! Adapters module
//!
//! Bridges application ports to the integration clients.

mod weather_adapter;

pub use weather_adapter::OpenWeatherAdapter;
