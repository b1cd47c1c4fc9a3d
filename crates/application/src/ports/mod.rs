//! Port definitions - interfaces the infrastructure layer implements

mod preference_store;
mod weather_port;

pub use preference_store::PreferenceStorePort;
pub use weather_port::{CurrentConditions, Precipitation, WeatherPort};

#[cfg(test)]
pub use preference_store::MockPreferenceStorePort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
