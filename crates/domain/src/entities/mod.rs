//! Domain entities

mod city;
mod forecast;
mod preferences;

pub use city::{City, CityCatalog};
pub use forecast::{DailySummary, ForecastSample, condition_icon};
pub use preferences::UserPreferences;
