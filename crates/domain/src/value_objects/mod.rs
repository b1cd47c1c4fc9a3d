//! Value objects - immutable, validated domain primitives

mod city_id;
mod precipitation;
mod temperature;
mod wind;

pub use city_id::CityId;
pub use precipitation::PrecipitationChance;
pub use temperature::{Temperature, TemperatureUnit};
pub use wind::WindDirection;
