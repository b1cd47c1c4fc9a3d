//! Temperature value object and display units
//!
//! Temperatures arrive from the weather API in Celsius and are converted to
//! the user's preferred unit only at display time.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{Temperature, TemperatureUnit};
//!
//! let t = Temperature::from_celsius(0.0);
//! assert_eq!(t.in_unit(TemperatureUnit::Fahrenheit), 32);
//! assert_eq!(t.in_unit(TemperatureUnit::Kelvin), 273);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display unit for temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius
    #[default]
    #[serde(rename = "C")]
    Celsius,
    /// Degrees Fahrenheit
    #[serde(rename = "F")]
    Fahrenheit,
    /// Kelvin
    #[serde(rename = "K")]
    Kelvin,
}

impl TemperatureUnit {
    /// All selectable units, in menu order
    pub const ALL: [Self; 3] = [Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    /// One-letter symbol used in persisted state and display suffixes
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
            Self::Kelvin => "K",
        }
    }

    /// Display suffix including the degree sign where customary
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
            Self::Kelvin => "K",
        }
    }

    /// Parse a unit symbol, falling back to Celsius for anything unrecognized
    ///
    /// The fallback mirrors the selector behavior: an unknown symbol is not
    /// an error, it simply means "display Celsius".
    #[must_use]
    pub fn parse_lossy(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "F" => Self::Fahrenheit,
            "K" => Self::Kelvin,
            _ => Self::Celsius,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A temperature, stored in degrees Celsius
///
/// Wraps the raw metric reading and owns the conversion arithmetic, so the
/// rounding rules live in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    /// Create a temperature from a Celsius reading
    #[must_use]
    pub const fn from_celsius(celsius: f64) -> Self {
        Self(celsius)
    }

    /// Get the raw Celsius value
    #[must_use]
    pub const fn celsius(self) -> f64 {
        self.0
    }

    /// Convert to the given display unit, rounded to the nearest integer
    ///
    /// Fahrenheit: `round(c * 9/5 + 32)`. Kelvin: `round(c + 273.15)`.
    /// Celsius: `round(c)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn in_unit(self, unit: TemperatureUnit) -> i32 {
        let converted = match unit {
            TemperatureUnit::Celsius => self.0,
            TemperatureUnit::Fahrenheit => self.0 * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => self.0 + 273.15,
        };
        converted.round() as i32
    }

    /// Format with the unit suffix, e.g. `21°C` or `294K`
    #[must_use]
    pub fn display(self, unit: TemperatureUnit) -> String {
        format!("{}{}", self.in_unit(unit), unit.suffix())
    }
}

impl From<f64> for Temperature {
    fn from(celsius: f64) -> Self {
        Self(celsius)
    }
}
