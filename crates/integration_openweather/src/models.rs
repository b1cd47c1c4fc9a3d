//! Wire models for OpenWeatherMap responses
//!
//! Mirrors the JSON shapes of `GET /weather` (current conditions) and
//! `GET /forecast` (5-day/3-hour forecast). Only the fields the application
//! consumes are modeled; everything else is ignored on deserialization.

use serde::Deserialize;

/// `main` block shared by current and forecast entries
#[derive(Debug, Clone, Deserialize)]
pub struct MainData {
    /// Temperature in the requested units (Celsius with `units=metric`)
    pub temp: f64,
    /// Surface pressure in hPa
    #[serde(default)]
    pub pressure: f64,
    /// Relative humidity percentage
    #[serde(default)]
    pub humidity: u8,
}

/// One entry of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherDescription {
    /// Condition group, e.g. `Rain`, `Clouds`
    pub main: String,
    /// Localized free-text description
    #[serde(default)]
    pub description: String,
}

/// `wind` block
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WindData {
    /// Wind speed in m/s
    #[serde(default)]
    pub speed: f64,
    /// Wind bearing in degrees
    #[serde(default)]
    pub deg: f64,
}

/// `clouds` block
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct CloudsData {
    /// Cloud cover percentage
    #[serde(default)]
    pub all: u8,
}

/// `rain`/`snow` volume block with 1-hour and 3-hour windows
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PrecipitationVolume {
    /// Volume over the last hour in mm
    #[serde(rename = "1h")]
    pub one_hour: Option<f64>,
    /// Volume over the last three hours in mm
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}

/// Response of `GET /weather`
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    /// Temperature, pressure, humidity
    pub main: MainData,
    /// Condition descriptions; the first entry is the dominant one
    #[serde(default)]
    pub weather: Vec<WeatherDescription>,
    /// Wind data
    #[serde(default)]
    pub wind: WindData,
    /// Cloud cover
    #[serde(default)]
    pub clouds: CloudsData,
    /// Recent rain volume, if any
    #[serde(default)]
    pub rain: Option<PrecipitationVolume>,
    /// Recent snow volume, if any
    #[serde(default)]
    pub snow: Option<PrecipitationVolume>,
}

impl CurrentResponse {
    /// Dominant condition label, when the API reported one
    #[must_use]
    pub fn condition(&self) -> Option<&str> {
        self.weather.first().map(|w| w.main.as_str())
    }
}

/// One 3-hour entry of the forecast `list`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Local date and time as `YYYY-MM-DD HH:MM:SS`
    pub dt_txt: String,
    /// Temperature block
    pub main: MainData,
    /// Condition descriptions
    #[serde(default)]
    pub weather: Vec<WeatherDescription>,
    /// Probability of precipitation (0..1)
    #[serde(default)]
    pub pop: Option<f64>,
}

impl ForecastEntry {
    /// Dominant condition label, when the API reported one
    #[must_use]
    pub fn condition(&self) -> Option<&str> {
        self.weather.first().map(|w| w.main.as_str())
    }
}

/// Response of `GET /forecast`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Forecast entries in chronological order
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_response_deserializes() {
        let json = serde_json::json!({
            "main": { "temp": 11.3, "pressure": 1018, "humidity": 62 },
            "weather": [{ "main": "Rain", "description": "lekki deszcz" }],
            "wind": { "speed": 5.2, "deg": 250 },
            "clouds": { "all": 90 },
            "rain": { "1h": 0.4 }
        });

        let current: CurrentResponse = serde_json::from_value(json).expect("deserialize");
        assert!((current.main.temp - 11.3).abs() < f64::EPSILON);
        assert_eq!(current.main.humidity, 62);
        assert_eq!(current.condition(), Some("Rain"));
        assert_eq!(current.rain.expect("rain").one_hour, Some(0.4));
        assert!(current.snow.is_none());
    }

    #[test]
    fn test_current_response_without_optional_blocks() {
        let json = serde_json::json!({
            "main": { "temp": -2.0 }
        });

        let current: CurrentResponse = serde_json::from_value(json).expect("deserialize");
        assert!(current.condition().is_none());
        assert_eq!(current.clouds.all, 0);
        assert!((current.wind.speed).abs() < f64::EPSILON);
    }

    #[test]
    fn test_forecast_response_deserializes() {
        let json = serde_json::json!({
            "list": [
                {
                    "dt_txt": "2024-05-01 12:00:00",
                    "main": { "temp": 17.0 },
                    "weather": [{ "main": "Clouds" }],
                    "pop": 0.35
                },
                {
                    "dt_txt": "2024-05-01 15:00:00",
                    "main": { "temp": 18.5 }
                }
            ]
        });

        let forecast: ForecastResponse = serde_json::from_value(json).expect("deserialize");
        assert_eq!(forecast.list.len(), 2);
        assert_eq!(forecast.list[0].condition(), Some("Clouds"));
        assert_eq!(forecast.list[0].pop, Some(0.35));
        assert!(forecast.list[1].pop.is_none());
        assert!(forecast.list[1].condition().is_none());
    }

    #[test]
    fn test_forecast_response_tolerates_missing_list() {
        let forecast: ForecastResponse = serde_json::from_value(serde_json::json!({}))
            .expect("deserialize");
        assert!(forecast.list.is_empty());
    }

    #[test]
    fn test_three_hour_volume_field_name() {
        let volume: PrecipitationVolume =
            serde_json::from_value(serde_json::json!({ "3h": 2.5 })).expect("deserialize");
        assert_eq!(volume.three_hours, Some(2.5));
        assert!(volume.one_hour.is_none());
    }
}
