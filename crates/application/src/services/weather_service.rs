//! Weather retrieval and aggregation service
//!
//! Fetches current conditions and forecast samples for a city and reduces
//! the samples to the daily summaries the UI displays. Each fetch is
//! independent: a failing forecast never hides current conditions.

use std::sync::Arc;

use domain::entities::{DailySummary, ForecastSample};
use domain::value_objects::PrecipitationChance;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{CurrentConditions, WeatherPort};

/// Number of leading 3-hour samples used for the near-term precipitation
/// chance (8 samples = 24 hours)
const NEAR_TERM_SAMPLES: usize = 8;

/// Everything the city detail view shows
#[derive(Debug, Clone)]
pub struct CityWeather {
    /// City name as requested
    pub city: String,
    /// Current conditions
    pub current: CurrentConditions,
    /// Highest precipitation chance over the next 24 hours; `None` when no
    /// forecast data was available
    pub precipitation_chance: Option<PrecipitationChance>,
    /// Daily summaries, at most five
    pub daily: Vec<DailySummary>,
}

/// Service for fetching and aggregating weather data
#[derive(Clone)]
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new service over the given weather port
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Fetch the complete detail view for a city
    ///
    /// Current conditions are required; forecast samples are fetched
    /// best-effort, so a forecast failure degrades to "no forecast" instead
    /// of failing the whole view.
    #[instrument(skip(self))]
    pub async fn city_overview(&self, city: &str) -> Result<CityWeather, ApplicationError> {
        let current = self.weather.current_weather(city).await?;

        let samples = match self.weather.forecast_samples(city).await {
            Ok(samples) => samples,
            Err(e) => {
                debug!(error = %e, "Forecast fetch failed, rendering without it");
                Vec::new()
            },
        };

        Ok(CityWeather {
            city: city.to_string(),
            current,
            precipitation_chance: near_term_chance(&samples),
            daily: DailySummary::aggregate(&samples),
        })
    }

    /// Fetch and aggregate the 5-day forecast for a city
    #[instrument(skip(self))]
    pub async fn daily_forecast(&self, city: &str) -> Result<Vec<DailySummary>, ApplicationError> {
        let samples = self.weather.forecast_samples(city).await?;
        let daily = DailySummary::aggregate(&samples);
        debug!(days = daily.len(), "Aggregated forecast");
        Ok(daily)
    }

    /// Check whether the upstream weather service responds
    pub async fn is_available(&self) -> bool {
        self.weather.is_available().await
    }
}

/// Highest precipitation chance over the first [`NEAR_TERM_SAMPLES`] samples
fn near_term_chance(samples: &[ForecastSample]) -> Option<PrecipitationChance> {
    if samples.is_empty() {
        return None;
    }
    let max = samples
        .iter()
        .take(NEAR_TERM_SAMPLES)
        .map(|sample| sample.precipitation_probability.unwrap_or(0.0))
        .fold(0.0f64, f64::max);
    Some(PrecipitationChance::from_probability(max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockWeatherPort;
    use chrono::NaiveDate;
    use domain::value_objects::Temperature;
    use mockall::predicate::eq;

    fn sample(day: u32, hour: u32, temp: f64, pop: Option<f64>) -> ForecastSample {
        ForecastSample {
            timestamp: NaiveDate::from_ymd_opt(2024, 5, day)
                .expect("valid date")
                .and_hms_opt(hour, 0, 0)
                .expect("valid time"),
            temperature: Temperature::from_celsius(temp),
            condition: Some("Clear".to_string()),
            precipitation_probability: pop,
        }
    }

    fn conditions() -> CurrentConditions {
        CurrentConditions {
            temperature: Temperature::from_celsius(18.5),
            condition: "Clouds".to_string(),
            wind_speed: 3.1,
            wind_direction_deg: 90.0,
            cloud_cover: 75,
            pressure: 1009.0,
            humidity: 55,
            precipitation: None,
        }
    }

    #[tokio::test]
    async fn overview_combines_current_and_forecast() {
        let mut port = MockWeatherPort::new();
        port.expect_current_weather()
            .with(eq("Wrocław"))
            .returning(|_| Ok(conditions()));
        port.expect_forecast_samples().with(eq("Wrocław")).returning(|_| {
            Ok(vec![
                sample(1, 9, 10.0, Some(0.2)),
                sample(1, 12, 14.0, Some(0.6)),
                sample(2, 9, 12.0, None),
            ])
        });

        let service = WeatherService::new(Arc::new(port));
        let overview = service.city_overview("Wrocław").await.expect("overview");

        assert_eq!(overview.city, "Wrocław");
        assert_eq!(overview.daily.len(), 2);
        assert_eq!(
            overview.precipitation_chance.expect("chance").percent(),
            60
        );
    }

    #[tokio::test]
    async fn overview_survives_forecast_failure() {
        let mut port = MockWeatherPort::new();
        port.expect_current_weather().returning(|_| Ok(conditions()));
        port.expect_forecast_samples()
            .returning(|_| Err(ApplicationError::ExternalService("boom".into())));

        let service = WeatherService::new(Arc::new(port));
        let overview = service.city_overview("Gdańsk").await.expect("overview");

        assert!(overview.daily.is_empty());
        assert!(overview.precipitation_chance.is_none());
    }

    #[tokio::test]
    async fn overview_propagates_current_weather_failure() {
        let mut port = MockWeatherPort::new();
        port.expect_current_weather()
            .returning(|_| Err(ApplicationError::NotFound("Atlantis".into())));

        let service = WeatherService::new(Arc::new(port));
        let result = service.city_overview("Atlantis").await;

        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[tokio::test]
    async fn near_term_chance_considers_only_first_eight_samples() {
        let mut samples: Vec<ForecastSample> =
            (0..8).map(|i| sample(1, i * 3, 10.0, Some(0.1))).collect();
        samples.push(sample(2, 0, 10.0, Some(0.9)));

        let chance = near_term_chance(&samples).expect("chance");
        assert_eq!(chance.percent(), 10);
    }

    #[tokio::test]
    async fn daily_forecast_propagates_errors() {
        let mut port = MockWeatherPort::new();
        port.expect_forecast_samples()
            .returning(|_| Err(ApplicationError::RateLimited));

        let service = WeatherService::new(Arc::new(port));
        assert!(matches!(
            service.daily_forecast("Poznań").await,
            Err(ApplicationError::RateLimited)
        ));
    }

    #[tokio::test]
    async fn daily_forecast_empty_samples_yield_empty_result() {
        let mut port = MockWeatherPort::new();
        port.expect_forecast_samples().returning(|_| Ok(Vec::new()));

        let service = WeatherService::new(Arc::new(port));
        let daily = service.daily_forecast("Rusiec").await.expect("forecast");
        assert!(daily.is_empty());
    }
}
