//! Forecast samples and their daily aggregation
//!
//! The forecast API returns up to 40 samples at 3-hour resolution. Display
//! works with one summary per calendar day: min/avg/max temperature, the
//! dominant condition, and the highest precipitation chance of the day.

use crate::value_objects::{PrecipitationChance, Temperature};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// Maximum number of daily summaries produced from one forecast batch
pub const MAX_FORECAST_DAYS: usize = 5;

/// Condition label substituted when a sample carries none
pub const FALLBACK_CONDITION: &str = "Clouds";

/// Weekday labels indexed by days-from-Sunday, as shown in the UI
const WEEKDAY_LABELS: [&str; 7] = ["Nd", "Pn", "Wt", "Śr", "Czw", "Pt", "Sb"];

/// One 3-hour forecast sample, taken verbatim from the API response
///
/// The timestamp is the API's local-time string parsed without any timezone
/// conversion; grouping by calendar day relies on that.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSample {
    /// Local date and time of the sample
    pub timestamp: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: Temperature,
    /// Dominant condition label, e.g. `Rain`; absent in some responses
    pub condition: Option<String>,
    /// Probability of precipitation (0..1); absent means 0
    pub precipitation_probability: Option<f64>,
}

/// Aggregated forecast for a single calendar date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    /// The date all samples share
    pub date: NaiveDate,
    /// Short weekday label, e.g. `Pn`
    pub weekday: &'static str,
    /// Lowest sampled temperature
    pub temperature_min: Temperature,
    /// Highest sampled temperature
    pub temperature_max: Temperature,
    /// Mean of the sampled temperatures
    pub temperature_avg: Temperature,
    /// Most frequent condition label (first-seen wins ties)
    pub condition: String,
    /// Highest precipitation chance across the day
    pub precipitation_chance: PrecipitationChance,
}

impl DailySummary {
    /// Aggregate a batch of samples into at most [`MAX_FORECAST_DAYS`]
    /// summaries, ordered by date
    ///
    /// An empty batch yields an empty result; callers render that as a
    /// "no forecast" state rather than an error.
    #[must_use]
    pub fn aggregate(samples: &[ForecastSample]) -> Vec<Self> {
        let mut groups: BTreeMap<NaiveDate, Vec<&ForecastSample>> = BTreeMap::new();
        for sample in samples {
            groups
                .entry(sample.timestamp.date())
                .or_default()
                .push(sample);
        }

        groups
            .into_iter()
            .take(MAX_FORECAST_DAYS)
            .map(|(date, group)| Self::summarize(date, &group))
            .collect()
    }

    /// Reduce one day's samples to a summary
    ///
    /// `group` is non-empty by construction in [`Self::aggregate`].
    fn summarize(date: NaiveDate, group: &[&ForecastSample]) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut max_probability: f64 = 0.0;

        for sample in group {
            let celsius = sample.temperature.celsius();
            min = min.min(celsius);
            max = max.max(celsius);
            sum += celsius;
            max_probability = max_probability.max(sample.precipitation_probability.unwrap_or(0.0));
        }

        #[allow(clippy::cast_precision_loss)]
        let avg = sum / group.len() as f64;

        Self {
            date,
            weekday: weekday_label(date),
            temperature_min: Temperature::from_celsius(min),
            temperature_max: Temperature::from_celsius(max),
            temperature_avg: Temperature::from_celsius(avg),
            condition: modal_condition(group),
            precipitation_chance: PrecipitationChance::from_probability(max_probability),
        }
    }
}

/// Most frequent condition label in a group; ties go to the label seen first
fn modal_condition(group: &[&ForecastSample]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for sample in group {
        let label = sample.condition.as_deref().unwrap_or(FALLBACK_CONDITION);
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut best = FALLBACK_CONDITION;
    let mut best_count = 0;
    for (label, count) in counts {
        if count > best_count {
            best = label;
            best_count = count;
        }
    }
    best.to_string()
}

/// Short weekday label for a date
fn weekday_label(date: NaiveDate) -> &'static str {
    WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize]
}

/// Icon for a condition label as reported by the weather API
#[must_use]
pub fn condition_icon(condition: &str) -> &'static str {
    match condition.to_lowercase().as_str() {
        "clear" => "☀️",
        "clouds" => "☁️",
        "rain" => "🌧️",
        "drizzle" => "🌦️",
        "thunderstorm" => "⛈️",
        "snow" => "🌨️",
        "mist" | "fog" => "🌫️",
        _ => "🌡️",
    }
}
