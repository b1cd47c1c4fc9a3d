//! Pogodynka CLI
//!
//! Command-line front-end for browsing the city catalog, checking current
//! conditions and the 5-day forecast, and managing favorites and the
//! temperature display unit.

#![allow(clippy::print_stdout)]

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use application::ports::Precipitation;
use application::services::{CityWeather, PreferenceService, WeatherService};
use domain::entities::{condition_icon, CityCatalog, DailySummary};
use domain::value_objects::{CityId, TemperatureUnit};
use infrastructure::{AppConfig, JsonPreferenceStore, OpenWeatherAdapter};
use integration_openweather::OpenWeatherClient;

/// Pogodynka CLI
#[derive(Parser)]
#[command(name = "pogodynka")]
#[command(author, version, about = "Pogodynka weather CLI", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the city catalog, optionally filtered by a name prefix
    ///
    /// Favorites are marked with a star. The filter is case-insensitive
    /// and matches from the start of the name.
    Cities {
        /// Name prefix to filter by
        query: Option<String>,
    },

    /// Show current conditions and the 5-day outlook for a city
    Current {
        /// City name, e.g. "Wrocław"
        city: String,
    },

    /// Show the aggregated 5-day forecast for a city
    Forecast {
        /// City name, e.g. "Gdańsk"
        city: String,
    },

    /// Show or change the temperature display unit
    Unit {
        /// New unit; omit to print the current one
        unit: Option<UnitArg>,
    },

    /// Toggle a city's favorite marker
    Favorite {
        /// Catalog id of the city (see `cities`)
        id: u32,
    },

    /// Check whether the weather service is reachable
    Health,
}

/// Selectable temperature units
#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitArg {
    /// Degrees Celsius
    C,
    /// Degrees Fahrenheit
    F,
    /// Kelvin
    K,
}

impl From<UnitArg> for TemperatureUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::C => Self::Celsius,
            UnitArg::F => Self::Fahrenheit,
            UnitArg::K => Self::Kelvin,
        }
    }
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn favorite_marker(favorited: bool) -> &'static str {
    if favorited { "★" } else { "☆" }
}

fn preference_service(config: &AppConfig) -> PreferenceService {
    let store = JsonPreferenceStore::new(config.preferences.state_path());
    PreferenceService::new(Arc::new(store))
}

fn weather_service(config: &AppConfig) -> anyhow::Result<WeatherService> {
    let client_config = config.weather.to_client_config()?;
    let client =
        OpenWeatherClient::new(client_config).context("Weather client initialization failed")?;
    Ok(WeatherService::new(Arc::new(OpenWeatherAdapter::new(
        client,
    ))))
}

fn print_overview(overview: &CityWeather, unit: TemperatureUnit) {
    let current = &overview.current;
    let icon = condition_icon(&current.condition);

    println!("{icon} {}", overview.city);
    println!("   Temperatura: {}", current.temperature.display(unit));
    println!("   Warunki: {}", current.condition);
    println!(
        "   Wiatr: {:.1} m/s {}",
        current.wind_speed,
        current.wind_direction().label()
    );
    println!("   Zachmurzenie: {}%", current.cloud_cover);
    println!("   Ciśnienie: {:.0} hPa", current.pressure);
    println!("   Wilgotność: {}%", current.humidity);
    match current.precipitation {
        Some(Precipitation::Rain {
            volume_mm,
            window_hours,
        }) => println!("   Opady: deszcz {volume_mm} mm ({window_hours}h)"),
        Some(Precipitation::Snow {
            volume_mm,
            window_hours,
        }) => println!("   Opady: śnieg {volume_mm} mm ({window_hours}h)"),
        None => {},
    }
    if let Some(chance) = overview.precipitation_chance {
        println!("   Szansa opadów (24h): {chance}");
    }

    if !overview.daily.is_empty() {
        println!();
        print_daily(&overview.daily, unit);
    }
}

fn print_daily(daily: &[DailySummary], unit: TemperatureUnit) {
    println!("Prognoza na 5 dni:");
    for day in daily {
        println!(
            "   {} {} {} {} / {} (śr. {}), opady {}",
            day.weekday,
            day.date,
            condition_icon(&day.condition),
            day.temperature_min.display(unit),
            day.temperature_max.display(unit),
            day.temperature_avg.display(unit),
            day.precipitation_chance
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Configuration failed to load")?;

    match cli.command {
        Commands::Cities { query } => {
            let preferences = preference_service(&config);
            let cities = CityCatalog::search(query.as_deref().unwrap_or(""));

            if cities.is_empty() {
                println!("Brak miast pasujących do zapytania");
            }
            for city in cities {
                let marker = favorite_marker(preferences.is_favorite(city.id));
                println!("{marker} [{}] {}", city.id, city.name);
            }
        },

        Commands::Current { city } => {
            let preferences = preference_service(&config);
            let service = weather_service(&config)?;

            let overview = service.city_overview(&city).await?;
            print_overview(&overview, preferences.unit());
        },

        Commands::Forecast { city } => {
            let preferences = preference_service(&config);
            let service = weather_service(&config)?;

            let daily = service.daily_forecast(&city).await?;
            if daily.is_empty() {
                println!("Brak danych prognozy");
            } else {
                print_daily(&daily, preferences.unit());
            }
        },

        Commands::Unit { unit } => {
            let preferences = preference_service(&config);

            if let Some(unit) = unit {
                let unit = TemperatureUnit::from(unit);
                preferences.set_unit(unit);
                println!("Jednostka: {}", unit.suffix());
            } else {
                println!("Jednostka: {}", preferences.unit().suffix());
            }
        },

        Commands::Favorite { id } => {
            let preferences = preference_service(&config);
            let id = CityId::new(id);

            let favorited = preferences.toggle_favorite(id)?;
            let name = CityCatalog::get(id).map_or("?", |city| city.name);
            println!("{} {name}", favorite_marker(favorited));
        },

        Commands::Health => {
            let service = weather_service(&config)?;
            if service.is_available().await {
                println!("✅ Serwis pogodowy dostępny");
            } else {
                println!("❌ Serwis pogodowy niedostępny");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
