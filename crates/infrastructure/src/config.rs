//! Application configuration
//!
//! Loaded from an optional `config.toml` plus `POGODYNKA_*` environment
//! variables; every field has a sensible default except the API key.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::path::PathBuf;

use application::error::ApplicationError;
use integration_openweather::OpenWeatherConfig;

/// File name of the persisted preference blob
pub const STATE_FILE_NAME: &str = "weather_app_state_v1.json";

/// Weather API settings
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    /// OpenWeatherMap base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key (`appid`)
    ///
    /// Usually supplied via `POGODYNKA_API_KEY`.
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Language code for localized condition descriptions
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_lang() -> String {
    "pl".to_string()
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
            lang: default_lang(),
        }
    }
}

impl WeatherSettings {
    /// Build the integration client configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no API key is set.
    pub fn to_client_config(&self) -> Result<OpenWeatherConfig, ApplicationError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            ApplicationError::Configuration(
                "weather.api_key is not set (POGODYNKA_API_KEY)".to_string(),
            )
        })?;

        Ok(OpenWeatherConfig {
            base_url: self.base_url.clone(),
            api_key: api_key.expose_secret().to_string(),
            timeout_secs: self.timeout_secs,
            lang: self.lang.clone(),
        })
    }
}

/// Preference storage settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesSettings {
    /// Directory holding the state file; defaults to the current directory
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl PreferencesSettings {
    /// Full path of the state file
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        self.dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(STATE_FILE_NAME)
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Weather API settings
    #[serde(default)]
    pub weather: WeatherSettings,

    /// Preference storage settings
    #[serde(default)]
    pub preferences: PreferencesSettings,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    ///
    /// Nested keys use a double underscore, e.g. `POGODYNKA_WEATHER__BASE_URL`
    /// or `POGODYNKA_PREFERENCES__DIR`. The API key can always be supplied as
    /// plain `POGODYNKA_API_KEY`, which takes precedence over the file.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., POGODYNKA_WEATHER__LANG)
            .add_source(environment());

        let config = builder.build()?;
        let mut app_config: Self = config.try_deserialize()?;

        // Short-form alias for the most commonly set value
        if let Ok(key) = std::env::var("POGODYNKA_API_KEY") {
            if !key.is_empty() {
                app_config.weather.api_key = Some(SecretString::from(key));
            }
        }

        Ok(app_config)
    }
}

/// Environment source with `__` between nesting levels, so multi-word field
/// names like `base_url` stay addressable
fn environment() -> config::Environment {
    config::Environment::with_prefix("POGODYNKA")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete_without_a_file() {
        let config = AppConfig::default();
        assert_eq!(
            config.weather.base_url,
            "https://api.openweathermap.org/data/2.5"
        );
        assert_eq!(config.weather.timeout_secs, 30);
        assert_eq!(config.weather.lang, "pl");
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn state_path_defaults_to_current_dir() {
        let settings = PreferencesSettings::default();
        assert_eq!(
            settings.state_path(),
            PathBuf::from(".").join(STATE_FILE_NAME)
        );
    }

    #[test]
    fn state_path_honors_configured_dir() {
        let settings = PreferencesSettings {
            dir: Some(PathBuf::from("/var/lib/pogodynka")),
        };
        assert_eq!(
            settings.state_path(),
            PathBuf::from("/var/lib/pogodynka").join(STATE_FILE_NAME)
        );
    }

    #[test]
    fn to_client_config_requires_api_key() {
        let settings = WeatherSettings::default();
        assert!(matches!(
            settings.to_client_config(),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[test]
    fn to_client_config_passes_settings_through() {
        let settings = WeatherSettings {
            api_key: Some(SecretString::from("k".to_string())),
            lang: "en".to_string(),
            ..Default::default()
        };
        let client_config = settings.to_client_config().expect("config");
        assert_eq!(client_config.api_key, "k");
        assert_eq!(client_config.lang, "en");
    }

    #[test]
    fn nested_keys_are_reachable_from_the_environment() {
        let mut vars = config::Map::new();
        vars.insert(
            "POGODYNKA_WEATHER__BASE_URL".to_string(),
            "https://example.test".to_string(),
        );
        vars.insert(
            "POGODYNKA_WEATHER__TIMEOUT_SECS".to_string(),
            "9".to_string(),
        );
        vars.insert(
            "POGODYNKA_PREFERENCES__DIR".to_string(),
            "/tmp/pogodynka".to_string(),
        );

        let config = config::Config::builder()
            .add_source(environment().source(Some(vars)))
            .build()
            .expect("build");
        let app_config: AppConfig = config.try_deserialize().expect("deserialize");

        assert_eq!(app_config.weather.base_url, "https://example.test");
        assert_eq!(app_config.weather.timeout_secs, 9);
        assert_eq!(
            app_config.preferences.dir,
            Some(PathBuf::from("/tmp/pogodynka"))
        );
    }

    #[test]
    fn config_deserializes_from_toml() {
        let raw = r#"
            [weather]
            base_url = "https://example.test"
            api_key = "secret"
            timeout_secs = 5

            [preferences]
            dir = "/tmp/pogodynka"
        "#;
        let config: AppConfig = toml::from_str(raw).expect("parse");
        assert_eq!(config.weather.base_url, "https://example.test");
        assert_eq!(config.weather.timeout_secs, 5);
        assert_eq!(
            config.preferences.dir,
            Some(PathBuf::from("/tmp/pogodynka"))
        );
    }
}
