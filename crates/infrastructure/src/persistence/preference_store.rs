//! JSON-file preference store
//!
//! Persists the whole preference state as a single serialized blob. The
//! on-disk shape is `{"settings":{"unit":"C"},"favorites":{"cityIds":[..]}}`,
//! carried over unchanged so existing state files keep working.

use std::fs;
use std::path::PathBuf;

use application::error::ApplicationError;
use application::ports::PreferenceStorePort;
use domain::entities::UserPreferences;
use domain::value_objects::{CityId, TemperatureUnit};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// On-disk settings block
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSettings {
    unit: TemperatureUnit,
}

/// On-disk favorites block
#[derive(Debug, Serialize, Deserialize)]
struct PersistedFavorites {
    #[serde(rename = "cityIds")]
    city_ids: Vec<CityId>,
}

/// The persisted blob as a whole
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    settings: PersistedSettings,
    favorites: PersistedFavorites,
}

impl From<&UserPreferences> for PersistedState {
    fn from(preferences: &UserPreferences) -> Self {
        Self {
            settings: PersistedSettings {
                unit: preferences.unit,
            },
            favorites: PersistedFavorites {
                city_ids: preferences.favorites.clone(),
            },
        }
    }
}

impl From<PersistedState> for UserPreferences {
    fn from(state: PersistedState) -> Self {
        Self {
            unit: state.settings.unit,
            favorites: state.favorites.city_ids,
        }
    }
}

/// Preference store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    /// Create a store writing to the given file path
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl PreferenceStorePort for JsonPreferenceStore {
    fn load(&self) -> Option<UserPreferences> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No persisted state");
                return None;
            },
        };

        match serde_json::from_str::<PersistedState>(&raw) {
            Ok(state) => Some(state.into()),
            Err(e) => {
                // A corrupt or foreign blob counts as "no prior state"
                warn!(path = %self.path.display(), error = %e, "Discarding unreadable state");
                None
            },
        }
    }

    fn save(&self, preferences: &UserPreferences) -> Result<(), ApplicationError> {
        let state = PersistedState::from(preferences);
        let raw = serde_json::to_string(&state)
            .map_err(|e| ApplicationError::Internal(format!("Serialize state: {e}")))?;

        fs::write(&self.path, raw)
            .map_err(|e| ApplicationError::Internal(format!("Write state: {e}")))
    }
}
