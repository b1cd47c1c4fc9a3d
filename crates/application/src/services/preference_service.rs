//! User preference service
//!
//! Owns the in-memory preference state for the process: loaded once at
//! startup (falling back to defaults), mutated only through the explicit
//! operations here, and written back after every mutation. Storage failures
//! are logged and swallowed so a full disk never breaks browsing.

use std::sync::Arc;

use domain::entities::{CityCatalog, UserPreferences};
use domain::value_objects::{CityId, TemperatureUnit};
use domain::DomainError;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::error::ApplicationError;
use crate::ports::PreferenceStorePort;

/// Service managing the persisted user preferences
pub struct PreferenceService {
    store: Arc<dyn PreferenceStorePort>,
    preferences: RwLock<UserPreferences>,
}

impl std::fmt::Debug for PreferenceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceService")
            .field("preferences", &*self.preferences.read())
            .finish_non_exhaustive()
    }
}

impl PreferenceService {
    /// Create the service, loading persisted state or falling back to
    /// defaults
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStorePort>) -> Self {
        let preferences = store.load().unwrap_or_else(|| {
            debug!("No persisted preferences, using defaults");
            UserPreferences::default()
        });
        Self {
            store,
            preferences: RwLock::new(preferences),
        }
    }

    /// Current display unit
    #[must_use]
    pub fn unit(&self) -> TemperatureUnit {
        self.preferences.read().unit
    }

    /// Replace the display unit and persist
    pub fn set_unit(&self, unit: TemperatureUnit) {
        let snapshot = {
            let mut prefs = self.preferences.write();
            prefs.set_unit(unit);
            prefs.clone()
        };
        self.persist(&snapshot);
    }

    /// Toggle a city's favorite marker and persist
    ///
    /// Returns `true` when the city is a favorite after the call.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownCity` for ids not present in the catalog.
    pub fn toggle_favorite(&self, id: CityId) -> Result<bool, ApplicationError> {
        if !CityCatalog::contains(id) {
            return Err(DomainError::UnknownCity(id).into());
        }

        let (now_favorite, snapshot) = {
            let mut prefs = self.preferences.write();
            let now_favorite = prefs.toggle_favorite(id);
            (now_favorite, prefs.clone())
        };
        self.persist(&snapshot);
        Ok(now_favorite)
    }

    /// Favorited city ids in insertion order
    #[must_use]
    pub fn favorites(&self) -> Vec<CityId> {
        self.preferences.read().favorites.clone()
    }

    /// Check whether a city is currently favorited
    #[must_use]
    pub fn is_favorite(&self, id: CityId) -> bool {
        self.preferences.read().is_favorite(id)
    }

    /// Best-effort write-back; failures are logged, never surfaced
    fn persist(&self, preferences: &UserPreferences) {
        if let Err(e) = self.store.save(preferences) {
            warn!(error = %e, "Failed to persist preferences");
        }
    }
}
