//! User preferences entity
//!
//! Two independent pieces of user state: the display temperature unit and
//! the set of favorited cities. Favorites keep their insertion order; the
//! marker has no behavior beyond display.

use crate::value_objects::{CityId, TemperatureUnit};

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPreferences {
    /// Preferred display unit
    pub unit: TemperatureUnit,
    /// Favorited city ids, in the order they were added
    pub favorites: Vec<CityId>,
}

impl UserPreferences {
    /// Replace the preferred display unit
    pub fn set_unit(&mut self, unit: TemperatureUnit) {
        self.unit = unit;
    }

    /// Toggle a city's favorite marker
    ///
    /// Removes the id if present, appends it otherwise. Returns `true` when
    /// the city is a favorite after the call.
    pub fn toggle_favorite(&mut self, id: CityId) -> bool {
        if let Some(position) = self.favorites.iter().position(|fav| *fav == id) {
            self.favorites.remove(position);
            false
        } else {
            self.favorites.push(id);
            true
        }
    }

    /// Check whether a city is currently favorited
    #[must_use]
    pub fn is_favorite(&self, id: CityId) -> bool {
        self.favorites.contains(&id)
    }
}
