//! Preference storage port
//!
//! Persistence is a single serialized blob behind a fixed key, written
//! synchronously from the caller's perspective. Absence and parse failures
//! are both "no prior state", never errors.

use domain::entities::UserPreferences;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for durable preference storage
#[cfg_attr(test, automock)]
pub trait PreferenceStorePort: Send + Sync {
    /// Load previously persisted preferences
    ///
    /// Returns `None` when nothing was persisted yet or the stored blob
    /// cannot be parsed; the caller falls back to defaults.
    fn load(&self) -> Option<UserPreferences>;

    /// Persist the given preferences
    ///
    /// Callers treat failures as best-effort: they are logged, not surfaced.
    fn save(&self, preferences: &UserPreferences) -> Result<(), ApplicationError>;
}
