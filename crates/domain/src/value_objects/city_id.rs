//! City identifier value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a city in the static catalog
///
/// Small integers assigned at build time; equality and hashing are the only
/// interesting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(u32);

impl CityId {
    /// Create a city id from its raw value
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw id value
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CityId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<CityId> for u32 {
    fn from(id: CityId) -> Self {
        id.0
    }
}
