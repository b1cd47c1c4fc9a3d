//! Precipitation chance value object
//!
//! The forecast API reports probability-of-precipitation as a 0..1 float;
//! the rest of the system works with a clamped 0-100 integer percentage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Chance of precipitation as an integer percentage (0-100)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize,
)]
pub struct PrecipitationChance(u8);

impl PrecipitationChance {
    /// Maximum valid percentage
    pub const MAX: u8 = 100;

    /// Create a chance value, clamping to the valid range
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Convert an API probability (0..1) to a percentage
    ///
    /// Rounds to the nearest integer and clamps, so out-of-range inputs
    /// never escape the 0-100 invariant.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_probability(probability: f64) -> Self {
        let percent = (probability * 100.0).round();
        if percent <= 0.0 {
            Self(0)
        } else if percent >= 100.0 {
            Self(Self::MAX)
        } else {
            Self(percent as u8)
        }
    }

    /// Get the percentage value
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PrecipitationChance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<PrecipitationChance> for u8 {
    fn from(chance: PrecipitationChance) -> Self {
        chance.0
    }
}

/// Custom deserialization that clamps out-of-range values
impl<'de> Deserialize<'de> for PrecipitationChance {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Ok(Self::clamped(value))
    }
}
