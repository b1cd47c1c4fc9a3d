//! Wind direction value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Eight-way compass direction derived from a wind bearing in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindDirection {
    /// North (337.5° - 22.5°)
    N,
    /// North-east
    NE,
    /// East
    E,
    /// South-east
    SE,
    /// South
    S,
    /// South-west
    SW,
    /// West
    W,
    /// North-west
    NW,
}

impl WindDirection {
    const SECTORS: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Map a bearing in degrees to the nearest compass sector
    ///
    /// Sectors are 45° wide and centered on the cardinal/ordinal bearings,
    /// so 22° is still north and 23° already north-east.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_degrees(degrees: f64) -> Self {
        let index = ((degrees / 45.0).round() as i64).rem_euclid(8) as usize;
        Self::SECTORS[index]
    }

    /// Compass label, e.g. `NE`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_bearings() {
        assert_eq!(WindDirection::from_degrees(0.0), WindDirection::N);
        assert_eq!(WindDirection::from_degrees(90.0), WindDirection::E);
        assert_eq!(WindDirection::from_degrees(180.0), WindDirection::S);
        assert_eq!(WindDirection::from_degrees(270.0), WindDirection::W);
    }

    #[test]
    fn test_sector_boundaries() {
        assert_eq!(WindDirection::from_degrees(22.0), WindDirection::N);
        assert_eq!(WindDirection::from_degrees(23.0), WindDirection::NE);
        assert_eq!(WindDirection::from_degrees(337.0), WindDirection::NW);
        assert_eq!(WindDirection::from_degrees(338.0), WindDirection::N);
    }

    #[test]
    fn test_full_circle_wraps_to_north() {
        assert_eq!(WindDirection::from_degrees(360.0), WindDirection::N);
        assert_eq!(WindDirection::from_degrees(359.0), WindDirection::N);
    }

    #[test]
    fn test_display_label() {
        assert_eq!(WindDirection::from_degrees(225.0).to_string(), "SW");
    }
}
