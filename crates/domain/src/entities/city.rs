//! City entity and the static catalog
//!
//! The selectable cities are fixed at build time; the catalog only supports
//! lookup and case-insensitive prefix search.

use crate::value_objects::CityId;
use serde::Serialize;

/// A selectable city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    /// Catalog identifier
    pub id: CityId,
    /// Display name
    pub name: &'static str,
}

impl City {
    const fn new(id: u32, name: &'static str) -> Self {
        Self {
            id: CityId::new(id),
            name,
        }
    }
}

/// The build-time city catalog
#[derive(Debug, Clone, Copy)]
pub struct CityCatalog;

impl CityCatalog {
    const CITIES: [City; 11] = [
        City::new(1, "Wrocław"),
        City::new(2, "Szczerców"),
        City::new(3, "Gdańsk"),
        City::new(4, "Łódź"),
        City::new(5, "Poznań"),
        City::new(6, "Warszawa"),
        City::new(7, "Kraków"),
        City::new(8, "Bełchatów"),
        City::new(9, "New York"),
        City::new(10, "Wola Wiązowa"),
        City::new(11, "Rusiec"),
    ];

    /// All cities in catalog order
    #[must_use]
    pub const fn all() -> &'static [City] {
        &Self::CITIES
    }

    /// Look up a city by its identifier
    #[must_use]
    pub fn get(id: CityId) -> Option<&'static City> {
        Self::CITIES.iter().find(|city| city.id == id)
    }

    /// Check whether an identifier exists in the catalog
    #[must_use]
    pub fn contains(id: CityId) -> bool {
        Self::get(id).is_some()
    }

    /// Look up a city by display name, case-insensitively
    #[must_use]
    pub fn find_by_name(name: &str) -> Option<&'static City> {
        let needle = name.trim().to_lowercase();
        Self::CITIES
            .iter()
            .find(|city| city.name.to_lowercase() == needle)
    }

    /// Filter the catalog by a case-insensitive name prefix
    ///
    /// The query is trimmed first; an empty query returns the full catalog
    /// in its original order.
    #[must_use]
    pub fn search(query: &str) -> Vec<&'static City> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Self::CITIES.iter().collect();
        }
        Self::CITIES
            .iter()
            .filter(|city| city.name.to_lowercase().starts_with(&needle))
            .collect()
    }
}
