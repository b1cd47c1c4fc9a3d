//! Domain-level errors

use crate::value_objects::CityId;
use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// City identifier not present in the catalog
    #[error("Unknown city id: {0}")]
    UnknownCity(CityId),
}
