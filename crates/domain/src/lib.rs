//! Domain layer for Pogodynka
//!
//! Contains the city catalog, forecast aggregation, user preferences, and
//! the value objects they are built from. This layer has no I/O dependencies
//! and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
