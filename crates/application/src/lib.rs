//! Application layer - Use cases and orchestration
//!
//! Contains the port definitions for weather retrieval and preference
//! storage, plus the services that orchestrate domain objects over them.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
