//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited | Self::ExternalService(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_service_errors_are_retryable() {
        assert!(ApplicationError::ExternalService("timeout".into()).is_retryable());
        assert!(ApplicationError::RateLimited.is_retryable());
    }

    #[test]
    fn not_found_is_not_retryable() {
        assert!(!ApplicationError::NotFound("Atlantis".into()).is_retryable());
    }

    #[test]
    fn domain_error_converts_transparently() {
        let err: ApplicationError =
            DomainError::UnknownCity(domain::CityId::new(99)).into();
        assert_eq!(err.to_string(), "Unknown city id: 99");
    }
}
