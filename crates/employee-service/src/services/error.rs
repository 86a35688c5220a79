//! Service layer error types

use employee_common::AppError;
use employee_core::DomainError;
use std::fmt;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// The reachability check before a statement failed
    Unreachable(DomainError),

    /// Error reported by the repository
    Domain(DomainError),

    /// Input rejected before reaching the repository
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable(e) | Self::Domain(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreachable(e) | Self::Domain(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

impl ServiceError {
    /// Get the machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unreachable(e) | Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Check if the database could not be reached
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Unreachable(e) | Self::Domain(e) => e.is_connectivity(),
            Self::Validation(_) => false,
        }
    }

    /// Check if the failure came from the ping, before any statement ran
    pub fn is_ping_failure(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unreachable(e) | ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
