//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    /// The database could not be reached (I/O, TLS, pool timeout, pool closed)
    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    /// The database was reached but the statement failed
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get a stable, machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::DatabaseUnavailable(_) => "DATABASE_UNAVAILABLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if the database could not be reached at all
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::DatabaseUnavailable(_))
    }
}
