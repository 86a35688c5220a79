//! Error handling utilities for repositories

use employee_core::DomainError;
use sqlx::Error as SqlxError;

/// Check whether an SQLx error means the server could not be reached
pub fn is_connectivity_error(e: &SqlxError) -> bool {
    matches!(
        e,
        SqlxError::Io(_)
            | SqlxError::Tls(_)
            | SqlxError::PoolTimedOut
            | SqlxError::PoolClosed
            | SqlxError::WorkerCrashed
    )
}

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    if is_connectivity_error(&e) {
        DomainError::DatabaseUnavailable(e.to_string())
    } else {
        DomainError::DatabaseError(e.to_string())
    }
}
