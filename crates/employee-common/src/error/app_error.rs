//! Application error types
//!
//! Unified error handling for the binary and everything it drives.

use employee_core::DomainError;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // A walkthrough step failed; `context` names the step ("Error inserting new row")
    #[error("{context}: {source}")]
    Step {
        context: &'static str,
        #[source]
        source: Box<AppError>,
    },

    // Output errors
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Get a machine-readable error code
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Step { source, .. } => source.error_code(),
            Self::Io(_) => "IO_ERROR",
            Self::Domain(e) => e.code(),
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Process exit status for this error (sysexits.h values)
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 65,
            Self::Config(_) => 78,
            Self::Io(_) => 74,
            Self::Step { source, .. } => source.exit_code(),
            Self::Domain(e) if e.is_connectivity() => 69,
            Self::Domain(_) => 1,
        }
    }

    /// Check if the database could not be reached
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Domain(e) => e.is_connectivity(),
            Self::Step { source, .. } => source.is_connectivity(),
            _ => false,
        }
    }

    /// Attach a walkthrough step label
    #[must_use]
    pub fn in_step(self, context: &'static str) -> Self {
        Self::Step {
            context,
            source: Box::new(self),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
