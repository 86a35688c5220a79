//! # employee-core
//!
//! Domain layer containing the employee entity, the repository trait, and domain errors.
//! This crate has zero dependencies on infrastructure (database driver, runtime, etc.).

pub mod entities;
pub mod error;
pub mod memory;
pub mod traits;

// Re-export commonly used types at crate root
pub use entities::{Employee, EmployeeId, LocationUpdate, NameQuery, NewEmployee};
pub use error::DomainError;
pub use memory::InMemoryEmployeeRepository;
pub use traits::{EmployeeRepository, RepoResult};
