//! Repository implementations
//!
//! PostgreSQL implementation of the repository trait defined in employee-core.

mod employee;
mod error;

pub use employee::PgEmployeeRepository;
pub use error::{is_connectivity_error, map_db_error};
