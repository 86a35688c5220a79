//! Model to entity mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod employee;

pub use employee::{EmployeeInsert, EmployeeLocationUpdate};
