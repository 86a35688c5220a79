//! Database models - SQLx-compatible structs for PostgreSQL tables

mod employee;

pub use employee::EmployeeModel;
