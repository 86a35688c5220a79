//! # employee-service
//!
//! Business logic layer: validates input, checks reachability, and delegates
//! to an injected `EmployeeRepository`.

pub mod services;

pub use services::{EmployeeService, ServiceError, ServiceResult};
