//! Service layer

mod employee;
mod error;

pub use employee::EmployeeService;
pub use error::{ServiceError, ServiceResult};
