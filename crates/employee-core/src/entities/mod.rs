//! Domain entities - core business objects

mod employee;

pub use employee::{Employee, EmployeeId, LocationUpdate, NameQuery, NewEmployee};
