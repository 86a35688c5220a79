//! Repository traits (ports)

mod repositories;

pub use repositories::{EmployeeRepository, RepoResult};
