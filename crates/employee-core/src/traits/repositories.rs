//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every implementation receives its connection
//! pool (or equivalent) at construction time; nothing here reaches for
//! process-wide state.

use async_trait::async_trait;

use crate::entities::{Employee, EmployeeId, LocationUpdate, NewEmployee};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Check that the backing store is reachable (one round trip)
    async fn ping(&self) -> RepoResult<()>;

    /// Insert a new employee and return the database-assigned id
    async fn create(&self, employee: &NewEmployee) -> RepoResult<EmployeeId>;

    /// List every employee, ordered by id
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    /// List employees with the given name, ordered by id
    async fn find_by_name(&self, name: &str) -> RepoResult<Vec<Employee>>;

    /// Set the location of every employee with the given name.
    /// Returns the ids of the rows that changed, ordered by id.
    async fn update_location(&self, update: &LocationUpdate) -> RepoResult<Vec<EmployeeId>>;

    /// Delete every employee with the given name and return the number of rows removed
    async fn delete_by_name(&self, name: &str) -> RepoResult<u64>;

    /// Count all employees
    async fn count(&self) -> RepoResult<i64>;
}
