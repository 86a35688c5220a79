//! Employee service
//!
//! Each operation validates its input, pings the database, then runs one
//! statement through the repository. Failures are returned, never fatal;
//! the caller decides whether to abort.

use std::sync::Arc;

use employee_core::{
    Employee, EmployeeId, EmployeeRepository, LocationUpdate, NameQuery, NewEmployee,
};
use tracing::{info, instrument, warn};
use validator::Validate;

use super::error::{ServiceError, ServiceResult};

/// Employee service
#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Create a new EmployeeService over an injected repository
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Check that the database is alive before issuing a statement
    async fn ensure_reachable(&self) -> ServiceResult<()> {
        self.repo.ping().await.map_err(|e| {
            warn!(error = %e, "Error pinging database");
            ServiceError::Unreachable(e)
        })
    }

    /// Insert an employee and return the new id
    #[instrument(skip(self))]
    pub async fn create_employee(&self, name: &str, location: &str) -> ServiceResult<EmployeeId> {
        let employee = NewEmployee::new(name, location);
        employee.validate()?;
        self.ensure_reachable().await?;

        let id = self.repo.create(&employee).await?;
        info!(%id, "Employee created");
        Ok(id)
    }

    /// List every employee, ordered by id
    #[instrument(skip(self))]
    pub async fn read_employees(&self) -> ServiceResult<Vec<Employee>> {
        self.ensure_reachable().await?;

        let employees = self.repo.find_all().await?;
        info!(count = employees.len(), "Employees read");
        Ok(employees)
    }

    /// List employees with the given name
    #[instrument(skip(self))]
    pub async fn find_employees(&self, name: &str) -> ServiceResult<Vec<Employee>> {
        let query = NameQuery::new(name);
        query.validate()?;
        self.ensure_reachable().await?;

        Ok(self.repo.find_by_name(&query.name).await?)
    }

    /// Move every employee with the given name to a new location.
    /// Returns the ids of the rows that changed.
    #[instrument(skip(self))]
    pub async fn update_employee(
        &self,
        name: &str,
        location: &str,
    ) -> ServiceResult<Vec<EmployeeId>> {
        let update = LocationUpdate::new(name, location);
        update.validate()?;
        self.ensure_reachable().await?;

        let ids = self.repo.update_location(&update).await?;
        info!(updated = ids.len(), "Employee location updated");
        Ok(ids)
    }

    /// Delete every employee with the given name and return the number removed
    #[instrument(skip(self))]
    pub async fn delete_employee(&self, name: &str) -> ServiceResult<u64> {
        let query = NameQuery::new(name);
        query.validate()?;
        self.ensure_reachable().await?;

        let deleted = self.repo.delete_by_name(&query.name).await?;
        info!(deleted, "Employees deleted");
        Ok(deleted)
    }

    /// Count all employees
    #[instrument(skip(self))]
    pub async fn count_employees(&self) -> ServiceResult<i64> {
        self.ensure_reachable().await?;
        Ok(self.repo.count().await?)
    }
}
