//! In-memory implementation of `EmployeeRepository`
//!
//! Backs the service layer in tests and dry runs without a database. Ids are
//! assigned from an auto-incrementing counter starting at 1, like a `SERIAL`
//! column, and are never reused after a delete.

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::instrument;

use crate::entities::{Employee, EmployeeId, LocationUpdate, NewEmployee};
use crate::error::DomainError;
use crate::traits::{EmployeeRepository, RepoResult};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Employee>,
    last_id: i32,
}

/// Mutex-guarded in-memory employee table
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    table: Mutex<Table>,
    unreachable: bool,
}

impl InMemoryEmployeeRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that fails every call with `DatabaseUnavailable`
    pub fn unreachable() -> Self {
        Self {
            table: Mutex::default(),
            unreachable: true,
        }
    }

    fn check_reachable(&self) -> RepoResult<()> {
        if self.unreachable {
            return Err(DomainError::DatabaseUnavailable(
                "in-memory repository is marked unreachable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn ping(&self) -> RepoResult<()> {
        self.check_reachable()
    }

    #[instrument(skip(self))]
    async fn create(&self, employee: &NewEmployee) -> RepoResult<EmployeeId> {
        self.check_reachable()?;

        let mut table = self.table.lock();
        table.last_id += 1;
        let id = EmployeeId::new(table.last_id);
        table
            .rows
            .push(Employee::new(id, employee.name.clone(), employee.location.clone()));
        Ok(id)
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.check_reachable()?;
        Ok(self.table.lock().rows.clone())
    }

    async fn find_by_name(&self, name: &str) -> RepoResult<Vec<Employee>> {
        self.check_reachable()?;
        Ok(self
            .table
            .lock()
            .rows
            .iter()
            .filter(|e| e.name == name)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn update_location(&self, update: &LocationUpdate) -> RepoResult<Vec<EmployeeId>> {
        self.check_reachable()?;

        let mut table = self.table.lock();
        let mut updated = Vec::new();
        for employee in table.rows.iter_mut().filter(|e| e.name == update.name) {
            employee.location.clone_from(&update.location);
            updated.push(employee.id);
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_by_name(&self, name: &str) -> RepoResult<u64> {
        self.check_reachable()?;

        let mut table = self.table.lock();
        let before = table.rows.len();
        table.rows.retain(|e| e.name != name);
        Ok((before - table.rows.len()) as u64)
    }

    async fn count(&self) -> RepoResult<i64> {
        self.check_reachable()?;
        Ok(self.table.lock().rows.len() as i64)
    }
}
