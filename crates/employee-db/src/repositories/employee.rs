//! PostgreSQL implementation of EmployeeRepository
//!
//! Every statement binds its inputs as parameters; caller strings never
//! become part of the SQL text.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use employee_core::{
    Employee, EmployeeId, EmployeeRepository, LocationUpdate, NewEmployee, RepoResult,
};

use crate::mappers::{EmployeeInsert, EmployeeLocationUpdate};
use crate::models::EmployeeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of EmployeeRepository
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    /// Create a new PgEmployeeRepository over an existing pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        crate::pool::ping(&self.pool).await.map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, employee: &NewEmployee) -> RepoResult<EmployeeId> {
        let insert = EmployeeInsert::new(employee);

        let id = sqlx::query_scalar::<_, i32>(
            r"
            INSERT INTO TestSchema.Employees (Name, Location)
            VALUES ($1, $2)
            RETURNING Id
            ",
        )
        .bind(insert.name)
        .bind(insert.location)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        debug!(id, "Inserted employee");
        Ok(EmployeeId::new(id))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeModel>(
            r"
            SELECT Id, Name, Location
            FROM TestSchema.Employees
            ORDER BY Id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeModel>(
            r"
            SELECT Id, Name, Location
            FROM TestSchema.Employees
            WHERE Name = $1
            ORDER BY Id
            ",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    #[instrument(skip(self))]
    async fn update_location(&self, update: &LocationUpdate) -> RepoResult<Vec<EmployeeId>> {
        let values = EmployeeLocationUpdate::new(update);

        let mut ids = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE TestSchema.Employees
            SET Location = $1
            WHERE Name = $2
            RETURNING Id
            ",
        )
        .bind(values.location)
        .bind(values.name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        // RETURNING order is unspecified
        ids.sort_unstable();
        Ok(ids.into_iter().map(EmployeeId::new).collect())
    }

    #[instrument(skip(self))]
    async fn delete_by_name(&self, name: &str) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM TestSchema.Employees
            WHERE Name = $1
            ",
        )
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM TestSchema.Employees")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
