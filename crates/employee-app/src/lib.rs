//! # employee-app
//!
//! Wires configuration, the PostgreSQL pool, the repository and the service
//! together, then runs the CRUD walkthrough.

pub mod walkthrough;

use std::io::Write;
use std::sync::Arc;

use employee_common::{AppConfig, AppError, AppResult};
use employee_db::{create_pool, map_db_error, run_migrations, server_version, PgEmployeeRepository};
use employee_service::EmployeeService;
use tracing::{info, warn};

pub use walkthrough::{Step, Walkthrough, WalkthroughReport};

/// Connect, optionally migrate, and run the walkthrough against PostgreSQL
///
/// Status lines go to `out`; diagnostics go through `tracing`.
pub async fn run<W: Write>(config: &AppConfig, out: &mut W) -> AppResult<WalkthroughReport> {
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::from(map_db_error(e)).in_step("Error creating connection pool"))?;

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::from(map_db_error(e)).in_step("Error applying migrations"))?;
    }

    match server_version(&pool).await {
        Ok(version) => info!(%version, "Connected to database server"),
        Err(e) => warn!(error = %e, "Could not read server version"),
    }
    writeln!(out, "Connected!")?;

    let service = EmployeeService::new(Arc::new(PgEmployeeRepository::new(pool.clone())));
    let result = Walkthrough::new(&service, &config.walkthrough).run(out).await;

    pool.close().await;
    result
}
