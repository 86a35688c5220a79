//! Test helpers for integration tests
//!
//! Provides database setup for tests that need PostgreSQL and configs for
//! tests that must not reach one.

use std::sync::Arc;

use anyhow::Result;
use employee_common::{AppConfig, DatabaseConfig};
use employee_db::{run_migrations, PgEmployeeRepository, PgPool};
use employee_service::EmployeeService;

/// Database URL for tests, if one is configured
pub fn test_database_url() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty())
}

/// Migrated pool for tests, or `None` when no database is configured
pub async fn test_pool() -> Result<Option<PgPool>> {
    let Some(url) = test_database_url() else {
        return Ok(None);
    };
    let pool = PgPool::connect(&url).await?;
    run_migrations(&pool).await?;
    Ok(Some(pool))
}

/// Service over PostgreSQL, or `None` when no database is configured
pub async fn pg_service() -> Result<Option<EmployeeService>> {
    Ok(test_pool()
        .await?
        .map(|pool| EmployeeService::new(Arc::new(PgEmployeeRepository::new(pool)))))
}

/// App config pointing at the test database
pub fn test_config(url: String) -> AppConfig {
    let mut config = AppConfig::from_lookup(|_| None).expect("defaults always parse");
    config.database.url = Some(url);
    config.database.max_connections = 2;
    config
}

/// App config pointing at a local port nothing listens on
pub fn unreachable_config() -> AppConfig {
    let mut config = AppConfig::from_lookup(|_| None).expect("defaults always parse");
    config.database = DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        acquire_timeout_secs: 2,
        ..DatabaseConfig::default()
    };
    config
}
