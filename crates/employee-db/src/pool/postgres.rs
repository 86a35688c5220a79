//! PostgreSQL connection pool management

use employee_common::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::{debug, info};

/// Build connect options from config
///
/// A configured `url` wins over the individual host/port/user/password/name fields.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    if let Some(url) = &config.url {
        return url.parse();
    }

    Ok(PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name))
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout())
}

/// Create a new PostgreSQL connection pool, connecting immediately
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config)?;
    let pool = pool_options(config).connect_with(options).await?;

    info!(
        max_connections = config.max_connections,
        database = %config.name,
        "Database pool created"
    );
    Ok(pool)
}

/// Create a pool that opens connections on first use
///
/// Connectivity problems surface from the first statement rather than here.
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let options = connect_options(config)?;
    Ok(pool_options(config).connect_lazy_with(options))
}

/// One round trip proving the server is reachable
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Server version string, e.g. "PostgreSQL 16.2 on x86_64-pc-linux-gnu, ..."
pub async fn server_version(pool: &PgPool) -> Result<String, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT version()")
        .fetch_one(pool)
        .await
}

/// Schema DDL, compiled into the binary so it runs from any working directory
const SCHEMA_SQL: &str = include_str!("../../migrations/20240101000000_create_employees.sql");

/// Advisory lock key serializing concurrent schema setup
const SCHEMA_LOCK_KEY: i64 = 0x0045_4d50_4c4f_5945;

/// Create the `TestSchema.Employees` table and its index if they are missing
///
/// Every statement is `IF NOT EXISTS`, so running this on each start is safe.
/// Concurrent callers are serialized on a transaction-scoped advisory lock.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    debug!("Applying schema");
    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(SCHEMA_LOCK_KEY)
        .execute(&mut *tx)
        .await?;
    sqlx::raw_sql(SCHEMA_SQL).execute(&mut *tx).await?;
    tx.commit().await?;
    Ok(())
}
