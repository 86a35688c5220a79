//! # employee-db
//!
//! Database layer implementing `EmployeeRepository` with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management (eager and lazy)
//! - Reachability checks and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - The repository implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use employee_common::DatabaseConfig;
//! use employee_core::{EmployeeRepository, NewEmployee};
//! use employee_db::{create_pool, run_migrations, PgEmployeeRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!
//!     let repo = PgEmployeeRepository::new(pool);
//!     let id = repo.create(&NewEmployee::new("Jake", "United States")).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{
    connect_options, create_lazy_pool, create_pool, ping, run_migrations, server_version, PgPool,
};
pub use repositories::{map_db_error, PgEmployeeRepository};
