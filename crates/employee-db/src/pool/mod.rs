//! Database connection pool management

mod postgres;

pub use postgres::{
    connect_options, create_lazy_pool, create_pool, ping, run_migrations, server_version,
};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
