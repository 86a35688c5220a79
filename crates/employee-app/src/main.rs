//! Employee walkthrough entry point
//!
//! Run with:
//! ```bash
//! cargo run -p employee-app
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use employee_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, AppError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = try_init_tracing();
            let e = AppError::from(e);
            error!(error = %e, "Failed to load configuration");
            std::process::exit(e.exit_code());
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(app = %config.app.name, env = ?config.app.env, "Starting walkthrough");

    let mut stdout = std::io::stdout();
    match employee_app::run(&config, &mut stdout).await {
        Ok(report) => info!(
            inserted_id = %report.inserted_id,
            rows_read = report.rows_read,
            updated = report.updated_ids.len(),
            deleted = ?report.deleted,
            "Walkthrough finished"
        ),
        Err(e) => {
            error!(error = %e, code = e.error_code(), "Walkthrough failed");
            std::process::exit(e.exit_code());
        }
    }
}
