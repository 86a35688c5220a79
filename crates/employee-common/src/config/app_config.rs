//! Application configuration structs
//!
//! Loads configuration from environment variables, after reading an optional `.env` file.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub walkthrough: WalkthroughConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(()),
        }
    }
}

/// Database connection and pool configuration
///
/// `url`, when present, takes precedence over the individual connection fields.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    #[must_use]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: default_db_host(),
            port: default_db_port(),
            user: default_db_user(),
            password: default_db_password(),
            name: default_db_name(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            run_migrations: default_run_migrations(),
        }
    }
}

// Credentials stay out of logs
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

/// Sample values used by the CRUD walkthrough
#[derive(Debug, Clone)]
pub struct WalkthroughConfig {
    pub name: String,
    pub location: String,
    pub new_location: String,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            name: default_walkthrough_name(),
            location: default_walkthrough_location(),
            new_location: default_walkthrough_new_location(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "employee-directory".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_user() -> String {
    "postgres".to_string()
}

fn default_db_password() -> String {
    "password".to_string()
}

fn default_db_name() -> String {
    "SampleDB".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

fn default_acquire_timeout_secs() -> u64 {
    10
}

fn default_run_migrations() -> bool {
    true
}

fn default_walkthrough_name() -> String {
    "Jake".to_string()
}

fn default_walkthrough_location() -> String {
    "United States".to_string()
}

fn default_walkthrough_new_location() -> String {
    "Poland".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Every variable is optional; missing ones fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_env = match lookup("APP_ENV") {
            Some(raw) => raw
                .parse()
                .map_err(|()| ConfigError::InvalidValue("APP_ENV", raw))?,
            None => default_env(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: app_env,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
                host: lookup("DATABASE_HOST").unwrap_or_else(default_db_host),
                port: parse_var(&lookup, "DATABASE_PORT", default_db_port)?,
                user: lookup("DATABASE_USER").unwrap_or_else(default_db_user),
                password: lookup("DATABASE_PASSWORD").unwrap_or_else(default_db_password),
                name: lookup("DATABASE_NAME").unwrap_or_else(default_db_name),
                max_connections: parse_var(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections,
                )?,
                min_connections: parse_var(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections,
                )?,
                acquire_timeout_secs: parse_var(
                    &lookup,
                    "DATABASE_ACQUIRE_TIMEOUT_SECS",
                    default_acquire_timeout_secs,
                )?,
                run_migrations: match lookup("DATABASE_RUN_MIGRATIONS") {
                    Some(raw) => parse_bool(&raw)
                        .ok_or(ConfigError::InvalidValue("DATABASE_RUN_MIGRATIONS", raw))?,
                    None => default_run_migrations(),
                },
            },
            walkthrough: WalkthroughConfig {
                name: lookup("WALKTHROUGH_NAME").unwrap_or_else(default_walkthrough_name),
                location: lookup("WALKTHROUGH_LOCATION")
                    .unwrap_or_else(default_walkthrough_location),
                new_location: lookup("WALKTHROUGH_NEW_LOCATION")
                    .unwrap_or_else(default_walkthrough_new_location),
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
