//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub stage: Stage,
}

/// Deployment stage, selected with `APP_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Debug,
    Local,
    Staging,
    Production,
}

impl Stage {
    /// Map an `APP_ENV` value to a stage; unknown values fall back to `Debug`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "local" => Self::Local,
            "stg" | "staging" => Self::Staging,
            "prod" | "production" => Self::Production,
            _ => Self::Debug,
        }
    }

    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Debug and Local stages run on a developer machine
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Debug | Self::Local)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply pending migrations on startup
    pub run_migrations: bool,
}

// Default value functions
fn default_app_name() -> String {
    "user-service".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    /// or a value cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                stage: lookup("APP_ENV")
                    .map(|s| Stage::from_name(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: parse_or(&lookup, "API_PORT", default_port)?,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections,
                )?,
                run_migrations: parse_or(&lookup, "DATABASE_RUN_MIGRATIONS", || false)?,
            },
        })
    }
}

/// Parse an optional variable, using `default` when it is unset
fn parse_or<T, F, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> T,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
