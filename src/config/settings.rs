//! Application settings and configuration structures.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Root configuration structure containing all application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Server configuration (host, port)
    pub server: ServerSettings,

    /// Persistence backend configuration
    pub database: DatabaseSettings,

    /// Business rules applied by the user services
    pub users: UserRules,

    /// Side-effect configuration
    pub notifications: NotificationSettings,

    /// CORS configuration
    pub cors: CorsSettings,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Server binding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,
}

/// Which store backs the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// Repository backend
    pub backend: StorageBackend,

    /// Database connection URL (required for postgres)
    #[serde(default)]
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections to maintain
    pub min_connections: u32,

    /// Connection acquire timeout in seconds
    pub acquire_timeout: u64,

    /// Apply embedded migrations at startup
    pub run_migrations: bool,
}

/// Width of the `users.name` column; `users.max_name_length` may not exceed it.
pub const NAME_COLUMN_WIDTH: u64 = 100;

/// Limits enforced when users are created or updated.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRules {
    /// Minimum password length in characters
    pub min_password_length: u64,

    /// Maximum name length in characters
    pub max_name_length: u64,
}

impl Default for UserRules {
    fn default() -> Self {
        Self {
            min_password_length: 8,
            max_name_length: 100,
        }
    }
}

/// Notification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationSettings {
    /// Send account notifications after writes
    pub enabled: bool,
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Allowed origins (comma-separated in env)
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. config/default.toml (base configuration)
    /// 2. config/{RUN_ENV}.toml (environment-specific overrides)
    /// 3. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the loaded values are inconsistent.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Self::builder(&environment)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__SERVER__PORT=3000 -> server.port = 3000
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("database.backend", std::env::var("DATABASE_BACKEND").ok())?
            .build()?
            .try_deserialize()
            .and_then(Self::validated)
    }

    /// Settings built from defaults only, with the in-memory backend.
    ///
    /// Used by tests and local tooling that must not touch the environment.
    pub fn in_memory() -> Result<Self, ConfigError> {
        Self::builder("test")?
            .set_override("database.backend", "memory")?
            .set_override("server.port", 0)?
            .build()?
            .try_deserialize()
            .and_then(Self::validated)
    }

    fn builder(
        environment: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("environment", environment)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.backend", "postgres")?
            .set_default("database.url", "")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 2)?
            .set_default("database.acquire_timeout", 30)?
            .set_default("database.run_migrations", true)?
            .set_default("users.min_password_length", 8)?
            .set_default("users.max_name_length", 100)?
            .set_default("notifications.enabled", true)?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])
    }

    fn validated(settings: Self) -> Result<Self, ConfigError> {
        if settings.database.backend == StorageBackend::Postgres && settings.database.url.is_empty() {
            return Err(ConfigError::Message(
                "database.url (or DATABASE_URL) is required for the postgres backend".into(),
            ));
        }
        if settings.users.min_password_length == 0 {
            return Err(ConfigError::Message(
                "users.min_password_length must be at least 1".into(),
            ));
        }
        if settings.users.max_name_length > NAME_COLUMN_WIDTH {
            return Err(ConfigError::Message(format!(
                "users.max_name_length must be at most {}",
                NAME_COLUMN_WIDTH
            )));
        }
        Ok(settings)
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
