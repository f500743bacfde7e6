//! Application configuration loaded from environment variables.

use thiserror::Error;

/// Errors found while validating the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `ORDER_BACKEND` names a backend that does not exist.
    #[error("Unknown order backend {0:?} (expected \"memory\" or \"postgres\")")]
    UnknownBackend(String),

    /// The PostgreSQL backend was selected without `DATABASE_URL`.
    #[error("DATABASE_URL is required when ORDER_BACKEND is \"postgres\"")]
    MissingDatabaseUrl,
}

/// The repository backend to start with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    Memory,
    Postgres {
        url: String,
        max_connections: u32,
    },
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — HTTP listen port (default: `8000`)
/// - `GRPC_PORT` — gRPC listen port (default: `50051`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `ORDER_BACKEND` — `"memory"` or `"postgres"` (default: `"memory"`)
/// - `DATABASE_URL` — PostgreSQL URL, required for the postgres backend
/// - `DB_MAX_CONNECTIONS` — pool size (default: `5`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub grpc_port: u16,
    pub log_level: String,
    pub order_backend: String,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            grpc_port: std::env::var("GRPC_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.grpc_port),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            order_backend: std::env::var("ORDER_BACKEND").unwrap_or(defaults.order_backend),
            database_url: std::env::var("DATABASE_URL").ok(),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.db_max_connections),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the `"host:port"` address of the gRPC server.
    pub fn grpc_addr(&self) -> String {
        format!("{}:{}", self.host, self.grpc_port)
    }

    /// Resolves the selected repository backend.
    pub fn backend(&self) -> Result<BackendConfig, ConfigError> {
        match self.order_backend.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(BackendConfig::Memory),
            "postgres" => {
                let url = self
                    .database_url
                    .clone()
                    .filter(|url| !url.trim().is_empty())
                    .ok_or(ConfigError::MissingDatabaseUrl)?;
                Ok(BackendConfig::Postgres {
                    url,
                    max_connections: self.db_max_connections,
                })
            }
            _ => Err(ConfigError::UnknownBackend(self.order_backend.clone())),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            grpc_port: 50051,
            log_level: "info".to_string(),
            order_backend: "memory".to_string(),
            database_url: None,
            db_max_connections: 5,
        }
    }
}
