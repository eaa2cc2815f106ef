use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    /// JSON catalog to serve instead of the built-in seed data
    pub catalog_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Directory holding the database file
    pub data_dir: String,
    /// Bare file name, joined onto `data_dir`
    pub file_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            data_dir: ".".to_string(),
            file_name: "notes.db".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or(defaults.server.bind_address);

        let data_dir = std::env::var("DATA_DIR").unwrap_or(defaults.database.data_dir);

        let file_name = std::env::var("DATABASE_FILE").unwrap_or(defaults.database.file_name);

        let catalog_file = std::env::var("CATALOG_FILE")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let config = Config {
            server: ServerConfig { bind_address },
            database: DatabaseConfig {
                data_dir,
                file_name,
            },
            catalog_file,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "BIND_ADDRESS cannot be empty".to_string(),
            ));
        }

        let file_name = &self.database.file_name;
        if file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "DATABASE_FILE cannot be empty".to_string(),
            ));
        }

        if file_name.contains('/') || file_name.contains('\\') {
            return Err(ConfigError::ValidationError(format!(
                "DATABASE_FILE must be a bare file name, got {file_name:?}; use DATA_DIR for the directory"
            )));
        }

        Ok(())
    }
}
