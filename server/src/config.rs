use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Prefix for structured environment overrides, e.g. `TODO__SERVER__PORT`
const ENV_PREFIX: &str = "TODO";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    /// Optional database URL. If not provided, defaults to the user data directory
    pub url: Option<String>,
    /// Maximum number of database connections in the pool
    pub max_connections: u32,
    /// Pool acquire timeout in seconds
    pub connection_timeout: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    /// Listen address for the HTTP server
    pub listen_addr: String,
    /// Port number to listen on
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log format (pretty, json, compact)
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
    Compact,
}

impl Config {
    /// Load configuration from the embedded defaults, `CONFIG_FILE` and the environment
    pub fn from_env() -> Result<Self> {
        let config_file = env::var("CONFIG_FILE").ok();
        Self::load(config_file.as_deref())
    }

    /// Load configuration with an explicit config file on top of the defaults
    pub fn from_file(path: &str) -> Result<Self> {
        Self::load(Some(path))
    }

    /// Layer defaults, the optional file, `TODO__*` variables and the standard variables
    pub fn load(config_file: Option<&str>) -> Result<Self> {
        Self::load_with(config_file, |name| env::var(name).ok())
    }

    /// Same as [`Config::load`] with the standard variables read through `lookup`
    pub fn load_with<F>(config_file: Option<&str>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ConfigBuilder::builder().add_source(File::from_str(
            include_str!("../config/default.toml"),
            FileFormat::Toml,
        ));

        if let Some(path) = config_file {
            builder = builder.add_source(File::with_name(path).format(FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

        let mut result: Config = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        result.apply_standard_env_vars(lookup)?;

        Ok(result)
    }

    /// Apply DATABASE_URL, LISTEN_ADDR, PORT and LOG_LEVEL from `lookup`
    pub fn apply_standard_env_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(database_url) = lookup("DATABASE_URL") {
            self.database.url = Some(database_url);
        }

        if let Some(listen_addr) = lookup("LISTEN_ADDR") {
            self.server.listen_addr = listen_addr;
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {port}"))?;
        }

        if let Some(log_level) = lookup("LOG_LEVEL") {
            self.logging.level = log_level;
        }

        Ok(())
    }

    /// Get the database URL, defaulting to the user data directory
    pub fn database_url(&self) -> String {
        match &self.database.url {
            Some(url) => database::normalize_database_url(url),
            None => Self::default_database_url(),
        }
    }

    /// `sqlite://<data dir>/todo-service/todos.sqlite`
    pub fn default_database_url() -> String {
        format!("sqlite://{}", default_database_path().display())
    }

    /// Get the server socket address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.listen_addr, self.server.port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ));
            }
        }

        // Plain paths are fine; any other URL scheme is not
        if let Some(url) = &self.database.url {
            if url.contains("://") && !url.starts_with("sqlite://") {
                return Err(anyhow::anyhow!(
                    "Only SQLite databases are supported. URL must start with 'sqlite://'. Got: {}",
                    url
                ));
            }
        }

        if self.server.port == 0 {
            return Err(anyhow::anyhow!("Server port cannot be 0"));
        }

        if self.database.max_connections == 0 {
            return Err(anyhow::anyhow!(
                "Database max_connections must be greater than 0"
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: None,
                max_connections: 5,
                connection_timeout: 30,
            },
            server: ServerConfig {
                listen_addr: "127.0.0.1".to_string(),
                port: 8000,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: LogFormat::Pretty,
            },
        }
    }
}

/// Default database file, falling back to the working directory
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("todo-service"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todos.sqlite")
}
