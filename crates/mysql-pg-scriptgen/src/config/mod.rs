//! Configuration loading from environment variables.
//!
//! The generator is configured entirely through the environment: the
//! `MYSQL_*` variables describe the source connection and the `PG_*`
//! variables the target connection. The CLI loads a local `.env` file
//! before calling [`Config::from_env`], so both the generator and the
//! scripts it emits read the same variables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;

use crate::error::{GenError, Result};

/// Default path of the CSV manifest.
pub const DEFAULT_MANIFEST_PATH: &str = "migrationlist.csv";

/// Default directory the generated scripts are written to.
pub const DEFAULT_OUT_DIR: &str = "./src/migrations";

/// Source database (MySQL) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Database host.
    pub host: String,

    /// Database port (default: 3306).
    pub port: u16,

    /// Username.
    pub user: String,

    /// Password.
    pub password: String,

    /// Database name.
    pub database: String,
}

/// Target database (PostgreSQL) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Database host.
    pub host: String,

    /// Database port (default: 5432).
    pub port: u16,

    /// Username.
    pub user: String,

    /// Password.
    pub password: String,

    /// Database name.
    pub database: String,

    /// Schema the target tables live in (default: "public").
    pub schema: String,
}

/// Generator behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// Path of the CSV manifest listing migration jobs.
    pub manifest_path: PathBuf,

    /// Directory the generated scripts are written to.
    pub out_dir: PathBuf,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Source database configuration (MySQL).
    pub source: SourceConfig,

    /// Target database configuration (PostgreSQL).
    pub target: TargetConfig,

    /// Generator behavior configuration.
    #[serde(default)]
    pub gen: GenConfig,
}

impl Config {
    /// Load the full configuration from the process environment.
    ///
    /// Fails fast with [`GenError::Config`] on a missing variable or an
    /// unparsable port, naming the offending variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            source: SourceConfig::from_env()?,
            target: TargetConfig::from_env()?,
            gen: GenConfig::default(),
        })
    }
}

impl SourceConfig {
    /// Load the MySQL connection settings from `MYSQL_*` variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: require_env("MYSQL_HOST")?,
            port: port_env("MYSQL_PORT", 3306)?,
            user: require_env("MYSQL_USER")?,
            password: require_env("MYSQL_PASSWORD")?,
            database: require_env("MYSQL_DATABASE")?,
        })
    }

    /// Build connection options for sqlx.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl TargetConfig {
    /// Load the PostgreSQL connection settings from `PG_*` variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: require_env("PG_HOST")?,
            port: port_env("PG_PORT", 5432)?,
            user: require_env("PG_USER")?,
            password: require_env("PG_PASSWORD")?,
            database: require_env("PG_DATABASE")?,
            schema: optional_env("PG_SCHEMA", "public"),
        })
    }

    /// Build a client configuration for tokio-postgres.
    pub fn pg_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.database)
            .user(&self.user)
            .password(&self.password);
        config
    }

    /// Schema-qualified name of a target table.
    pub fn qualified_table(&self, table: &str) -> String {
        format!("{}.{}", self.schema, table)
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| GenError::Config(format!("missing environment variable {}", name)))
}

fn optional_env(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn port_env(name: &str, default: u16) -> Result<u16> {
    match std::env::var(name) {
        Ok(value) => value
            .parse::<u16>()
            .map_err(|_| GenError::Config(format!("invalid port in {}: {:?}", name, value))),
        Err(_) => Ok(default),
    }
}
