use std::path::PathBuf;
use thiserror::Error;

pub const DATABASE_VAR: &str = "PRODUCTS_DATABASE";
pub const LOG_VAR: &str = "PRODUCTS_LOG";

pub const DEFAULT_DATABASE: &str = "products.db";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the database path must not be empty")]
    EmptyDatabasePath,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite file holding the product table, `:memory:` keeps it in memory.
    pub database: PathBuf,
    /// `env_logger` filter directives.
    pub log_filter: String,
}

impl Config {
    /// Reads the process environment, the first argument overrides the database path.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok(), std::env::args().nth(1))
    }

    pub fn from_lookup<F>(lookup: F, database_arg: Option<String>) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = database_arg
            .or_else(|| lookup(DATABASE_VAR))
            .unwrap_or_else(|| DEFAULT_DATABASE.to_owned());

        if database.trim().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }

        let log_filter = lookup(LOG_VAR)
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Config {
            database: PathBuf::from(database.trim()),
            log_filter,
        })
    }
}
