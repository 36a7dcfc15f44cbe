//! Application configuration management.
//!
//! Provides typed configuration loaded from environment variables with validation.

use std::path::PathBuf;

use crate::validation::constants::{DEFAULT_MAX_DESCRIPTION_LEN, DEFAULT_MAX_TASKS};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the file tasks are loaded from and saved to
    pub tasks_file: PathBuf,

    /// Store limits
    pub store: StoreConfig,
}

/// Logical limits enforced by the task store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Maximum number of tasks the store may hold
    pub max_tasks: usize,

    /// Maximum description length, in characters
    pub max_description_len: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_tasks: DEFAULT_MAX_TASKS,
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from("tasks.txt"),
            store: StoreConfig::default(),
        }
    }
}

/// Configuration loading error.
#[derive(Debug)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration error for '{}': {}",
            self.field, self.message
        )
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `TODO_FILE`: Backing file path (default: tasks.txt)
    /// - `TODO_MAX_TASKS`: Store capacity (default: 100)
    /// - `TODO_MAX_DESCRIPTION_LEN`: Max description length in characters (default: 255)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tasks_file = lookup("TODO_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| Config::default().tasks_file);

        let store = StoreConfig {
            max_tasks: parse_or(&lookup, "TODO_MAX_TASKS", DEFAULT_MAX_TASKS)?,
            max_description_len: parse_or(
                &lookup,
                "TODO_MAX_DESCRIPTION_LEN",
                DEFAULT_MAX_DESCRIPTION_LEN,
            )?,
        };

        let config = Self { tasks_file, store };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tasks_file.as_os_str().is_empty() {
            return Err(ConfigError {
                field: "TODO_FILE".to_string(),
                message: "Cannot be empty".to_string(),
            });
        }

        if self.store.max_tasks == 0 {
            return Err(ConfigError {
                field: "TODO_MAX_TASKS".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if self.store.max_description_len == 0 {
            return Err(ConfigError {
                field: "TODO_MAX_DESCRIPTION_LEN".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

/// Parse a variable or return a default value.
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(val) => val.trim().parse().map_err(|_| ConfigError {
            field: name.to_string(),
            message: format!("Invalid value '{}', expected a valid number", val),
        }),
        None => Ok(default),
    }
}
