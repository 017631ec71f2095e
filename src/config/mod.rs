//! Configuration Module
//!
//! Reads service settings from the environment, optionally seeded from a `.env` file.
//!
//! | Variable    | Default          | Notes                              |
//! |-------------|------------------|------------------------------------|
//! | `PORT`      | `8080`           | HTTP listen port                   |
//! | `LOG_LEVEL` | `info`           | One of `debug`, `info`, `error`    |
//! | `DATA_PATH` | `data/input.txt` | Whitespace-delimited integer file  |

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
pub const DEFAULT_DATA_PATH: &str = "data/input.txt";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("invalid port: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Error,
}

impl LogLevel {
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Error => "error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub log_level: LogLevel,
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl Config {
    /// Loads `.env` (if any) into the process environment, then reads the variables.
    ///
    /// Returns whether a `.env` file was found alongside the config so the caller can
    /// log it once logging is up.
    pub fn load() -> Result<(Self, bool), ConfigError> {
        let dotenv_found = dotenvy::dotenv().is_ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok((config, dotenv_found))
    }

    /// Builds a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let log_level = match get("LOG_LEVEL") {
            Some(raw) => raw.trim().parse()?,
            None => DEFAULT_LOG_LEVEL,
        };

        let data_path = get("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Ok(Self {
            port,
            log_level,
            data_path,
        })
    }
}

#[cfg(test)]
mod tests;
