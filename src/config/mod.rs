use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::storage::Credentials;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DIRECTORY_URL: &str = "https://dummyjson.com";
pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_STORAGE_DIR: &str = "./.staffboard";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub directory_base_url: Url,
    pub directory_timeout: Duration,
    pub page_size: usize,
    pub storage_dir: PathBuf,
    pub credentials: Credentials,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    InvalidUrl { var: &'static str, value: String },
    InvalidNumber { var: &'static str, value: String },
    Empty(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidUrl { var, value } => write!(f, "{} is not a valid URL: {}", var, value),
            ConfigError::InvalidNumber { var, value } => {
                write!(f, "{} must be a positive integer, got {}", var, value)
            }
            ConfigError::Empty(var) => write!(f, "{} cannot be empty", var),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |var: &'static str, default: &str| -> Result<String, ConfigError> {
            match lookup(var) {
                Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(var)),
                Some(value) => Ok(value.trim().to_string()),
                None => Ok(default.to_string()),
            }
        };
        let positive = |var: &'static str, default: u64| -> Result<u64, ConfigError> {
            match lookup(var) {
                None => Ok(default),
                Some(value) => match value.trim().parse::<u64>() {
                    Ok(n) if n > 0 => Ok(n),
                    _ => Err(ConfigError::InvalidNumber { var, value }),
                },
            }
        };

        let raw_url = text("DIRECTORY_BASE_URL", DEFAULT_DIRECTORY_URL)?;
        let directory_base_url = Url::parse(&raw_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or(ConfigError::InvalidUrl { var: "DIRECTORY_BASE_URL", value: raw_url })?;

        Ok(Config {
            bind_addr: text("BIND_ADDR", DEFAULT_BIND_ADDR)?,
            directory_base_url,
            directory_timeout: Duration::from_secs(positive("DIRECTORY_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?),
            page_size: positive("PAGE_SIZE", DEFAULT_PAGE_SIZE as u64)? as usize,
            storage_dir: PathBuf::from(text("STORAGE_DIR", DEFAULT_STORAGE_DIR)?),
            credentials: Credentials {
                username: text("DASHBOARD_USERNAME", &Credentials::default().username)?,
                password: text("DASHBOARD_PASSWORD", &Credentials::default().password)?,
            },
        })
    }
}
