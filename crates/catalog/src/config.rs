//! Shop configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PARTSHOP_PARTS_FILE` - Path of the parts file (default: parts.csv)
//! - `PARTSHOP_ADMINS_FILE` - Path of the admins file (default: admins.csv)

use std::path::PathBuf;

use thiserror::Error;

pub const PARTS_FILE_VAR: &str = "PARTSHOP_PARTS_FILE";
pub const ADMINS_FILE_VAR: &str = "PARTSHOP_ADMINS_FILE";

const DEFAULT_PARTS_FILE: &str = "parts.csv";
const DEFAULT_ADMINS_FILE: &str = "admins.csv";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Locations of the shop's data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    /// Parts catalog file
    pub parts_file: PathBuf,
    /// Admin credentials file
    pub admins_file: PathBuf,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            parts_file: PathBuf::from(DEFAULT_PARTS_FILE),
            admins_file: PathBuf::from(DEFAULT_ADMINS_FILE),
        }
    }
}

impl ShopConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            parts_file: get_path_or_default(&lookup, PARTS_FILE_VAR, DEFAULT_PARTS_FILE)?,
            admins_file: get_path_or_default(&lookup, ADMINS_FILE_VAR, DEFAULT_ADMINS_FILE)?,
        })
    }

    /// Replace file locations with any explicitly provided ones.
    #[must_use]
    pub fn with_overrides(
        mut self,
        parts_file: Option<PathBuf>,
        admins_file: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = parts_file {
            self.parts_file = path;
        }
        if let Some(path) = admins_file {
            self.admins_file = path;
        }
        self
    }
}

/// Get a path variable with a default value, rejecting empty values.
fn get_path_or_default<F>(lookup: &F, key: &str, default: &str) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(PathBuf::from(default)),
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        )),
        Some(value) => Ok(PathBuf::from(value)),
    }
}
