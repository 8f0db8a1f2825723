//! CLI error type.

use partshop_catalog::{CatalogError, ConfigError, DirectoryError};
use thiserror::Error;

/// Errors that end a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded or saved.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Admin directory could not be loaded.
    #[error("Admin directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Reading from or writing to the console failed.
    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),

    /// Username/password pair did not match the admin directory.
    #[error("Invalid admin username or password")]
    InvalidCredentials,
}
