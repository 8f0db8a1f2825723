//! Error types for catalog and directory file access.

use std::path::PathBuf;

use partshop_core::PriceError;
use thiserror::Error;

/// Errors that can occur while loading or saving the parts catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The parts file exists but could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be read from the parts file.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The parts file could not be rewritten.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record has fewer than the three required fields.
    #[error("line {line}: expected name,car_model,price but found {fields} field(s)")]
    Malformed { line: u64, fields: usize },

    /// A record's price field is not a valid price.
    #[error("line {line}: {source}")]
    InvalidPrice {
        line: u64,
        #[source]
        source: PriceError,
    },
}

/// Errors that can occur while loading the admin directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The admins file exists but could not be opened.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be read from the admins file.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
