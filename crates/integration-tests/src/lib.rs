//! Integration tests for partshop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p partshop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_scenarios` - Load, search, cart, and checkout over real files
//! - `catalog_persistence` - Write-through and save/load round trips
//! - `admin_directory` - Credential loading and validation
//!
//! This crate's library only provides fixtures shared by the test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory holding the shop's data files.
pub struct ShopFiles {
    dir: TempDir,
}

impl ShopFiles {
    /// Create an empty scratch directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    /// Create a scratch directory with the given file contents.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be written.
    pub fn with(parts: &str, admins: &str) -> io::Result<Self> {
        let files = Self::new()?;
        fs::write(files.parts_path(), parts)?;
        fs::write(files.admins_path(), admins)?;
        Ok(files)
    }

    #[must_use]
    pub fn parts_path(&self) -> PathBuf {
        self.dir.path().join("parts.csv")
    }

    #[must_use]
    pub fn admins_path(&self) -> PathBuf {
        self.dir.path().join("admins.csv")
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}
