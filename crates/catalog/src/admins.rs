//! Admin credential directory.
//!
//! Loaded once from a `username,password` file and read-only afterwards.
//! Passwords are plain text on disk; in memory they are kept as
//! [`SecretString`] so they never show up in `Debug` output or logs.

use std::collections::HashMap;
use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument, warn};

use crate::error::DirectoryError;
use crate::store;

/// Username to password mapping for admin logins.
#[derive(Debug, Default)]
pub struct AdminDirectory {
    admins: HashMap<String, SecretString>,
}

impl AdminDirectory {
    /// Load the directory from `path`.
    ///
    /// A later record for the same username replaces the earlier one. Records
    /// without a password field are skipped. A missing file yields an empty
    /// directory, so no admin can log in.
    ///
    /// # Errors
    ///
    /// Returns a `DirectoryError` if the file exists but cannot be read.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let reader = store::open_reader(path).map_err(|source| DirectoryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let Some(mut reader) = reader else {
            warn!("Admins file not found, admin login is disabled");
            return Ok(Self::default());
        };

        let mut admins = HashMap::new();
        for result in reader.records() {
            let record = result.map_err(|source| DirectoryError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let (Some(username), Some(password)) = (record.get(0), record.get(1)) else {
                warn!(line = store::line_of(&record), "Skipping admin record without a password");
                continue;
            };
            admins.insert(username.to_owned(), SecretString::from(password));
        }

        info!(admins = admins.len(), "Loaded admin directory");
        Ok(Self { admins })
    }

    /// True iff `username` exists and its password equals `password` exactly.
    #[must_use]
    pub fn validate(&self, username: &str, password: &str) -> bool {
        self.admins
            .get(username)
            .is_some_and(|stored| stored.expose_secret() == password)
    }

    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.admins.contains_key(username)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.admins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }
}
