//! The parts catalog and its backing file.
//!
//! The catalog is an ordered list of [`Part`]s whose order matches the file.
//! Every mutation is written through to disk before returning, so memory and
//! file never drift apart.
//!
//! # File Format
//!
//! One record per line, `name,car_model,price`:
//!
//! ```text
//! Brake Pad,Civic,45.5
//! Oil Filter,Accord,12.0
//! ```
//!
//! Fields containing a comma, quote, or newline are written quoted
//! (`"Hose, Upper",Civic,9.99`) and read back intact. Fields past the third are
//! ignored on load.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use partshop_core::{Part, Price};
use tracing::{debug, info, instrument, warn};

use crate::error::CatalogError;
use crate::store;

/// In-memory parts list synchronized with its backing file.
#[derive(Debug)]
pub struct Catalog {
    parts: Vec<Part>,
    path: PathBuf,
}

impl Catalog {
    /// Load the catalog from `path`.
    ///
    /// A missing file yields an empty catalog; the file is created on the
    /// first [`add_part`](Self::add_part).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Malformed` or `CatalogError::InvalidPrice` if any
    /// record is bad (the whole load fails), or an I/O variant if the file
    /// exists but cannot be read.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref().to_path_buf();
        let parts = read_parts(&path)?;
        info!(parts = parts.len(), "Loaded catalog");
        Ok(Self { parts, path })
    }

    /// Re-read the backing file, replacing the in-memory parts.
    ///
    /// On error the current parts are left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn reload(&mut self) -> Result<(), CatalogError> {
        self.parts = read_parts(&self.path)?;
        debug!(parts = self.parts.len(), "Reloaded catalog");
        Ok(())
    }

    /// Rewrite the backing file from the in-memory parts.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Write` if the file cannot be replaced.
    pub fn save(&self) -> Result<(), CatalogError> {
        store::replace_with(&self.path, |writer| {
            for part in &self.parts {
                writer.serialize(part)?;
            }
            Ok(())
        })
        .map_err(|source| CatalogError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), parts = self.parts.len(), "Saved catalog");
        Ok(())
    }

    /// Append a part and write the catalog through to disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Write` if saving fails. The part is not kept in
    /// that case.
    pub fn add_part(&mut self, part: Part) -> Result<(), CatalogError> {
        self.parts.push(part);
        if let Err(err) = self.save() {
            self.parts.pop();
            return Err(err);
        }
        info!(parts = self.parts.len(), "Added part to catalog");
        Ok(())
    }

    /// Parts whose name contains `query` (case-sensitive), in catalog order.
    #[must_use]
    pub fn search_by_name(&self, query: &str) -> Vec<&Part> {
        self.filter(|part| part.name_contains(query))
    }

    /// Parts whose car model contains `query` (case-sensitive), in catalog order.
    #[must_use]
    pub fn search_by_car_model(&self, query: &str) -> Vec<&Part> {
        self.filter(|part| part.car_model_contains(query))
    }

    /// Parts matching both queries, in catalog order.
    #[must_use]
    pub fn search_by_name_and_car_model(&self, name: &str, car_model: &str) -> Vec<&Part> {
        self.filter(|part| part.name_contains(name) && part.car_model_contains(car_model))
    }

    /// All parts in catalog order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    fn filter(&self, predicate: impl Fn(&Part) -> bool) -> Vec<&Part> {
        self.parts.iter().filter(|part| predicate(part)).collect()
    }
}

fn read_parts(path: &Path) -> Result<Vec<Part>, CatalogError> {
    let reader = store::open_reader(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let Some(mut reader) = reader else {
        warn!(path = %path.display(), "Parts file not found, starting with an empty catalog");
        return Ok(Vec::new());
    };

    let mut parts = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parts.push(parse_record(&record)?);
    }
    Ok(parts)
}

fn parse_record(record: &StringRecord) -> Result<Part, CatalogError> {
    let line = store::line_of(record);
    let (Some(name), Some(car_model), Some(price)) =
        (record.get(0), record.get(1), record.get(2))
    else {
        return Err(CatalogError::Malformed {
            line,
            fields: record.len(),
        });
    };
    let price =
        Price::parse(price).map_err(|source| CatalogError::InvalidPrice { line, source })?;
    Ok(Part::new(name, car_model, price))
}
