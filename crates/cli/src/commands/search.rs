//! Non-interactive catalog queries.
//!
//! # Usage
//!
//! ```bash
//! partshop list
//! partshop search --name Brake
//! partshop search --model Civic
//! partshop search --name Filter --model Civic
//! ```

use std::io::{self, Write};

use partshop_catalog::{Catalog, ShopConfig};
use partshop_core::Part;

use crate::error::CliError;

/// Print every part in the catalog.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or stdout fails.
pub fn list(config: &ShopConfig) -> Result<(), CliError> {
    let catalog = Catalog::load(&config.parts_file)?;
    let parts: Vec<&Part> = catalog.parts().iter().collect();
    write_results(&mut io::stdout().lock(), &parts)?;
    Ok(())
}

/// Print parts matching both queries. Empty queries match everything.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or stdout fails.
pub fn search(config: &ShopConfig, name: &str, car_model: &str) -> Result<(), CliError> {
    let catalog = Catalog::load(&config.parts_file)?;
    let results = catalog.search_by_name_and_car_model(name, car_model);
    tracing::debug!(name, car_model, matches = results.len(), "Searched catalog");
    write_results(&mut io::stdout().lock(), &results)?;
    Ok(())
}

/// Write a 1-based numbered listing, or `No parts found.` when empty.
pub fn write_results<W: Write>(out: &mut W, results: &[&Part]) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "No parts found.");
    }
    for (i, part) in results.iter().enumerate() {
        writeln!(out, "{}. {part}", i + 1)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use partshop_core::Price;
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(results: &[&Part]) -> String {
        let mut out = Vec::new();
        write_results(&mut out, results).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_results_numbers_from_one() {
        let pad = Part::new("Brake Pad", "Civic", Price::parse("45.5").unwrap());
        let filter = Part::new("Oil Filter", "Accord", Price::parse("12.0").unwrap());
        assert_eq!(
            render(&[&pad, &filter]),
            "1. Part: Brake Pad, Car Model: Civic, Price: $45.5\n\
             2. Part: Oil Filter, Car Model: Accord, Price: $12.0\n"
        );
    }

    #[test]
    fn test_write_results_empty() {
        assert_eq!(render(&[]), "No parts found.\n");
    }
}
