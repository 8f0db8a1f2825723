//! Admin menu: add parts to the catalog.

use std::io::{BufRead, Write};

use partshop_catalog::Catalog;
use partshop_core::Part;
use tracing::error;

use crate::console::Console;
use crate::error::CliError;

/// A logged-in admin with write access to the catalog.
pub struct AdminSession<'a> {
    catalog: &'a mut Catalog,
    username: String,
}

impl<'a> AdminSession<'a> {
    pub fn new(catalog: &'a mut Catalog, username: String) -> Self {
        Self { catalog, username }
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), CliError> {
        loop {
            console.say("1. Add part to catalog")?;
            console.say("2. Logout")?;
            match console.prompt_number("Enter choice: ")? {
                None | Some(2) => return Ok(()),
                Some(1) => self.add_part(console)?,
                Some(_) => console.say("Invalid choice!")?,
            }
        }
    }

    fn add_part<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), CliError> {
        let Some(name) = console.prompt_required("Enter part name: ", "Part name")? else {
            return Ok(());
        };
        let Some(car_model) = console.prompt_required("Enter car model: ", "Car model")? else {
            return Ok(());
        };
        let Some(price) = console.prompt_price("Enter price: ")? else {
            return Ok(());
        };

        match self.catalog.add_part(Part::new(name, car_model, price)) {
            Ok(()) => console.say("Part added to catalog.")?,
            Err(e) => {
                error!(username = %self.username, error = %e, "Failed to add part");
                console.say(format_args!("Could not add part: {e}"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use partshop_core::Price;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn run(catalog: &mut Catalog, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        AdminSession::new(catalog, "alice".to_owned())
            .run(&mut console)
            .unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_add_part_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("parts.csv");
        let mut catalog = Catalog::load(&path).unwrap();

        let out = run(&mut catalog, "1\nBrake Pad\nCivic\n45.5\n2\n");

        assert!(out.contains("Part added to catalog."));
        assert_eq!(
            catalog.parts(),
            &[Part::new("Brake Pad", "Civic", Price::parse("45.5").unwrap())]
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "Brake Pad,Civic,45.5\n");
    }

    #[test]
    fn test_bad_price_is_reprompted() {
        let dir = TempDir::new().unwrap();
        let mut catalog = Catalog::load(dir.path().join("parts.csv")).unwrap();

        let out = run(&mut catalog, "1\nOil Filter\nAccord\ntwelve\n12.0\n2\n");

        assert!(out.contains("Invalid price"));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.parts()[0].price().to_string(), "12.0");
    }

    #[test]
    fn test_save_failure_is_reported_and_not_kept() {
        let dir = TempDir::new().unwrap();
        let mut catalog = Catalog::load(dir.path().join("gone").join("parts.csv")).unwrap();

        let out = run(&mut catalog, "1\nWiper\nFit\n15\n2\n");

        assert!(out.contains("Could not add part"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_choice_then_logout() {
        let dir = TempDir::new().unwrap();
        let mut catalog = Catalog::load(dir.path().join("parts.csv")).unwrap();

        let out = run(&mut catalog, "9\n2\n");

        assert!(out.contains("Invalid choice!"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_end_of_input_mid_add_logs_out() {
        let dir = TempDir::new().unwrap();
        let mut catalog = Catalog::load(dir.path().join("parts.csv")).unwrap();

        run(&mut catalog, "1\nWiper\n");

        assert!(catalog.is_empty());
    }
}
