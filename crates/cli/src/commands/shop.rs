//! Interactive shop: login, then one admin or shopper session.

use std::io::{self, BufRead, Write};

use partshop_catalog::{AdminDirectory, Catalog, ShopConfig};

use crate::console::Console;
use crate::error::CliError;
use crate::session;

/// Load the shop's files and run one interactive session on stdin/stdout.
///
/// # Errors
///
/// Returns an error if either file cannot be loaded or the console fails.
pub fn run(config: &ShopConfig) -> Result<(), CliError> {
    let mut catalog = Catalog::load(&config.parts_file)?;
    let admins = AdminDirectory::load(&config.admins_file)?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    interact(&mut catalog, &admins, &mut console)
}

/// Log in and run the resulting session to completion.
pub fn interact<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    admins: &AdminDirectory,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    if let Some(mut session) = session::login(catalog, admins, console)? {
        session.run(console)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use tempfile::TempDir;

    use super::*;

    fn shop(input: &str) -> (TempDir, String) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("parts.csv"), "Brake Pad,Civic,45.5\n").unwrap();
        fs::write(dir.path().join("admins.csv"), "alice,secret\n").unwrap();

        let mut catalog = Catalog::load(dir.path().join("parts.csv")).unwrap();
        let admins = AdminDirectory::load(dir.path().join("admins.csv")).unwrap();
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

        interact(&mut catalog, &admins, &mut console).unwrap();
        (dir, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_admin_adds_part_visible_after_reload() {
        let (dir, _out) = shop("1\nalice\nsecret\n1\nOil Filter\nAccord\n12.0\n2\n");

        let catalog = Catalog::load(dir.path().join("parts.csv")).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.search_by_car_model("Accord").len(), 1);
    }

    #[test]
    fn test_rejected_admin_ends_attempt() {
        let (dir, out) = shop("1\nalice\nnope\n1\nOil Filter\nAccord\n12.0\n2\n");

        assert!(out.contains("Invalid admin username or password!"));
        assert!(!out.contains("1. Add part to catalog"));
        let catalog = Catalog::load(dir.path().join("parts.csv")).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_shopper_checkout() {
        let (_dir, out) = shop("2\n1\nBrake\n1\n5\n6\n");
        assert!(out.contains("Total amount: $45.5"));
        assert!(out.contains("Thank you for your purchase!"));
    }
}
