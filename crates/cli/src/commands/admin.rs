//! Admin catalog management commands.
//!
//! # Usage
//!
//! ```bash
//! # Add a part (prompts for the password on stdin)
//! partshop add-part -u alice -n "Brake Pad" -m Civic -p 45.5
//!
//! # Non-interactive
//! PARTSHOP_ADMIN_PASSWORD=secret partshop add-part -u alice -n "Oil Filter" -m Accord -p 12.0
//! ```
//!
//! The stdin prompt is a plain line read, so the terminal echoes the password
//! as it is typed. Set `PARTSHOP_ADMIN_PASSWORD` to keep it off the screen.
//!
//! # Environment Variables
//!
//! - `PARTSHOP_ADMIN_PASSWORD` - Admin password (skips the prompt)

use std::io::{self, BufRead, Write};

use partshop_catalog::{AdminDirectory, Catalog, ShopConfig};
use partshop_core::Part;
use secrecy::{ExposeSecret, SecretString};

use crate::console::Console;
use crate::error::CliError;

const PASSWORD_VAR: &str = "PARTSHOP_ADMIN_PASSWORD";

/// Add one part to the catalog after validating admin credentials.
///
/// # Errors
///
/// Returns `CliError::InvalidCredentials` if the username/password pair is
/// not in the admin directory, or a load/save error.
pub fn add_part(config: &ShopConfig, username: &str, part: Part) -> Result<(), CliError> {
    let admins = AdminDirectory::load(&config.admins_file)?;

    let password = match std::env::var(PASSWORD_VAR) {
        Ok(value) => SecretString::from(value),
        // Prompt on stderr so stdout only carries the result
        Err(_) => prompt_password(&mut Console::new(io::stdin().lock(), io::stderr().lock()))?,
    };

    let mut catalog = Catalog::load(&config.parts_file)?;
    add_part_as(&mut catalog, &admins, username, &password, part)?;

    writeln!(io::stdout().lock(), "Part added to catalog.")?;
    Ok(())
}

/// Ask for the admin password, warning that it will be visible.
///
/// # Errors
///
/// Returns `CliError::InvalidCredentials` if input ends before a password is
/// entered.
fn prompt_password<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<SecretString, CliError> {
    let answer = console
        .prompt("Enter admin password (input is visible): ")?
        .ok_or(CliError::InvalidCredentials)?;
    Ok(SecretString::from(answer))
}

/// Validate `username`/`password` and add `part` to `catalog`.
///
/// # Errors
///
/// Returns `CliError::InvalidCredentials` on a bad pair, or
/// `CliError::Catalog` if saving fails.
pub fn add_part_as(
    catalog: &mut Catalog,
    admins: &AdminDirectory,
    username: &str,
    password: &SecretString,
    part: Part,
) -> Result<(), CliError> {
    if !admins.validate(username, password.expose_secret()) {
        tracing::warn!(username, "Rejected admin credentials");
        return Err(CliError::InvalidCredentials);
    }

    tracing::info!(username, name = part.name(), car_model = part.car_model(), "Adding part");
    catalog.add_part(part)?;
    Ok(())
}
