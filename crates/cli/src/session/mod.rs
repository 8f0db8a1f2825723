//! Interactive sessions.
//!
//! Login picks exactly one [`Session`], which borrows the single catalog for as
//! long as it runs: mutably for an admin, shared for a shopper, who also owns a
//! fresh cart.

mod admin;
mod shopper;

use std::io::{BufRead, Write};

use partshop_catalog::{AdminDirectory, Catalog};
use partshop_core::SessionRole;
use tracing::{info, warn};

use crate::console::Console;
use crate::error::CliError;

pub use admin::AdminSession;
pub use shopper::ShopperSession;

/// The active session, chosen at login.
pub enum Session<'a> {
    Admin(AdminSession<'a>),
    Shopper(ShopperSession<'a>),
}

impl Session<'_> {
    /// Run the session's menu loop until logout or end of input.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the console fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), CliError> {
        match self {
            Self::Admin(session) => session.run(console),
            Self::Shopper(session) => session.run(console),
        }
    }
}

/// Show the login menu and build the chosen session.
///
/// Returns `Ok(None)` when the choice is invalid, the admin credentials are
/// wrong, or input ends.
///
/// # Errors
///
/// Returns `CliError::Io` if the console fails.
pub fn login<'a, R: BufRead, W: Write>(
    catalog: &'a mut Catalog,
    admins: &AdminDirectory,
    console: &mut Console<R, W>,
) -> Result<Option<Session<'a>>, CliError> {
    console.say("1. Login as Admin")?;
    console.say("2. Login as Shopper")?;
    let Some(choice) = console.prompt_number("Enter choice: ")? else {
        return Ok(None);
    };

    match SessionRole::from_menu_choice(choice) {
        Some(SessionRole::Admin) => {
            let Some(username) = console.prompt("Enter admin username: ")? else {
                return Ok(None);
            };
            let Some(password) = console.prompt("Enter admin password: ")? else {
                return Ok(None);
            };
            if admins.validate(&username, &password) {
                info!(%username, "Admin logged in");
                Ok(Some(Session::Admin(AdminSession::new(catalog, username))))
            } else {
                warn!(%username, "Rejected admin login");
                console.say("Invalid admin username or password!")?;
                Ok(None)
            }
        }
        Some(SessionRole::Shopper) => {
            info!("Shopper logged in");
            Ok(Some(Session::Shopper(ShopperSession::new(catalog))))
        }
        None => {
            console.say("Invalid choice!")?;
            Ok(None)
        }
    }
}
