//! partshop CLI - Auto-parts catalog console and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Interactive shop (login as admin or shopper)
//! partshop
//! partshop shop
//!
//! # Search without the menus
//! partshop search --name "Brake" --model "Civic"
//!
//! # Print the whole catalog
//! partshop list
//!
//! # Add a part as an admin (password from PARTSHOP_ADMIN_PASSWORD or stdin)
//! partshop add-part -u alice -n "Brake Pad" -m Civic -p 45.5
//! ```
//!
//! # Commands
//!
//! - `shop` - Interactive login and menus (the default)
//! - `search` - Substring search by name and/or car model
//! - `list` - Print every part
//! - `add-part` - Add one part after validating admin credentials

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use partshop_catalog::ShopConfig;
use partshop_core::{Part, Price};
use tracing_subscriber::EnvFilter;

mod commands;
mod console;
mod error;
mod session;

use error::CliError;

#[derive(Parser)]
#[command(name = "partshop")]
#[command(author, version, about = "Auto-parts catalog and shop")]
struct Cli {
    /// Parts file (overrides `PARTSHOP_PARTS_FILE`)
    #[arg(long, global = true)]
    parts: Option<PathBuf>,

    /// Admins file (overrides `PARTSHOP_ADMINS_FILE`)
    #[arg(long, global = true)]
    admins: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in as admin or shopper and use the menus
    Shop,
    /// Print every part in the catalog
    List,
    /// Search the catalog by name and/or car model (case-sensitive substring)
    Search {
        /// Text the part name must contain
        #[arg(short, long, default_value = "")]
        name: String,

        /// Text the car model must contain
        #[arg(short, long, default_value = "")]
        model: String,
    },
    /// Add a part to the catalog as an admin
    AddPart {
        /// Admin username
        #[arg(short, long)]
        username: String,

        /// Part name
        #[arg(short, long)]
        name: String,

        /// Car model the part fits
        #[arg(short, long)]
        model: String,

        /// Price, a non-negative decimal (e.g. 45.5)
        #[arg(short, long, value_parser = Price::parse)]
        price: Price,
    },
}

fn main() {
    // Logs go to stderr so they never interleave with the console menus
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = ShopConfig::from_env()?.with_overrides(cli.parts, cli.admins);

    match cli.command.unwrap_or(Commands::Shop) {
        Commands::Shop => commands::shop::run(&config)?,
        Commands::List => commands::search::list(&config)?,
        Commands::Search { name, model } => commands::search::search(&config, &name, &model)?,
        Commands::AddPart {
            username,
            name,
            model,
            price,
        } => {
            commands::admin::add_part(&config, &username, Part::new(name, model, price))?;
        }
    }
    Ok(())
}
