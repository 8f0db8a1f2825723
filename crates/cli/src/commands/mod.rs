//! CLI subcommands.

pub mod admin;
pub mod search;
pub mod shop;
