//! partshop core - Shared types library.
//!
//! This crate provides the domain types used across all partshop components:
//! - `catalog` - Parts catalog, shopping cart, and admin directory
//! - `cli` - Interactive console and command-line tools
//!
//! # Architecture
//!
//! The core crate contains only types - no file access, no console I/O.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Prices, parts, and session roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
