//! partshop catalog library.
//!
//! Owns the data side of the shop: the parts catalog and its backing file,
//! the per-session shopping cart, and the admin credential directory.
//!
//! # Files
//!
//! - Parts file: `name,car_model,price` per line
//! - Admins file: `username,password` per line
//!
//! Both are read fully on load. The parts file is rewritten in full on every
//! change; the admins file is never written.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admins;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
mod store;

pub use admins::AdminDirectory;
pub use cart::{CartItem, CartView, Receipt, ShoppingCart};
pub use catalog::Catalog;
pub use config::{ConfigError, ShopConfig};
pub use error::{CatalogError, DirectoryError};
