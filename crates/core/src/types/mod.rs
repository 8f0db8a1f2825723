//! Core types for partshop.
//!
//! This module provides type-safe wrappers for the catalog's domain concepts.

pub mod part;
pub mod price;
pub mod role;

pub use part::Part;
pub use price::{MAX_PRICE, Price, PriceError};
pub use role::SessionRole;
