//! Catalog part record.

use core::fmt;

use serde::Serialize;

use super::price::Price;

/// A purchasable part: what it is, which car it fits, and what it costs.
///
/// Parts are immutable once constructed and have no identity beyond their
/// fields, so two parts with the same name, car model and price are equal.
///
/// Field order is also the column order of the parts file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Part {
    name: String,
    car_model: String,
    price: Price,
}

impl Part {
    /// Create a new part.
    #[must_use]
    pub fn new(name: impl Into<String>, car_model: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            car_model: car_model.into(),
            price,
        }
    }

    /// The part's name (e.g., "Brake Pad").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The car model the part fits (e.g., "Civic").
    #[must_use]
    pub fn car_model(&self) -> &str {
        &self.car_model
    }

    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Case-sensitive substring match against the name.
    ///
    /// An empty query matches every part.
    #[must_use]
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.contains(query)
    }

    /// Case-sensitive substring match against the car model.
    ///
    /// An empty query matches every part.
    #[must_use]
    pub fn car_model_contains(&self, query: &str) -> bool {
        self.car_model.contains(query)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Part: {}, Car Model: {}, Price: ${}",
            self.name, self.car_model, self.price
        )
    }
}
