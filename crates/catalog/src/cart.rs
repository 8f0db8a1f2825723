//! Per-session shopping cart.
//!
//! A cart holds its own copies of the parts a shopper picked. It is never
//! persisted: checkout reports the total and empties it.

use core::fmt;

use partshop_core::{Part, Price};
use tracing::info;

/// A line in the cart: an owned copy of a catalog part.
pub type CartItem = Part;

/// Parts selected by one shopper, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: Vec<CartItem>,
}

/// Summary of a completed checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receipt {
    /// Sum of all item prices at checkout.
    pub total: Price,
    /// Number of line items that were in the cart.
    pub item_count: usize,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total amount: ${}", self.total)
    }
}

impl ShoppingCart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a copy of `part`. Adding the same part twice gives two lines.
    pub fn add_to_cart(&mut self, part: &Part) {
        self.items.push(part.clone());
    }

    /// Sum of item prices; zero for an empty cart.
    #[must_use]
    pub fn calculate_total(&self) -> Price {
        self.items.iter().map(Part::price).sum()
    }

    /// Total the cart and empty it.
    ///
    /// There is no payment step; the cart is cleared unconditionally.
    pub fn checkout(&mut self) -> Receipt {
        let receipt = Receipt {
            total: self.calculate_total(),
            item_count: self.items.len(),
        };
        self.items.clear();
        info!(total = %receipt.total, items = receipt.item_count, "Checked out cart");
        receipt
    }

    /// Displayable listing of the cart's current contents.
    #[must_use]
    pub fn view_cart(&self) -> CartView<'_> {
        CartView { items: &self.items }
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Borrowed view of a cart for display.
#[derive(Debug, Clone, Copy)]
pub struct CartView<'a> {
    items: &'a [CartItem],
}

impl fmt::Display for CartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "Your cart is empty.");
        }
        write!(f, "Items in your cart:")?;
        for item in self.items {
            write!(f, "\n{item}")?;
        }
        Ok(())
    }
}
