//! Shopper menu: search, fill the cart, check out.

use std::io::{BufRead, Write};

use partshop_catalog::{Catalog, ShoppingCart};
use partshop_core::Part;
use tracing::debug;

use crate::console::Console;
use crate::error::CliError;

/// A shopper browsing the catalog with their own cart.
pub struct ShopperSession<'a> {
    catalog: &'a Catalog,
    cart: ShoppingCart,
}

impl<'a> ShopperSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            cart: ShoppingCart::new(),
        }
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), CliError> {
        let catalog = self.catalog;
        loop {
            console.say("1. Search part by name")?;
            console.say("2. Search part by car model")?;
            console.say("3. Search part by name and car model")?;
            console.say("4. View cart")?;
            console.say("5. Checkout")?;
            console.say("6. Logout")?;
            match console.prompt_number("Enter choice: ")? {
                None | Some(6) => return Ok(()),
                Some(1) => {
                    let Some(name) = console.prompt("Enter part name: ")? else {
                        return Ok(());
                    };
                    self.offer(catalog.search_by_name(&name), console)?;
                }
                Some(2) => {
                    let Some(car_model) = console.prompt("Enter car model: ")? else {
                        return Ok(());
                    };
                    self.offer(catalog.search_by_car_model(&car_model), console)?;
                }
                Some(3) => {
                    let Some(name) = console.prompt("Enter part name: ")? else {
                        return Ok(());
                    };
                    let Some(car_model) = console.prompt("Enter car model: ")? else {
                        return Ok(());
                    };
                    let results = catalog.search_by_name_and_car_model(&name, &car_model);
                    self.offer(results, console)?;
                }
                Some(4) => console.say(self.cart.view_cart())?,
                Some(5) => {
                    let receipt = self.cart.checkout();
                    console.say(receipt)?;
                    console.say("Thank you for your purchase!")?;
                }
                Some(_) => console.say("Invalid choice!")?,
            }
        }
    }

    /// List search results and let the shopper pick one for the cart.
    fn offer<R: BufRead, W: Write>(
        &mut self,
        results: Vec<&Part>,
        console: &mut Console<R, W>,
    ) -> Result<(), CliError> {
        if results.is_empty() {
            console.say("No parts found.")?;
            return Ok(());
        }

        for (i, part) in results.iter().enumerate() {
            console.say(format_args!("{}. {part}", i + 1))?;
        }
        let prompt = "Enter the number of the part you want to add to the cart (0 to cancel): ";
        let Some(choice) = console.prompt_number(prompt)? else {
            return Ok(());
        };

        if let Some(part) = select(&results, choice) {
            self.cart.add_to_cart(part);
            console.say("Part added to cart.")?;
        } else {
            debug!(choice, results = results.len(), "Selection cancelled");
        }
        Ok(())
    }

    #[cfg(test)]
    pub const fn cart(&self) -> &ShoppingCart {
        &self.cart
    }
}

/// Map a 1-based choice onto the displayed results; 0 or out of range is `None`.
pub fn select<'p>(results: &[&'p Part], choice: u32) -> Option<&'p Part> {
    let index = usize::try_from(choice).ok()?.checked_sub(1)?;
    results.get(index).copied()
}
