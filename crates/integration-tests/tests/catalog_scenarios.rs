//! Integration tests for the shopper flow over a real parts file.
//!
//! These tests load a catalog from disk, search it, move results into a cart,
//! and check out, the same way the console session does.

#![allow(clippy::unwrap_used)]

use partshop_catalog::{Catalog, ShoppingCart};
use partshop_core::{Part, Price};
use partshop_integration_tests::ShopFiles;
use pretty_assertions::assert_eq;

fn part(name: &str, car_model: &str, price: &str) -> Part {
    Part::new(name, car_model, Price::parse(price).unwrap())
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_civic_scenario() {
    let files = ShopFiles::with("Brake Pad,Civic,45.5\nOil Filter,Accord,12.0", "").unwrap();
    let catalog = Catalog::load(files.parts_path()).unwrap();

    let results = catalog.search_by_car_model("Civic");
    assert_eq!(results, vec![&part("Brake Pad", "Civic", "45.5")]);

    let mut cart = ShoppingCart::new();
    cart.add_to_cart(results[0]);
    let receipt = cart.checkout();

    assert_eq!(receipt.total.to_string(), "45.5");
    assert!(cart.is_empty());
    assert!(cart.calculate_total().is_zero());
}

#[test]
fn test_search_by_name_is_order_preserving_subset() {
    let files = ShopFiles::with(
        "Oil Filter,Accord,12.0\nBrake Pad,Civic,45.5\nAir Filter,Fit,9\nCabin Filter,Civic,14\n",
        "",
    )
    .unwrap();
    let catalog = Catalog::load(files.parts_path()).unwrap();

    let expected: Vec<&Part> = catalog
        .parts()
        .iter()
        .filter(|p| p.name().contains("Filter"))
        .collect();
    assert_eq!(catalog.search_by_name("Filter"), expected);
    assert_eq!(expected.len(), 3);
}

#[test]
fn test_combined_search_matches_intersection() {
    let files = ShopFiles::with(
        "Oil Filter,Accord,12.0\nBrake Pad,Civic,45.5\nAir Filter,Civic,9\n",
        "",
    )
    .unwrap();
    let catalog = Catalog::load(files.parts_path()).unwrap();

    let by_model = catalog.search_by_car_model("Civic");
    let intersection: Vec<&Part> = catalog
        .search_by_name("Filter")
        .into_iter()
        .filter(|p| by_model.iter().any(|m| std::ptr::eq(*m, *p)))
        .collect();

    assert_eq!(
        catalog.search_by_name_and_car_model("Filter", "Civic"),
        intersection
    );
    assert_eq!(intersection, vec![&part("Air Filter", "Civic", "9")]);
}

// =============================================================================
// Cart
// =============================================================================

#[test]
fn test_cart_keeps_copies_after_catalog_is_dropped() {
    let files = ShopFiles::with("Brake Pad,Civic,45.5\n", "").unwrap();
    let mut cart = ShoppingCart::new();
    {
        let catalog = Catalog::load(files.parts_path()).unwrap();
        cart.add_to_cart(&catalog.parts()[0]);
    }
    assert_eq!(cart.items(), &[part("Brake Pad", "Civic", "45.5")]);
}

#[test]
fn test_checkout_totals_every_line() {
    let files = ShopFiles::with("Brake Pad,Civic,45.5\nOil Filter,Accord,12.0\n", "").unwrap();
    let catalog = Catalog::load(files.parts_path()).unwrap();
    let mut cart = ShoppingCart::new();

    for p in catalog.search_by_name("") {
        cart.add_to_cart(p);
    }
    cart.add_to_cart(&catalog.parts()[1]);

    let receipt = cart.checkout();
    assert_eq!(receipt.item_count, 3);
    assert_eq!(receipt.total.to_string(), "69.5");
    assert_eq!(cart.checkout().total, Price::ZERO);
}
