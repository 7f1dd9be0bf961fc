//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`Product`], [`ProductId`],
//! [`Catalog`], and [`FilterCriteria`] so tests focus on assertions
//! rather than construction boilerplate.

use rust_decimal_macros::dec;

use crate::catalog::{Catalog, FilterCriteria};
use crate::domain::{Price, Product, ProductId};

/// Create a [`ProductId`] from a string.
pub fn product_id(id: &str) -> ProductId {
    ProductId::new(id)
}

/// Create a product with the given id and price in the `misc` category.
pub fn product(id: &str, price: Price) -> Product {
    product_in(id, price, "misc")
}

/// Create a product with the given id, price and category.
pub fn product_in(id: &str, price: Price, category: &str) -> Product {
    Product::new(
        ProductId::new(id),
        format!("Product {id}"),
        price,
        format!("Description of {id}"),
        category,
        format!("/images/{id}.jpg"),
        None,
    )
}

/// Generate a catalog of `n` products named `p0`, `p1`, ..., `p{n-1}`,
/// priced at 1, 2, ..., n.
pub fn make_catalog(n: usize) -> Catalog {
    let products = (0..n)
        .map(|i| product(&format!("p{i}"), Price::from(i as u64 + 1)))
        .collect();
    Catalog::from_products(products).expect("generated ids are distinct")
}

/// Criteria matching everything under the default price ceiling.
pub fn open_criteria() -> FilterCriteria {
    FilterCriteria::any_under(dec!(1000))
}
