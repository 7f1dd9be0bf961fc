//! Read-only product catalog container.

use std::collections::HashSet;

use crate::domain::{Product, ProductId};
use crate::error::CatalogError;

/// An ordered, read-only sequence of products.
///
/// Product ids are unique within a catalog; order is the order products
/// were supplied in and is what the filter engine preserves.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an ordered product sequence.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateProductId` if two products share
    /// an id.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id().clone()) {
                return Err(CatalogError::DuplicateProductId {
                    product_id: product.id().as_str().to_string(),
                });
            }
        }

        Ok(Self { products })
    }

    /// Get all products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Distinct category ids in first-seen order.
    ///
    /// Feeds the filter sidebar; the `All` sentinel is a filter concern,
    /// not a catalog one, so it is not included here.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(Product::category)
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
