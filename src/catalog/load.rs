//! Catalog ingestion from JSON product records.
//!
//! Raw records carry binary floating point prices (the usual shape of
//! static product data); they are converted to `Decimal` here, once, at
//! the boundary. Records that violate domain invariants reject the whole
//! load rather than being silently dropped.

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::domain::{DomainError, Product, ProductId, Rating};
use crate::error::CatalogError;

use super::container::Catalog;

#[derive(Debug, Deserialize)]
struct RawRating {
    rate: f64,
    count: u32,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    id: String,
    title: String,
    price: f64,
    #[serde(default)]
    description: String,
    category: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    rating: Option<RawRating>,
}

impl RawProduct {
    fn into_product(self) -> Result<Product, CatalogError> {
        self.try_into_product().map_err(|source| CatalogError::InvalidRecord {
            product_id: self.id,
            source,
        })
    }

    fn try_into_product(&self) -> Result<Product, DomainError> {
        let price = to_decimal(self.price)?;

        let rating = match &self.rating {
            Some(raw) => Some(Rating::try_new(to_decimal(raw.rate)?, raw.count)?),
            None => None,
        };

        Product::try_new(
            ProductId::new(self.id.clone()),
            self.title.clone(),
            price,
            self.description.clone(),
            self.category.clone(),
            self.image.clone(),
            rating,
        )
    }
}

fn to_decimal(value: f64) -> Result<Decimal, DomainError> {
    Decimal::try_from(value).map_err(|_| DomainError::UnrepresentablePrice { value })
}

/// Parse a catalog from a JSON array of product records.
///
/// # Errors
///
/// Returns `CatalogError` if the JSON is malformed, a record violates a
/// domain invariant, or two records share a product id.
pub fn from_json_str(json: &str) -> Result<Catalog, CatalogError> {
    let raw: Vec<RawProduct> = serde_json::from_str(json)?;

    let products = raw
        .into_iter()
        .map(RawProduct::into_product)
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = Catalog::from_products(products)?;
    info!(products = catalog.len(), "loaded catalog");

    Ok(catalog)
}
