//! Product types supplied by the catalog collaborator.
//!
//! - [`Product`] - An immutable catalog entry
//! - [`Rating`] - Optional aggregate customer rating
//!
//! Products are read-only to the core: neither filtering nor cart
//! operations ever mutate them. The cart copies the fields it needs into
//! a snapshot at add time, so later catalog changes do not reprice
//! existing cart lines.

use rust_decimal::Decimal;

use super::error::DomainError;
use super::ids::ProductId;
use super::money::Price;

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    rate: Decimal,
    count: u32,
}

impl Rating {
    /// Create a new rating with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `rate` must be within `[0, 5]`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RatingOutOfRange` if the rate is outside the
    /// scale.
    pub fn try_new(rate: Decimal, count: u32) -> Result<Self, DomainError> {
        if rate < Decimal::ZERO || rate > Decimal::from(5) {
            return Err(DomainError::RatingOutOfRange { rate });
        }

        Ok(Self { rate, count })
    }

    /// Get the average rating on the 0 to 5 scale.
    #[must_use]
    pub const fn rate(&self) -> Decimal {
        self.rate
    }

    /// Get the number of ratings the average is drawn from.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

/// An immutable product record from the catalog.
///
/// The catalog is owned by the external data-loading collaborator and is
/// read-only to the core. Field access goes through methods so the type
/// can keep its invariants (non-negative price) once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    title: String,
    price: Price,
    description: String,
    category: String,
    image: String,
    rating: Option<Rating>,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        description: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
        rating: Option<Rating>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            description: description.into(),
            category: category.into(),
            image: image.into(),
            rating,
        }
    }

    /// Create a new product with domain invariant validation.
    ///
    /// # Domain Invariants
    ///
    /// - `id` must be non-empty
    /// - `price` must be non-negative
    ///
    /// # Errors
    ///
    /// Returns `DomainError` if any invariant is violated.
    pub fn try_new(
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        description: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
        rating: Option<Rating>,
    ) -> Result<Self, DomainError> {
        if id.as_str().is_empty() {
            return Err(DomainError::EmptyProductId);
        }

        if price < Decimal::ZERO {
            return Err(DomainError::NegativePrice { price });
        }

        Ok(Self::new(id, title, price, description, category, image, rating))
    }

    /// Get the product ID.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    /// Get the product title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the unit price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Get the product description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the category id this product belongs to.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the image reference.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Get the aggregate rating, if any.
    #[must_use]
    pub fn rating(&self) -> Option<&Rating> {
        self.rating.as_ref()
    }
}
