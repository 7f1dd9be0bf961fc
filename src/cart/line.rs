//! Cart line items and the product snapshot they carry.

use chrono::{DateTime, Utc};

use crate::domain::{Price, Product, ProductId, Quantity};

/// Product fields frozen at the moment a line is created.
///
/// Pricing a cart line from a snapshot means later catalog changes do not
/// retroactively reprice items a customer already picked.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSnapshot {
    title: String,
    price: Price,
    category: String,
    image: String,
}

impl ProductSnapshot {
    /// Capture the cart-relevant fields of a product.
    #[must_use]
    pub fn of(product: &Product) -> Self {
        Self {
            title: product.title().to_string(),
            price: product.price(),
            category: product.category().to_string(),
            image: product.image().to_string(),
        }
    }

    /// Get the title at add time.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the unit price at add time.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Get the category at add time.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Get the image reference at add time.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }
}

/// One entry in the cart, uniquely identified by product id.
///
/// Lines hold a quantity of at least 1; driving the quantity to zero
/// removes the line from the store instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    product_id: ProductId,
    snapshot: ProductSnapshot,
    quantity: Quantity,
    added_at: DateTime<Utc>,
}

impl CartLine {
    /// Create a new line for a product with the given quantity.
    #[must_use]
    pub fn new(product: &Product, quantity: Quantity) -> Self {
        Self {
            product_id: product.id().clone(),
            snapshot: ProductSnapshot::of(product),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Get the product ID this line refers to.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Get the snapshot taken when the line was created.
    #[must_use]
    pub const fn snapshot(&self) -> &ProductSnapshot {
        &self.snapshot
    }

    /// Get the quantity on this line.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Get when the line was first added.
    #[must_use]
    pub const fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// Line total (snapshot price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.snapshot.price() * Price::from(self.quantity)
    }

    pub(crate) fn increment(&mut self, by: Quantity) {
        self.quantity = self.quantity.saturating_add(by);
    }

    pub(crate) fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}
