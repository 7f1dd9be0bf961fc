//! Presentation-time order summary.
//!
//! Tax and shipping are derived at display time from the cart aggregates
//! and are never stored as cart state.

use rust_decimal::Decimal;

use crate::domain::Price;

use super::store::CartState;

/// Checkout-style breakdown of a cart snapshot.
///
/// Shipping is a flat free rate; tax is `subtotal * tax_rate` with the
/// rate supplied by configuration (see
/// [`PricingConfig`](crate::config::PricingConfig)).
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    subtotal: Price,
    shipping: Price,
    tax: Price,
    total: Price,
}

impl OrderSummary {
    /// Derive a summary from a cart snapshot and a tax rate.
    #[must_use]
    pub fn from_state(state: &CartState, tax_rate: Decimal) -> Self {
        let subtotal = state.subtotal();
        let shipping = Decimal::ZERO;
        let tax = subtotal * tax_rate;

        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Get the cart subtotal.
    #[must_use]
    pub const fn subtotal(&self) -> Price {
        self.subtotal
    }

    /// Get the shipping charge (flat free).
    #[must_use]
    pub const fn shipping(&self) -> Price {
        self.shipping
    }

    /// Get the derived tax amount.
    #[must_use]
    pub const fn tax(&self) -> Price {
        self.tax
    }

    /// Get the grand total.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::domain::{Product, ProductId};
    use rust_decimal_macros::dec;

    #[test]
    fn summary_applies_tax_rate() {
        let mut cart = CartStore::new();
        cart.add_item(
            &Product::new(ProductId::new("x"), "X", dec!(100), "", "misc", "", None),
            1,
        );

        let summary = OrderSummary::from_state(&cart.state(), dec!(0.08));

        assert_eq!(summary.subtotal(), dec!(100));
        assert_eq!(summary.shipping(), dec!(0));
        assert_eq!(summary.tax(), dec!(8.00));
        assert_eq!(summary.total(), dec!(108.00));
    }

    #[test]
    fn summary_of_empty_cart_is_zero() {
        let summary = OrderSummary::from_state(&CartStore::new().state(), dec!(0.08));

        assert_eq!(summary.subtotal(), dec!(0));
        assert_eq!(summary.total(), dec!(0));
    }
}
