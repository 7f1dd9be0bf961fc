//! Cartwheel - In-memory cart and catalog-filtering core for a storefront.
//!
//! This crate provides the state model behind a storefront's browsing and
//! cart surface: a cart store with merge semantics and derived totals, and
//! a pure filter engine over an externally supplied product catalog.
//!
//! # Architecture
//!
//! Two independent state machines compose the core:
//!
//! - **[`cart::CartStore`]** - owns the cart line items; exposes
//!   add/update/remove/clear and a derived [`cart::CartState`] snapshot
//! - **[`catalog::filter_products`]** - a pure function mapping
//!   (catalog, criteria) to the visible product subset
//!
//! The two never interact: cart mutations and filter recomputation are
//! driven independently by the view layer. Rendering, routing, and
//! persistence are out of scope; the caller supplies a pre-materialized
//! [`catalog::Catalog`] and re-renders from returned state.
//!
//! # Modules
//!
//! - [`cart`] - Cart store, line items, derived totals and order summary
//! - [`catalog`] - Catalog container, filter criteria and filter engine
//! - [`config`] - Configuration loading from TOML files
//! - [`debounce`] - Cancellable delayed-commit timer for search input
//! - [`domain`] - Shared value types: product, price, identifiers
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use cartwheel::cart::CartStore;
//! use cartwheel::domain::{Product, ProductId};
//! use rust_decimal_macros::dec;
//!
//! let shoe = Product::new(
//!     ProductId::new("p-1"),
//!     "Red Shoe",
//!     dec!(59.90),
//!     "Comfortable running shoe",
//!     "footwear",
//!     "/images/red-shoe.jpg",
//!     None,
//! );
//!
//! let mut cart = CartStore::new();
//! cart.add_item(&shoe, 2);
//! assert_eq!(cart.state().item_count(), 2);
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod domain;
pub mod error;

#[cfg(feature = "testkit")]
pub mod testkit;
