//! Domain validation errors for core domain types.
//!
//! This module defines errors that occur when domain invariants are violated.
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! Handling validation errors:
//!
//! ```
//! use cartwheel::domain::{DomainError, Rating};
//! use rust_decimal_macros::dec;
//!
//! // Ratings above 5 fail validation
//! let result = Rating::try_new(dec!(5.5), 120);
//!
//! assert!(matches!(result, Err(DomainError::RatingOutOfRange { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
///
/// These errors are returned by `try_new` constructors and other methods
/// that validate domain rules.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Product prices are never negative.
    #[error("price must be non-negative, got {price}")]
    NegativePrice {
        /// The invalid price that was provided.
        price: rust_decimal::Decimal,
    },

    /// Ratings live on a 0 to 5 scale.
    #[error("rating must be between 0 and 5, got {rate}")]
    RatingOutOfRange {
        /// The invalid rating that was provided.
        rate: rust_decimal::Decimal,
    },

    /// Product identifiers must be non-empty.
    #[error("product id cannot be empty")]
    EmptyProductId,

    /// A price that could not be represented as a Decimal.
    #[error("price {value} is not representable")]
    UnrepresentablePrice {
        /// The offending floating point value.
        value: f64,
    },
}
