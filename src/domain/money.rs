//! Monetary and count types for cart arithmetic.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
///
/// Catalog input may carry binary floating point prices; those are
/// converted once at the parse boundary and all arithmetic after that
/// point is exact.
pub type Price = Decimal;

/// Per-line item quantity.
pub type Quantity = u32;
