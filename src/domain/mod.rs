//! Shared value types for the storefront core.

mod error;
mod ids;
mod money;
mod product;

pub use error::DomainError;
pub use ids::ProductId;
pub use money::{Price, Quantity};
pub use product::{Product, Rating};
